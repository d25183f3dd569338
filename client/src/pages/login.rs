//! Login page: email + password form posting to the auth backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::credential_form::credential_fields;
use crate::state::credentials::CredentialDraft;
use crate::util::auth_flow::go_to_register;

/// Login form. A successful login only logs the backend message; the page
/// does not change.
#[component]
pub fn LoginPage() -> impl IntoView {
    let draft = RwSignal::new(CredentialDraft::default());
    let navigate = use_navigate();

    let on_login = move |_ev: leptos::ev::MouseEvent| {
        let snapshot = draft.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::HttpTransport::default();
            let _ = crate::util::auth_flow::submit_login(&transport, &snapshot).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    let on_register = move |_ev: leptos::ev::MouseEvent| {
        go_to_register(|path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <div class="auth-page">
            <section class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="credential-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    {credential_fields(draft)}
                    <div class="credential-form__actions">
                        <button type="button" class="button button--contained" on:click=on_login>
                            "Login"
                        </button>
                        <button type="button" class="button button--outlined" on:click=on_register>
                            "Register"
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
