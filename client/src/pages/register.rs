//! Registration page: email + password form posting to the auth backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::credential_form::credential_fields;
use crate::state::credentials::CredentialDraft;
use crate::util::auth_flow::go_to_login;

/// Registration form. On success the backend message is logged and the
/// router moves to `routes::POST_REGISTER`.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let draft = RwSignal::new(CredentialDraft::default());
    let navigate = use_navigate();
    let navigate_submit = navigate.clone();

    let on_register = move |_ev: leptos::ev::MouseEvent| {
        let snapshot = draft.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::HttpTransport::default();
                let _ = crate::util::auth_flow::submit_register(&transport, &snapshot, |path| {
                    navigate(path, NavigateOptions::default());
                })
                .await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate_submit, snapshot);
    };

    let on_login = move |_ev: leptos::ev::MouseEvent| {
        go_to_login(|path| navigate(path, NavigateOptions::default()));
    };

    view! {
        <div class="auth-page">
            <section class="auth-card auth-card--narrow">
                <h2 class="auth-card__title">"Register"</h2>
                <form class="credential-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    {credential_fields(draft)}
                    <div class="credential-form__actions">
                        <button type="button" class="button button--contained" on:click=on_register>
                            "Register"
                        </button>
                        <button type="button" class="button button--outlined" on:click=on_login>
                            "Login"
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
