//! Email + password inputs bound to a `CredentialDraft`.

use leptos::prelude::*;

use crate::state::credentials::CredentialDraft;

/// Two text fields that write every keystroke into `draft`.
///
/// The caller renders the buttons; this only owns the inputs.
pub fn credential_fields(draft: RwSignal<CredentialDraft>) -> impl IntoView {
    view! {
        <div class="credential-form__fields">
            <label class="credential-form__field">
                <span class="credential-form__label">"Email"</span>
                <input
                    class="credential-form__input"
                    type="email"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.set_email(event_target_value(&ev)))
                />
            </label>
            <label class="credential-form__field">
                <span class="credential-form__label">"Password"</span>
                <input
                    class="credential-form__input"
                    type="password"
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.set_password(event_target_value(&ev)))
                />
            </label>
        </div>
    }
}
