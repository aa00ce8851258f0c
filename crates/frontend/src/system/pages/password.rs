use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::system::auth::api;

/// Change-password page. The mismatch and minimum-length checks run inside
/// `api::change_password` before any request leaves the client.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let (old_password, set_old_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let old_val = old_password.get();
        let new_val = new_password.get();
        let confirm_val = confirm_password.get();

        set_is_saving.set(true);
        set_error_message.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match api::change_password(old_val, new_val, confirm_val).await {
                Ok(()) => {
                    set_notice.set(Some("Password updated.".to_string()));
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_is_saving.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Change password"</h1>
                </div>
            </div>

            {move || error_message.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <Show when=move || notice.get().is_some()>
                <div class="notice-message">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <form class="form" on:submit=on_submit>
                <div class="form-group">
                    <label for="old_password">"Current password"</label>
                    <input
                        type="password"
                        id="old_password"
                        value=move || old_password.get()
                        on:input=move |ev| set_old_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="new_password">"New password"</label>
                    <input
                        type="password"
                        id="new_password"
                        value=move || new_password.get()
                        on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="confirm_password">"Confirm new password"</label>
                    <input
                        type="password"
                        id="confirm_password"
                        value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Update password" }}
                </button>
            </form>
        </div>
    }
}
