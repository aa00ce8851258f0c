use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::system::auth::api;

/// Login / registration entry point. Shown by the auth gate whenever no
/// session exists; a successful login flips the session signal and the gate
/// swaps this page out automatically.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (registering, set_registering) = signal(false);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"SaccoHub"</h1>
                <Show
                    when=move || registering.get()
                    fallback=move || view! { <LoginForm on_register=move || set_registering.set(true) /> }
                >
                    <RegisterForm on_login=move || set_registering.set(false) />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_register: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(()) => {
                    // The session signal flips inside login and the gate
                    // unmounts this form; its signals must not be written to
                    // after that.
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Sign in"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message">
                {move || error_message.get().unwrap_or_default()}
            </div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="member@example.com"
                    value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>

        <div class="login-info">
            <p>
                "No account yet? "
                <a href="#" on:click=move |ev| { ev.prevent_default(); on_register(); }>
                    "Register"
                </a>
            </p>
        </div>
    }
}

#[component]
fn RegisterForm(on_login: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = form.get();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match api::register(request).await {
                Ok(true) => {
                    // Registered and logged in; the gate unmounts this form.
                }
                Ok(false) => {
                    // Account created but no token issued; member signs in manually.
                    set_notice.set(Some(
                        "Account created. Please sign in with your new credentials.".to_string(),
                    ));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Create an account"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message">
                {move || error_message.get().unwrap_or_default()}
            </div>
        </Show>

        <Show when=move || notice.get().is_some()>
            <div class="notice-message">
                {move || notice.get().unwrap_or_default()}
            </div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="first_name">"First name"</label>
                <input
                    type="text"
                    id="first_name"
                    value=move || form.get().first_name
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="last_name">"Last name"</label>
                <input
                    type="text"
                    id="last_name"
                    value=move || form.get().last_name
                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="reg_email">"Email"</label>
                <input
                    type="email"
                    id="reg_email"
                    value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="phone_number">"Phone number"</label>
                <input
                    type="tel"
                    id="phone_number"
                    placeholder="+2547..."
                    value=move || form.get().phone_number
                    on:input=move |ev| form.update(|f| f.phone_number = event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="reg_password">"Password"</label>
                <input
                    type="password"
                    id="reg_password"
                    value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Creating account..." } else { "Register" }}
            </button>
        </form>

        <div class="login-info">
            <p>
                "Already a member? "
                <a href="#" on:click=move |ev| { ev.prevent_default(); on_login(); }>
                    "Sign in"
                </a>
            </p>
        </div>
    }
}
