use contracts::domain::profile::Profile;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::collection::use_collection;
use crate::shared::mutation::UseMutation;

const PROFILE_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "phone_number",
    "id_number",
    "address",
];

/// Member profile editor. The API exposes the caller's own profile as a
/// one-element collection; an empty collection means the profile has not
/// been created yet, so saving switches between POST and PUT accordingly.
#[component]
#[allow(non_snake_case)]
pub fn ProfilePage() -> impl IntoView {
    let profiles = use_collection::<Profile>("/accounts/profiles/");
    let save = UseMutation::new();

    let form = RwSignal::new(Profile::default());
    let (notice, set_notice) = signal(Option::<String>::None);

    // Loading finishes after the initial render, so the form is seeded
    // whenever the fetched profile arrives.
    Effect::new(move |_| {
        if let Some(profile) = profiles.items.get().into_iter().next() {
            form.set(profile);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);

        let current = form.get();
        spawn_local(async move {
            // Same path for both verbs; the API scopes the profile to the
            // bearer token, not to a URL segment.
            let saved = match current.id {
                Some(_) => {
                    save.put::<Profile, _>("/accounts/profiles/", &current, PROFILE_FIELDS)
                        .await
                }
                None => {
                    save.post::<Profile, _>("/accounts/profiles/", &current, PROFILE_FIELDS)
                        .await
                }
            };
            if let Ok(profile) = saved {
                form.set(profile.clone());
                profiles.replace_all(vec![profile]);
                set_notice.set(Some("Profile saved.".to_string()));
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"My profile"</h1>
                </div>
            </div>

            {move || notice.get().map(|n| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"✓"</span>
                    <span class="warning-box__text">{n}</span>
                </div>
            })}
            {move || profiles.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}
            {move || save.error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Show when=move || profiles.is_loading.get()>
                <div class="loading">"Loading profile..."</div>
            </Show>

            <div class="panel">
                <form class="form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="profile_first_name">"First name"</label>
                        <input
                            type="text"
                            id="profile_first_name"
                            value=move || form.with(|p| p.first_name.clone())
                            on:input=move |ev| form.update(|p| p.first_name = event_target_value(&ev))
                            required
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile_last_name">"Last name"</label>
                        <input
                            type="text"
                            id="profile_last_name"
                            value=move || form.with(|p| p.last_name.clone())
                            on:input=move |ev| form.update(|p| p.last_name = event_target_value(&ev))
                            required
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile_phone">"Phone number"</label>
                        <input
                            type="tel"
                            id="profile_phone"
                            value=move || form.with(|p| p.phone_number.clone())
                            on:input=move |ev| form.update(|p| p.phone_number = event_target_value(&ev))
                            required
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile_id_number">"ID number"</label>
                        <input
                            type="text"
                            id="profile_id_number"
                            value=move || form.with(|p| p.id_number.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|p| {
                                let value = event_target_value(&ev);
                                p.id_number = if value.is_empty() { None } else { Some(value) };
                            })
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="profile_address">"Address"</label>
                        <input
                            type="text"
                            id="profile_address"
                            value=move || form.with(|p| p.address.clone().unwrap_or_default())
                            on:input=move |ev| form.update(|p| {
                                let value = event_target_value(&ev);
                                p.address = if value.is_empty() { None } else { Some(value) };
                            })
                            disabled=move || save.is_saving.get()
                        />
                    </div>

                    <div class="form__actions">
                        <button type="submit" class="button button--primary" disabled=move || save.is_saving.get()>
                            {move || if save.is_saving.get() { "Saving..." } else { "Save profile" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
