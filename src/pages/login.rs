//! Login Page
//!
//! Credential form. Validation failures stay on the client; only a complete
//! form reaches the API, and only a plausible token reaches the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::auth::Session;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        let p = password.get();
        let e = email.get();

        // No request leaves the browser for an incomplete form
        if let Err(message) = validate_credentials(&u, &p, &e) {
            set_error.set(Some(message.to_string()));
            return;
        }

        set_loading.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&u, &p, &e).await {
                Ok(token) => {
                    let session = Session::new(token);
                    session.persist();
                    state.session.set(Some(session));
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    set_error.set(Some(login_error_message(&err)));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm bg-gray-800 rounded-xl p-6 border border-gray-700 shadow-xl">
                <h1 class="text-xl font-bold text-center mb-6">"Login"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />

                    {move || {
                        error.get().map(|msg| view! {
                            <p class="text-red-400 text-sm">{msg}</p>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || loading.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if loading.get() { "Checking..." } else { "Login" }}
                    </button>
                </form>

                <div class="mt-4 text-center">
                    <A href="/register" class="text-sm text-primary-400 hover:text-primary-300">
                        "Create an account"
                    </A>
                </div>
            </div>
        </div>
    }
}

/// Client-side completeness check; an empty field means no network call.
fn validate_credentials(username: &str, password: &str, email: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.trim().is_empty() || email.trim().is_empty() {
        return Err("Please fill in all fields. Login cannot continue.");
    }
    Ok(())
}

/// Translate an API failure into the message shown under the form.
fn login_error_message(error: &api::Error) -> String {
    match error {
        api::Error::NotFound => {
            "No account found for that username. Please register first.".to_string()
        }
        api::Error::Unauthorized => "Invalid username or password.".to_string(),
        api::Error::RejectedToken => "Invalid login token. Cannot continue.".to_string(),
        api::Error::Api(message) => message.clone(),
        api::Error::Network(_) | api::Error::Parse(_) => {
            "Server error. Try again later.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_form_is_rejected() {
        assert!(validate_credentials("", "secret", "a@b.c").is_err());
        assert!(validate_credentials("ada", "", "a@b.c").is_err());
        assert!(validate_credentials("ada", "secret", "").is_err());
        assert!(validate_credentials("   ", "secret", "a@b.c").is_err());
    }

    #[test]
    fn test_complete_form_is_accepted() {
        assert!(validate_credentials("ada", "secret", "ada@example.com").is_ok());
    }

    #[test]
    fn test_error_messages_distinguish_causes() {
        assert!(login_error_message(&api::Error::NotFound).contains("register"));
        assert_eq!(
            login_error_message(&api::Error::RejectedToken),
            "Invalid login token. Cannot continue."
        );
        assert_eq!(
            login_error_message(&api::Error::Api("Account locked".to_string())),
            "Account locked"
        );
        assert_eq!(
            login_error_message(&api::Error::Network("timeout".to_string())),
            "Server error. Try again later."
        );
    }
}
