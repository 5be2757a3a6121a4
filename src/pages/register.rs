//! Register Page
//!
//! Account creation form with a confirmation state on success.

use leptos::*;
use leptos_router::*;

use crate::api;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);
    let (registered, set_registered) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let u = username.get();
        let p = password.get();
        let e = email.get();

        if u.trim().is_empty() || p.trim().is_empty() || e.trim().is_empty() {
            set_error.set(Some("Please fill out all fields.".to_string()));
            return;
        }

        set_submitting.set(true);

        spawn_local(async move {
            match api::register(&u, &p, &e).await {
                Ok(()) => {
                    set_registered.set(true);
                    set_username.set(String::new());
                    set_password.set(String::new());
                    set_email.set(String::new());
                }
                Err(err) => {
                    set_error.set(Some(register_error_message(&err)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-sm bg-gray-800 rounded-xl p-6 border border-gray-700 shadow-xl">
                <h1 class="text-xl font-bold text-center mb-6">"Register"</h1>

                {move || {
                    if registered.get() {
                        view! {
                            <div class="text-center space-y-4">
                                <p class="text-green-400 font-medium">
                                    "Registered successfully! You can now login."
                                </p>
                                <A
                                    href="/login"
                                    class="block w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                                           rounded-lg font-medium transition-colors"
                                >
                                    "Go to Login"
                                </A>
                            </div>
                        }.into_view()
                    } else {
                        view! {
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
                                        <p class="text-red-400 text-sm font-medium">{msg}</p>
                                    })
                                }}

                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                           rounded-lg font-medium transition-colors"
                                >
                                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                                </button>
                            </form>
                        }.into_view()
                    }
                }}

                {move || {
                    if !registered.get() {
                        view! {
                            <div class="mt-4 text-center">
                                <A href="/login" class="text-sm text-primary-400 hover:text-primary-300">
                                    "Back to Login"
                                </A>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Registration surfaces the server message when there is one.
fn register_error_message(error: &api::Error) -> String {
    match error {
        api::Error::Api(message) => message.clone(),
        _ => "Registration failed. Try again later.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_surfaced() {
        assert_eq!(
            register_error_message(&api::Error::Api("Username taken".to_string())),
            "Username taken"
        );
        assert_eq!(
            register_error_message(&api::Error::Network("offline".to_string())),
            "Registration failed. Try again later."
        );
    }
}
