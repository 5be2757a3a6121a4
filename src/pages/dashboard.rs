//! Dashboard Shell and Overview
//!
//! The shell guards every nested route: no stored token means an immediate
//! redirect to login, checked once per mount. The overview shows the
//! decoded token claims, which are display-only.

use leptos::*;
use leptos_router::*;

use crate::auth::Session;
use crate::components::{Loading, Sidebar};
use crate::state::global::GlobalState;

/// Protected layout route: sidebar, header with logout, nested outlet.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (ready, set_ready) = create_signal(false);

    // Guard on mount: unauthenticated visitors never see the shell
    {
        let state = state.clone();
        let navigate = navigate.clone();
        create_effect(move |_| {
            match Session::load() {
                Some(session) => {
                    state.session.set(Some(session));
                    set_ready.set(true);
                }
                None => navigate("/login", Default::default()),
            }
        });
    }

    view! {
        {move || {
            if ready.get() {
                view! {
                    <div class="min-h-screen flex">
                        <Sidebar />
                        <div class="flex-1 flex flex-col">
                            <Header />
                            <main class="flex-1 p-6 overflow-auto">
                                <Outlet />
                            </main>
                        </div>
                    </div>
                }.into_view()
            } else {
                view! { <Loading /> }.into_view()
            }
        }}
    }
}

/// Shell header with the logout action
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let on_logout = move |_| {
        state.expire_session();
        navigate("/login", Default::default());
    };

    view! {
        <header class="h-16 bg-gray-800 border-b border-gray-700 flex items-center justify-between px-6">
            <h2 class="text-xl font-bold">"Dashboard"</h2>

            <button
                on:click=on_logout
                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            >
                "Log out"
            </button>
        </header>
    }
}

/// Dashboard overview: greeting, account cards, and the decoded token.
/// Everything shown here comes from an UNVERIFIED decode; it informs the
/// user, never the client's behavior.
#[component]
pub fn DashboardHome() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-8">
            {move || {
                let session = state.session.get();
                let claims = session.as_ref().and_then(|s| s.claims());

                let username = claims
                    .as_ref()
                    .and_then(|c| c.username.clone())
                    .unwrap_or_else(|| "Guest".to_string());
                let role = claims
                    .as_ref()
                    .and_then(|c| c.role.clone())
                    .unwrap_or_else(|| "User".to_string());
                let expiry = claims
                    .as_ref()
                    .and_then(|c| c.exp)
                    .and_then(|exp| chrono::DateTime::from_timestamp(exp, 0))
                    .map(|dt| dt.format("%b %d, %Y %H:%M UTC").to_string());
                let token = session.as_ref().map(|s| s.token().to_string());

                view! {
                    <h1 class="text-2xl font-bold">{format!("Welcome back, {}!", username)}</h1>

                    // Account cards
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <AccountCard label="Account Type" value=role />
                        <AccountCard label="Status" value="Active".to_string() />
                        <AccountCard
                            label="Token Expiry"
                            value=expiry.unwrap_or_else(|| "Not present in token".to_string())
                        />
                    </div>

                    // Raw bearer token, for copy-paste into API tooling
                    <section>
                        <h3 class="text-lg font-semibold mb-2">"Bearer Token"</h3>
                        <pre class="p-4 bg-gray-800 rounded-xl border border-gray-700 text-xs
                                    whitespace-pre-wrap break-all">
                            {token.unwrap_or_else(|| "No token available".to_string())}
                        </pre>
                        <p class="text-xs text-gray-500 mt-2">
                            "Claims above are decoded without signature verification and are shown "
                            "for reference only."
                        </p>
                    </section>
                }
            }}
        </div>
    }
}

/// Single stat card on the overview
#[component]
fn AccountCard(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <p class="text-gray-400 text-sm">{label}</p>
            <h3 class="text-lg font-semibold mt-1">{value}</h3>
        </div>
    }
}
