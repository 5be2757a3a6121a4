//! Home Page
//!
//! Public landing page with links to login and registration.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            // Header
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🗂"</span>
                        <span class="text-xl font-bold">"Back-Office Console"</span>
                    </div>

                    <nav class="flex items-center space-x-2">
                        <A
                            href="/login"
                            class="px-4 py-2 rounded-lg border border-gray-600 text-gray-300
                                   hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Login"
                        </A>
                        <A
                            href="/register"
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700
                                   font-medium transition-colors"
                        >
                            "Register"
                        </A>
                    </nav>
                </div>
            </header>

            // Hero
            <main class="flex-1 flex flex-col items-center justify-center text-center px-4 py-24">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"Your Admin Console Awaits"</h1>
                <p class="max-w-xl text-gray-400 text-lg leading-relaxed">
                    "Log in or register to manage staff positions, review your account, "
                    "and keep the back office organized from one place."
                </p>
            </main>
        </div>
    }
}
