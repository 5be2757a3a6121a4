//! Sidebar Component
//!
//! Collapsible navigation rail for the dashboard shell.

use leptos::*;
use leptos_router::*;

/// Sidebar navigation with a collapse toggle
#[component]
pub fn Sidebar() -> impl IntoView {
    let (collapsed, set_collapsed) = create_signal(false);

    view! {
        <aside class=move || {
            let base = "bg-gray-800 border-r border-gray-700 flex flex-col transition-all";
            if collapsed.get() {
                format!("{} w-16", base)
            } else {
                format!("{} w-64", base)
            }
        }>
            // Brand and collapse toggle
            <div class="h-16 flex items-center justify-between px-4 border-b border-gray-700">
                {move || {
                    if collapsed.get() {
                        view! { <span class="text-2xl">"🗂"</span> }.into_view()
                    } else {
                        view! { <span class="text-xl font-bold text-white">"Back-Office"</span> }.into_view()
                    }
                }}
                <button
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    class="text-gray-400 hover:text-white transition-colors"
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            // Navigation links
            <nav class="flex-1 py-4 space-y-1">
                <SidebarLink href="/dashboard" label="Overview" icon="🏠" collapsed=collapsed />
                <SidebarLink href="/dashboard/positions" label="Positions" icon="🗂" collapsed=collapsed />
                <SidebarLink href="/dashboard/settings" label="Settings" icon="⚙" collapsed=collapsed />
            </nav>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    collapsed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center space-x-3 px-4 py-2 mx-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{icon}</span>
            {move || {
                if collapsed.get() {
                    view! {}.into_view()
                } else {
                    view! { <span>{label}</span> }.into_view()
                }
            }}
        </A>
    }
}
