//! Positions Page
//!
//! CRUD screen for staff position records. The client keeps no cache:
//! every mutation is followed by a full reload of the collection.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::ListSkeleton;
use crate::state::global::{GlobalState, Position};

/// Positions management page
#[component]
pub fn Positions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (positions, set_positions) = create_signal(Vec::<Position>::new());
    let (code, set_code) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (editing, set_editing) = create_signal(None::<i64>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    // Every 401 lands here: drop the session and bounce to login
    let expire = {
        let state = state.clone();
        let navigate = navigate.clone();
        move || {
            state.expire_session();
            navigate("/login", Default::default());
        }
    };

    let load = {
        let state = state.clone();
        let expire = expire.clone();
        move || {
            let state = state.clone();
            let expire = expire.clone();
            set_loading.set(true);
            spawn_local(async move {
                let result = match state.session.get_untracked() {
                    Some(session) => api::list_positions(&session).await,
                    None => Err(api::Error::Unauthorized),
                };
                set_loading.set(false);
                match result {
                    Ok(list) => {
                        set_positions.set(list);
                        set_error.set(None);
                    }
                    Err(api::Error::Unauthorized) => expire(),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch positions: {}", e).into(),
                        );
                        set_error.set(Some("Failed to load positions.".to_string()));
                    }
                }
            });
        }
    };

    // Initial load on mount
    {
        let load = load.clone();
        create_effect(move |_| load());
    }

    let on_submit = {
        let state = state.clone();
        let expire = expire.clone();
        let load = load.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let c = code.get();
            let n = name.get();
            if c.trim().is_empty() || n.trim().is_empty() {
                set_error.set(Some("Code and name are both required.".to_string()));
                return;
            }

            set_error.set(None);
            set_submitting.set(true);

            let state = state.clone();
            let expire = expire.clone();
            let load = load.clone();
            spawn_local(async move {
                // Edit target set means update-in-place, otherwise create
                let target = editing.get_untracked();
                let result = match state.session.get_untracked() {
                    Some(session) => match target {
                        Some(id) => api::update_position(&session, id, &c, &n).await.map(|_| ()),
                        None => api::create_position(&session, &c, &n).await.map(|_| ()),
                    },
                    None => Err(api::Error::Unauthorized),
                };
                set_submitting.set(false);
                match result {
                    Ok(()) => {
                        set_code.set(String::new());
                        set_name.set(String::new());
                        set_editing.set(None);
                        state.show_success(if target.is_some() {
                            "Position updated"
                        } else {
                            "Position created"
                        });
                        load();
                    }
                    Err(api::Error::Unauthorized) => expire(),
                    Err(api::Error::Api(message)) => set_error.set(Some(message)),
                    Err(_) => set_error.set(Some("Could not save the position.".to_string())),
                }
            });
        }
    };

    let on_delete = {
        let state = state.clone();
        let expire = expire.clone();
        let load = load.clone();
        move |id: i64| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this position?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let state = state.clone();
            let expire = expire.clone();
            let load = load.clone();
            spawn_local(async move {
                let result = match state.session.get_untracked() {
                    Some(session) => api::delete_position(&session, id).await,
                    None => Err(api::Error::Unauthorized),
                };
                match result {
                    Ok(()) => {
                        state.show_success("Position deleted");
                        load();
                    }
                    Err(api::Error::Unauthorized) => expire(),
                    Err(api::Error::Api(message)) => set_error.set(Some(message)),
                    Err(_) => set_error.set(Some("Could not delete the position.".to_string())),
                }
            });
        }
    };

    let start_edit = move |position: Position| {
        set_code.set(position.code);
        set_name.set(position.name);
        set_editing.set(position.id);
        set_error.set(None);
    };

    let cancel_edit = move |_| {
        set_code.set(String::new());
        set_name.set(String::new());
        set_editing.set(None);
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Positions"</h1>
                <p class="text-gray-400 mt-1">"Manage staff position records"</p>
            </div>

            // Error banner
            {move || {
                error.get().map(|msg| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 px-4 py-3 rounded-lg">
                        {msg}
                    </div>
                })
            }}

            // Form: creates when no edit target is set, updates otherwise
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || if editing.get().is_some() { "Edit Position" } else { "New Position" }}
                </h2>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Code"</label>
                            <input
                                type="text"
                                placeholder="e.g., OPS-1"
                                prop:value=move || code.get()
                                on:input=move |ev| set_code.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                            <input
                                type="text"
                                placeholder="e.g., Operations Lead"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div class="flex space-x-3">
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if editing.get().is_some() {
                                    "Save Changes"
                                } else {
                                    "Create"
                                }
                            }}
                        </button>

                        {move || {
                            if editing.get().is_some() {
                                view! {
                                    <button
                                        type="button"
                                        on:click=cancel_edit
                                        class="px-4 py-3 bg-gray-700 hover:bg-gray-600
                                               rounded-lg font-medium transition-colors"
                                    >
                                        "Cancel"
                                    </button>
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>
                </form>
            </section>

            // Collection
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"All Positions"</h2>

                {
                    let on_delete = on_delete.clone();
                    move || {
                        if loading.get() {
                            view! { <ListSkeleton /> }.into_view()
                        } else {
                            let list = positions.get();
                            if list.is_empty() {
                                view! {
                                    <p class="text-gray-400">
                                        "No positions yet. Create the first one above."
                                    </p>
                                }.into_view()
                            } else {
                                let on_delete = on_delete.clone();
                                view! {
                                    <table class="w-full text-left">
                                        <thead>
                                            <tr class="text-gray-400 text-sm border-b border-gray-700">
                                                <th class="py-2 pr-4">"ID"</th>
                                                <th class="py-2 pr-4">"Code"</th>
                                                <th class="py-2 pr-4">"Name"</th>
                                                <th class="py-2 text-right">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list.into_iter().map(|position| {
                                                let on_delete = on_delete.clone();
                                                let row = position.clone();
                                                let Position { id, code, name } = position;
                                                view! {
                                                    <tr class="border-b border-gray-700 last:border-0">
                                                        <td class="py-3 pr-4 text-gray-500">
                                                            {id.map(|v| v.to_string()).unwrap_or_default()}
                                                        </td>
                                                        <td class="py-3 pr-4 font-mono">{code}</td>
                                                        <td class="py-3 pr-4">{name}</td>
                                                        <td class="py-3 text-right space-x-2">
                                                            <button
                                                                on:click=move |_| start_edit(row.clone())
                                                                class="px-3 py-1 bg-gray-700 hover:bg-gray-600
                                                                       rounded text-sm transition-colors"
                                                            >
                                                                "Edit"
                                                            </button>
                                                            <button
                                                                on:click=move |_| {
                                                                    if let Some(id) = id {
                                                                        on_delete(id);
                                                                    }
                                                                }
                                                                class="px-3 py-1 bg-red-700/70 hover:bg-red-600
                                                                       rounded text-sm transition-colors"
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_view()
                            }
                        }
                    }
                }
            </section>
        </div>
    }
}
