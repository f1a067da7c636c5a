//! Todo dashboard: the cached todo list plus a polled "selected" todo.

use std::time::Duration;

use leptos::logging::{error, log};
use leptos::prelude::*;

use super::TodoItem;
use crate::api::{get_todo, get_todos};
use crate::components::hooks::use_fetch;
use crate::config::{cache, dashboard};
use crate::core::fetch::{CacheOptions, FetchOptions, request};
use crate::models::{Todo, is_a_todo, is_an_array_of_todos};

stylance::import_crate_style!(css, "src/components/todos/todos.module.css");

/// Todo dashboard.
///
/// - The full list is cached in localStorage and validated before use.
/// - The selected todo is refetched whenever its id changes; a timer
///   bumps the id every second, and a failed fetch resets it.
#[component]
pub fn TodoDashboard() -> impl IntoView {
    let selected = RwSignal::new(dashboard::INITIAL_TODO_ID);

    let todos = use_fetch(
        request(get_todos),
        FetchOptions::new()
            .type_check(is_an_array_of_todos)
            .cache(
                CacheOptions::new(cache::TODOS_KEY)
                    .cache_result(true)
                    .expire_after(cache::TODOS_EXPIRE_SECS)
                    .use_local_storage(true),
            ),
        || (),
    );

    let todo = use_fetch(
        request(move || get_todo(selected.get_untracked())),
        FetchOptions::new()
            .type_check(is_a_todo)
            .on_error(move |_| selected.set(dashboard::FALLBACK_TODO_ID))
            .on_success(|todo: &Todo| log!("{:?}", todo)),
        move || selected.get(),
    );

    match set_interval_with_handle(
        move || selected.update(|id| *id += 1),
        Duration::from_millis(dashboard::POLL_INTERVAL_MS.into()),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => error!("failed to start todo poller: {:?}", e),
    }

    let todo_state = todo.state;
    let selected_todo = Signal::derive(move || todo_state.with(|s| s.result.clone()));

    view! {
        {move || {
            if todos.loading() {
                return view! { <p class=css::status>"Loading..."</p> }.into_any();
            }

            if let Some(e) = todos.error() {
                return view! { <p class=css::error>"Error: " {e.to_string()}</p> }.into_any();
            }

            let visible: Vec<Todo> = todos
                .result()
                .unwrap_or_default()
                .into_iter()
                .take(dashboard::VISIBLE_TODOS)
                .collect();

            view! {
                <div class=css::dashboard>
                    <section class=css::section>
                        <h2 class=css::heading>"Selected Todo"</h2>
                        <TodoItem todo=selected_todo />
                    </section>
                    <section class=css::section>
                        <h2 class=css::heading>"All Todos"</h2>
                        <For
                            each=move || visible.clone()
                            key=|todo| todo.id
                            children=move |todo| {
                                let id = todo.id;
                                view! {
                                    <TodoItem
                                        todo=Some(todo)
                                        on_click=Callback::new(move |_| selected.set(id))
                                    />
                                }
                            }
                        />
                    </section>
                    <div class=css::actions>
                        <button
                            class=css::button
                            on:click=move |_| {
                                todos.invalidate_cache();
                                todos.execute();
                            }
                        >
                            "Reload list"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
