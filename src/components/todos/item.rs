//! Single todo row.

use leptos::prelude::*;

use crate::models::Todo;

stylance::import_crate_style!(css, "src/components/todos/todos.module.css");

/// Renders id, title and user id of a todo.
///
/// An absent todo renders an empty row, so the selected-todo slot keeps
/// its place while the first fetch is in flight.
#[component]
pub fn TodoItem(
    #[prop(into)] todo: Signal<Option<Todo>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = if on_click.is_some() {
        format!("{} {}", css::item, css::clickable)
    } else {
        css::item.to_string()
    };

    let id = move || todo.with(|t| t.as_ref().map(|t| t.id.to_string()));
    let title = move || todo.with(|t| t.as_ref().map(|t| t.title.clone()));
    let user_id = move || todo.with(|t| t.as_ref().map(|t| format!("user {}", t.user_id)));

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class=css::muted>{id}</span>
            <span>{title}</span>
            <span class=css::muted>{user_id}</span>
        </div>
    }
}
