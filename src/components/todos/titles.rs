//! Plain title list, fetched once per mount without caching.

use leptos::prelude::*;

use crate::api::get_todos;

stylance::import_crate_style!(css, "src/components/todos/todos.module.css");

#[component]
pub fn TodoTitles() -> impl IntoView {
    let todos = LocalResource::new(get_todos);

    view! {
        <div class=css::dashboard>
            <Suspense fallback=move || view! { <p class=css::status>"Loading..."</p> }>
                {move || {
                    todos
                        .get()
                        .map(|fetched| match fetched {
                            Ok(list) => {
                                view! {
                                    <ul>
                                        {list
                                            .into_iter()
                                            .map(|todo| view! { <li>{todo.title}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class=css::error>"Error: " {e.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
