//! Static FAQ page.

use leptos::prelude::*;

use crate::config::{cache, dashboard};

stylance::import_crate_style!(css, "src/components/todos/todos.module.css");

/// Question/answer pairs shown on the FAQ page.
fn entries() -> Vec<(&'static str, String)> {
    vec![
        (
            "Where do the todos come from?",
            format!("They are fetched from {}.", crate::config::API_BASE_URL),
        ),
        (
            "Why does the list load instantly on the second visit?",
            format!(
                "The list is cached in localStorage under \"{}\" for {} seconds.",
                cache::TODOS_KEY,
                cache::TODOS_EXPIRE_SECS
            ),
        ),
        (
            "Why does the selected todo keep changing?",
            format!(
                "Its id is bumped every {} ms. When a fetch fails it starts over at {}.",
                dashboard::POLL_INTERVAL_MS,
                dashboard::FALLBACK_TODO_ID
            ),
        ),
    ]
}

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class=css::dashboard>
            {entries()
                .into_iter()
                .map(|(question, answer)| {
                    view! {
                        <section class=css::section>
                            <h2 class=css::heading>{question}</h2>
                            <p class=css::muted>{answer}</p>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
