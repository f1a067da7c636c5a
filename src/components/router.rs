//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native `hashchange`
//! events instead of leptos_router, so browser back/forward buttons work
//! without any router state of our own.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::faq::Faq;
use crate::components::todos::{TodoDashboard, TodoTitles};
use crate::config::APP_NAME;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Routes shown in the navigation bar, in order.
const NAV_ROUTES: [Route; 3] = [Route::Home, Route::Faq, Route::Titles];

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → Todo dashboard
/// - `#/faq` → FAQ
/// - `#/titles` → Title list
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <NavBar route=route_memo />
        <main class=css::page>
            {move || match route_memo.get() {
                Route::Home => view! { <TodoDashboard /> }.into_any(),
                Route::Faq => view! { <Faq /> }.into_any(),
                Route::Titles => view! { <TodoTitles /> }.into_any(),
                Route::NotFound { path } => {
                    view! { <p class=css::missing>"No page at /" {path}</p> }.into_any()
                }
            }}
        </main>
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[component]
fn NavBar(route: Memo<Route>) -> impl IntoView {
    view! {
        <nav class=css::nav>
            <span class=css::brand>{APP_NAME}</span>
            {NAV_ROUTES
                .into_iter()
                .map(|target| {
                    let href = target.to_hash();
                    let label = target.label();
                    let current = move || route.with(|r| *r == target).then_some("page");
                    view! {
                        <a href=href class=css::link aria-current=current>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
