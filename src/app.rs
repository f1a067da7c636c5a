//! Root application module.
//!
//! Contains the main App component and application-level setup.

use leptos::prelude::*;

use crate::components::AppRouter;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component.
///
/// Errors rendered anywhere below the router end up in the boundary's
/// fallback, which lists them and offers a reload.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class=css::fallback>
                    <h1 class=css::title>"Something went wrong"</h1>
                    <ul class=css::errors>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button
                        class=css::reload
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        }>
            <AppRouter />
        </ErrorBoundary>
    }
}
