//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Report the status to the server integration
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - Redshift Web Solutions" />

        <main class="not-found">
            <div class="container not-found-content">
                // Error code
                <h1 class="not-found-code">"404"</h1>

                <h2 class="not-found-title">"Page Not Found"</h2>

                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn btn-primary">
                    "Go Home"
                </A>
            </div>

            <p class="not-found-footer">"© 2025 Redshift Web Solutions"</p>
        </main>
    }
}
