//! Catch-all 404 page.

use leptos::prelude::*;

/// Rendered for any path the route table does not match.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Back to the home page"</a>
        </div>
    }
}
