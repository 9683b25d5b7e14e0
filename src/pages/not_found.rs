//! Not Found Page
//!
//! Rendered for any path the resolver does not know.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <p class="not-found-path">{path}</p>
            <a href=routes::HOME class="back-link">"← Back to Home"</a>
        </div>
    }
}
