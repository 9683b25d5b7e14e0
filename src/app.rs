//! Portfolio App
//!
//! Router shell: navigation bar, the page for the current path, footer.

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::browser;
use crate::components::{Footer, Navbar};
use crate::context::{use_site, SiteContext};
use crate::pages::{About, Contact, Home, NotFound, ProjectDetail};
use crate::routes::AppRoute;
use crate::store;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(SiteContext::new(store::portfolio()));

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="main-content">
                    <RouteView />
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Page switch driven by the resolved route.
///
/// Re-renders only when the route changes, which also resets page-local
/// state of the page being left.
#[component]
fn RouteView() -> impl IntoView {
    let ctx = use_site();
    let pathname = use_location().pathname;
    let route = Memo::new(move |_| AppRoute::resolve(&pathname.get()));

    Effect::new(move |_| {
        let current = route.get();
        log::debug!("route {} -> {:?}", current.path(), current);
        browser::set_document_title(&current.title(&ctx.site().brand, ctx.content()));
    });

    move || match route.get() {
        AppRoute::Home => view! { <Home /> }.into_any(),
        AppRoute::About => view! { <About /> }.into_any(),
        AppRoute::Contact => view! { <Contact /> }.into_any(),
        AppRoute::Project(id) => view! { <ProjectDetail id=id /> }.into_any(),
        AppRoute::NotFound(path) => {
            log::warn!("no route for {}", path);
            view! { <NotFound path=path /> }.into_any()
        }
    }
}
