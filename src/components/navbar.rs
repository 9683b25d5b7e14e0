//! Navigation Bar
//!
//! Brand link, desktop links and the mobile overlay menu. The overlay
//! closes on every route change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::use_site;
use crate::routes::{self, is_active};

/// (path, label) of the primary links
const NAV_LINKS: &[(&str, &str)] = &[
    (routes::HOME, "WORK"),
    (routes::ABOUT, "ABOUT"),
    (routes::CONTACT, "CONTACT"),
];

/// Mobile overlay state.
///
/// The menu belongs to the navigation it was opened in; any route change
/// starts a new navigation, which closes it.
#[derive(Clone, Copy)]
pub(crate) struct MenuState {
    navigation: Memo<(String, u64)>,
    opened_in: RwSignal<Option<u64>>,
}

impl MenuState {
    pub fn new(pathname: Signal<String>) -> Self {
        let navigation = Memo::new(move |prev: Option<&(String, u64)>| {
            let path = pathname.get();
            match prev {
                Some((last, n)) if *last == path => (path, *n),
                Some((_, n)) => (path, n + 1),
                None => (path, 0),
            }
        });
        Self {
            navigation,
            opened_in: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        let current = self.navigation.with(|(_, n)| *n);
        self.opened_in.get() == Some(current)
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            let current = self.navigation.with_untracked(|(_, n)| *n);
            self.opened_in.set(Some(current));
        }
    }

    pub fn close(&self) {
        self.opened_in.set(None);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site().site();
    let pathname = use_location().pathname;
    let menu = MenuState::new(pathname.into());

    let link_class = move |path: &'static str| {
        move || {
            if is_active(path, &pathname.get()) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href=routes::HOME class="brand">
                    {site.brand.clone()}
                    <span class="brand-dot">"."</span>
                </a>

                // Desktop
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(path, label)| view! { <a href=*path class=link_class(*path)>{*label}</a> })
                        .collect_view()}
                </div>

                // Mobile toggle
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.toggle()
                >
                    {move || if menu.is_open() { "✕" } else { "☰" }}
                </button>

                <Show when=move || menu.is_open()>
                    <div class="mobile-menu">
                        {NAV_LINKS
                            .iter()
                            .map(|(path, label)| {
                                view! {
                                    <a
                                        href=*path
                                        class=link_class(*path)
                                        on:click=move |_| menu.close()
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_change_closes_menu() {
        let owner = Owner::new();
        owner.set();

        let pathname = RwSignal::new("/".to_string());
        let menu = MenuState::new(pathname.into());
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());

        pathname.set("/about".to_string());
        assert!(!menu.is_open());

        // Coming back does not reopen it
        pathname.set("/".to_string());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_and_close() {
        let owner = Owner::new();
        owner.set();

        let pathname = RwSignal::new("/contact".to_string());
        let menu = MenuState::new(pathname.into());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        // Same path again is not a route change
        menu.toggle();
        pathname.set("/contact".to_string());
        assert!(menu.is_open());
    }
}
