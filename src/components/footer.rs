//! Footer

use chrono::Datelike;
use leptos::prelude::*;

use crate::context::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site().site();
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-copy">
                    {format!("© {} {}. All rights reserved.", year, site.owner)}
                </div>
                <div class="footer-links">
                    {site
                        .socials
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target=link.external.then_some("_blank")
                                    rel=link.external.then_some("noopener noreferrer")
                                    aria-label=link.label.clone()
                                >
                                    {link.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
