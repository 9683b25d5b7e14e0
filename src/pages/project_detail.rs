//! Project Detail Page
//!
//! Case study for one project id, or a not-found state when the id has
//! no match.

use leptos::prelude::*;

use crate::browser;
use crate::components::ButtonVariant;
use crate::context::use_site;
use crate::layout::DetailView;
use crate::markdown;
use crate::routes;

/// Rendered once per resolved id; navigating to another project mounts a
/// fresh instance.
#[component]
pub fn ProjectDetail(id: String) -> impl IntoView {
    let ctx = use_site();

    // A new id always starts at the top of the page
    Effect::new(move |_| browser::scroll_to_top());

    match DetailView::resolve(ctx.content(), &id) {
        DetailView::NotFound { id } => {
            log::warn!("no project with id {:?}", id);
            view! {
                <div class="page not-found">
                    <h2>"Project not found"</h2>
                    <a href=routes::HOME class="back-link">"← Back to Home"</a>
                </div>
            }
            .into_any()
        }
        DetailView::Found { project, hero_url, gallery } => {
            // Link styled as a button
            let live_button = |class: &'static str| {
                project.live_url.clone().map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=ButtonVariant::Primary.classes(class)
                        >
                            <span class="btn-icon">"↗"</span>
                            "Visit Live Site"
                        </a>
                    }
                })
            };

            view! {
                <div class="page project-detail">
                    <a href=routes::HOME class="back-link">"← Back to Work"</a>

                    <header class="detail-header">
                        <div class="detail-heading">
                            <div>
                                <div class="tag-list">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                                        .collect_view()}
                                </div>
                                <h1 class="detail-title">{project.title.clone()}</h1>
                                <p class="detail-subtitle">{project.subtitle.clone()}</p>
                            </div>
                            {live_button("live-desktop")}
                        </div>
                        <div class="hero">
                            <img src=hero_url alt=project.title.clone() />
                        </div>
                    </header>

                    <div class="detail-grid">
                        <aside class="detail-sidebar">
                            <div>
                                <h3 class="eyebrow">"Client"</h3>
                                <p class="sidebar-strong">{project.client.clone()}</p>
                            </div>
                            <div>
                                <h3 class="eyebrow">"Role & Scope"</h3>
                                <p inner_html=markdown::render_inline(&project.scope_and_team)></p>
                            </div>
                            <div>
                                <h3 class="eyebrow">"Impact"</h3>
                                <p inner_html=markdown::render_inline(&project.impact)></p>
                            </div>
                            {live_button("live-mobile")}
                        </aside>

                        <div class="detail-body">
                            <section>
                                <h2>"The Challenge"</h2>
                                <div
                                    class="narrative"
                                    inner_html=markdown::render(&project.problem_statement)
                                ></div>
                            </section>
                            <section>
                                <h2>"The Solution"</h2>
                                <div
                                    class="narrative"
                                    inner_html=markdown::render(&project.overview)
                                ></div>
                                <div class="gallery">
                                    {gallery
                                        .iter()
                                        .map(|img| {
                                            view! {
                                                <figure>
                                                    <img src=img.url.clone() alt=img.caption.clone() />
                                                    <figcaption>{img.caption.clone()}</figcaption>
                                                </figure>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </section>
                        </div>
                    </div>

                    <div class="detail-footer">
                        <a href=routes::HOME class="back-link">"Back to Home"</a>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
