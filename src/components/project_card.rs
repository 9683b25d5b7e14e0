//! Project Card Component
//!
//! Grid tile for a featured project.

use leptos::prelude::*;

use crate::models::Project;

#[component]
pub fn ProjectCard(
    project: &'static Project,
    /// Large 2x2 tile styling
    #[prop(optional)] priority: bool,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let id = project.id.clone();

    view! {
        <div
            class="project-card"
            class:priority=priority
            on:click=move |_| on_select.run(id.clone())
        >
            <div class="project-card-media">
                <img src=project.thumbnail_url.clone() alt=project.title.clone() />
                <div class="project-card-shade"></div>
            </div>
            <div class="project-card-body">
                <div class="project-card-meta">
                    <div class="tag-list">
                        {project
                            .preview_tags()
                            .iter()
                            .map(|tag| view! { <span class="tag tag-glass">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <span class="arrow-badge">"↗"</span>
                </div>
                <h3 class="project-card-title">{project.title.clone()}</h3>
                <p class="project-card-subtitle">{project.subtitle.clone()}</p>
            </div>
        </div>
    }
}
