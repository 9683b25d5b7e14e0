//! Project List Row Component
//!
//! Compact archive entry: title, client, subtitle and up to two tags.

use leptos::prelude::*;

use crate::models::Project;

#[component]
pub fn ProjectListRow(
    project: &'static Project,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let id = project.id.clone();

    view! {
        <div class="project-row" on:click=move |_| on_select.run(id.clone())>
            <div class="project-row-main">
                <div class="project-row-thumb">
                    <img src=project.thumbnail_url.clone() alt="" />
                </div>
                <div>
                    <h3 class="project-row-title">{project.title.clone()}</h3>
                    <p class="project-row-sub">
                        {format!("{} — {}", project.client, project.subtitle)}
                    </p>
                </div>
            </div>
            <div class="project-row-side">
                <div class="tag-list">
                    {project
                        .preview_tags()
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <span class="arrow-circle">"↗"</span>
            </div>
        </div>
    }
}
