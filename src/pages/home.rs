//! Home Page
//!
//! Header, featured bento grid and the archive list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{ProjectCard, ProjectListRow};
use crate::context::use_site;
use crate::layout::HomeLayout;
use crate::routes::project_path;

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_site();
    let site = ctx.site();
    let layout = HomeLayout::from_projects(ctx.content().projects());

    let navigate = use_navigate();
    let open_project = Callback::new(move |id: String| {
        navigate(&project_path(&id), Default::default());
    });

    let featured = layout
        .featured
        .iter()
        .map(|tile| {
            view! {
                <div class=tile.size.grid_class()>
                    <ProjectCard
                        project=tile.project
                        priority=tile.size.is_priority()
                        on_select=open_project
                    />
                </div>
            }
        })
        .collect_view();

    let archive = layout.show_archive().then(|| {
        let count = layout.archive.len();
        let rows = layout
            .archive
            .iter()
            .map(|project| view! { <ProjectListRow project=project on_select=open_project /> })
            .collect_view();
        view! {
            <section class="archive">
                <div class="section-heading">
                    <h2>"Selected Archive"</h2>
                    <span class="section-note">{format!("{} projects", count)}</span>
                </div>
                <div class="archive-list">{rows}</div>
            </section>
        }
    });

    view! {
        <div class="page home">
            <header class="home-header">
                <h1 class="headline">{site.headline.clone()}</h1>
                <div class="intro">
                    <div class="avatar">
                        <img src=site.profile_image.clone() alt=site.owner.clone() />
                    </div>
                    <p class="intro-text">
                        <span class="em">{site.role.clone()}</span>
                        " specializing in observability platforms and intuitive, AI-driven experiences."
                        <span class="intro-line">
                            "Currently crafting the future at "
                            <span class="em">{site.employer.clone()}</span>
                            "."
                        </span>
                    </p>
                </div>
            </header>

            <div class="section-heading">
                <h2>"Featured Work"</h2>
                <span class="section-note">"2016 — Present"</span>
            </div>
            <div class="bento-grid">{featured}</div>

            {archive}
        </div>
    }
}
