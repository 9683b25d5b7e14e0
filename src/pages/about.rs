//! About Page
//!
//! Biography, resume download and the experience timeline.

use leptos::prelude::*;

use crate::browser;
use crate::components::Button;
use crate::context::use_site;

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_site();
    let site = ctx.site();

    let download_resume = move |_: web_sys::MouseEvent| {
        if let Err(e) = browser::download(&site.resume_path, &site.resume_file_name) {
            log::warn!("{}", e);
        }
    };

    // Store order is the display order, dates are not parsed
    let experience = ctx
        .content()
        .experience()
        .iter()
        .map(|job| {
            view! {
                <div class="job">
                    <div class="job-dates">{job.date_range()}</div>
                    <div class="job-body">
                        <h3>{job.title.clone()}</h3>
                        <div class="job-where">{format!("{}, {}", job.company, job.location)}</div>
                        <p>{job.description.clone()}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page about">
            <div class="about-intro">
                <div class="about-text">
                    <p class="lead">
                        "I view myself as a creative liaison between people and products, driven by a passion for leveraging the intrinsic power of brands in novel ways."
                    </p>
                    <p>
                        "Specializing in cloud software and SaaS, I design comprehensive B2B experiences that cover the full UX spectrum, from foundational user research and rapid prototyping to high-fidelity UI design and the stewardship of complex design systems."
                    </p>
                    <Button icon="↓" on_click=download_resume>
                        "Download Resume"
                    </Button>
                </div>
                <div class="about-portrait">
                    <img src=site.profile_image.clone() alt=site.owner.clone() />
                </div>
            </div>

            <section class="experience">
                <h2>"Experience"</h2>
                <div class="job-list">{experience}</div>
            </section>
        </div>
    }
}
