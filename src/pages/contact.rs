//! Contact Page
//!
//! Email copy widget, location clock, social links and the contact form.
//! All state here is page-local and starts fresh on every visit.

use std::rc::Rc;

use futures::future::{abortable, AbortHandle};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::clock;
use crate::components::{Button, ButtonVariant};
use crate::contact::{ContactChannel, ContactMessage, CopyFeedback, FormState, SimulatedChannel};
use crate::context::use_site;
use crate::timer::BrowserScheduler;

/// Page-local state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ContactPageState {
    pub form: FormState,
    /// Email was just copied to the clipboard
    pub copied: bool,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Validation error when the browser checks were bypassed
    pub invalid: Option<String>,
}

/// Selection of one subject option, derived from the chosen subject so it
/// holds however often the form is re-rendered
fn subject_selected(state: Store<ContactPageState>, option: String) -> impl Fn() -> bool + Send + Sync + 'static {
    move || state.subject().with(|current| *current == option)
}

#[component]
pub fn Contact() -> impl IntoView {
    let site = use_site().site();
    let state = Store::new(ContactPageState {
        subject: site.default_subject(),
        ..Default::default()
    });

    // Local time, refreshed while the page is open
    let zone = clock::zone(&site.timezone);
    let (local_time, set_local_time) = signal(clock::local_time_now(zone));
    let clock_tick = StoredValue::new_local(Some(Interval::new(site.clock_refresh(), move || {
        set_local_time.set(clock::local_time_now(zone));
    })));

    let copy_feedback = StoredValue::new_local(CopyFeedback::new(BrowserScheduler, site.copy_reset_ms));
    let channel = StoredValue::new_local(
        Rc::new(SimulatedChannel::new(BrowserScheduler, site.submit_latency_ms)) as Rc<dyn ContactChannel>
    );
    let pending_submit = StoredValue::new(None::<AbortHandle>);

    // Nothing scheduled by this page may fire after it is gone
    on_cleanup(move || {
        clock_tick.try_update_value(|tick| {
            tick.take();
        });
        copy_feedback.try_update_value(|feedback| feedback.dispose());
        pending_submit.try_update_value(|pending| {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        });
    });

    let copy_email = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let outcome = browser::copy_text(&site.email).await;
            if let Err(e) = &outcome {
                log::warn!("{}", e);
            }
            copy_feedback.try_update_value(|feedback| {
                feedback.record(&outcome, move |copied| state.copied().set(copied));
            });
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let message = match ContactMessage::new(
            &state.name().get_untracked(),
            &state.email().get_untracked(),
            &state.subject().get_untracked(),
            &state.message().get_untracked(),
        ) {
            Ok(message) => message,
            Err(e) => {
                state.invalid().set(Some(e.to_string()));
                return;
            }
        };
        state.invalid().set(None);

        if !state.form().write().submit() {
            return;
        }
        log::info!("sending contact message ({})", message.subject);

        let channel = channel.get_value();
        let (task, handle) = abortable(async move { channel.submit(&message).await });
        pending_submit.set_value(Some(handle));

        spawn_local(async move {
            // Err means the page was torn down first
            if let Ok(result) = task.await {
                match &result {
                    Ok(_) => log::info!("contact message delivered"),
                    Err(e) => log::warn!("{}", e),
                }
                state.form().write().complete(result);
            }
        });
    };

    let send_another = move |_: web_sys::MouseEvent| {
        state.form().write().reset();
        state.name().set(String::new());
        state.email().set(String::new());
        state.message().set(String::new());
        state.subject().set(site.default_subject());
    };

    let is_submitting = Signal::derive(move || state.form().with(FormState::is_submitting));

    // Mounted for Idle, Submitting and Failed so inputs keep their DOM state
    let form = move || {
        view! {
            <form class="contact-form" on:submit=on_submit>
                <div class="field">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        required
                        placeholder="What's your name?"
                        prop:value=move || state.name().get()
                        on:input=move |ev| state.name().set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        required
                        placeholder="your@email.com"
                        prop:value=move || state.email().get()
                        on:input=move |ev| state.email().set(event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="subject">"Subject"</label>
                    <select id="subject" on:change=move |ev| state.subject().set(event_target_value(&ev))>
                        {site
                            .subjects
                            .iter()
                            .map(|subject| {
                                view! {
                                    <option
                                        value=subject.clone()
                                        prop:selected=subject_selected(state, subject.clone())
                                    >
                                        {subject.clone()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        required
                        rows="5"
                        placeholder="Tell me about your project..."
                        prop:value=move || state.message().get()
                        on:input=move |ev| state.message().set(event_target_value(&ev))
                    ></textarea>
                </div>

                {move || state.invalid().get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                {move || match state.form().get() {
                    FormState::Failed(reason) => {
                        Some(
                            view! {
                                <div class="form-failure">
                                    <p class="form-error">{reason}</p>
                                    <Button variant=ButtonVariant::Secondary on_click=send_another>
                                        "Start over"
                                    </Button>
                                </div>
                            },
                        )
                    }
                    _ => None,
                }}

                <Button button_type="submit" class="btn-full" disabled=is_submitting>
                    {move || (!is_submitting.get()).then(|| view! { <span class="btn-icon">"➤"</span> })}
                    {move || state.form().with(FormState::submit_label)}
                </Button>
            </form>
        }
    };

    let sent = move || {
        view! {
            <div class="form-success">
                <div class="success-icon">"✓"</div>
                <h3>"Message Sent!"</h3>
                <p>"Thanks for reaching out. I'll get back to you within 24-48 hours."</p>
                <Button variant=ButtonVariant::Outline class="btn-spaced" on_click=send_another>
                    "Send another"
                </Button>
            </div>
        }
    };

    view! {
        <div class="page contact">
            <div class="contact-grid">
                <div class="contact-info">
                    <div>
                        <h1>"Let's work together."</h1>
                        <p class="lead-muted">
                            "I'm always interested in discussing new projects, creative opportunities, or design partnerships. Currently based in San Francisco, but available for remote work worldwide."
                        </p>
                    </div>

                    <div class="email-widget" on:click=copy_email>
                        <div class="email-widget-top">
                            <span class="label">"Email"</span>
                            <span class="copy-state" class:copied=move || state.copied().get()>
                                {move || if state.copied().get() { "✓ Copied" } else { "⧉" }}
                            </span>
                        </div>
                        <div class="email-address">{site.email.clone()}</div>
                    </div>

                    <div class="location">
                        <div class="location-icon">"⌖"</div>
                        <div>
                            <div class="location-name">{site.location.clone()}</div>
                            <div class="location-time">
                                {move || format!("Local time: {}", local_time.get())}
                            </div>
                        </div>
                    </div>

                    <div class="socials">
                        {site
                            .socials
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="social"
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

                <div class="form-card">
                    <Show when=move || state.form().get() != FormState::Success fallback=sent>
                        {form()}
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;

    #[test]
    fn test_chosen_subject_survives_failed_submission() {
        let owner = Owner::new();
        owner.set();

        let state = Store::new(ContactPageState {
            subject: "Project Inquiry".to_string(),
            ..Default::default()
        });
        let inquiry = subject_selected(state, "Project Inquiry".to_string());
        let other = subject_selected(state, "Other".to_string());
        assert!(inquiry());

        state.subject().set("Other".to_string());
        assert!(state.form().write().submit());
        state
            .form()
            .write()
            .complete(Err(ContactError::Delivery("offline".to_string())));

        assert!(matches!(state.form().get_untracked(), FormState::Failed(_)));
        assert!(other());
        assert!(!inquiry());
        assert_eq!(state.subject().get_untracked(), "Other");
    }
}
