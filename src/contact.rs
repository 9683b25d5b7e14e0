//! Contact Flow
//!
//! Form state machine, message validation, the delivery capability and the
//! "email copied" feedback used by the contact page.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{BrowserError, ContactError};
use crate::timer::{self, BrowserScheduler, Scheduler, TimerSlot};

/// Contact form lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Delivery failed, reason shown next to a retry button
    Failed(String),
}

impl FormState {
    /// Start a submission. Ignored while one is in flight or after success.
    pub fn submit(&mut self) -> bool {
        match self {
            FormState::Idle | FormState::Failed(_) => {
                *self = FormState::Submitting;
                true
            }
            FormState::Submitting | FormState::Success => false,
        }
    }

    /// Apply the delivery result. Only meaningful while submitting.
    pub fn complete(&mut self, result: Result<Ack, ContactError>) {
        if *self != FormState::Submitting {
            return;
        }
        *self = match result {
            Ok(_) => FormState::Success,
            Err(e) => FormState::Failed(e.to_string()),
        };
    }

    /// "Send another": back to an empty form
    pub fn reset(&mut self) {
        if matches!(self, FormState::Success | FormState::Failed(_)) {
            *self = FormState::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        *self == FormState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormState::Submitting => "Sending...",
            FormState::Failed(_) => "Try again",
            _ => "Send Message",
        }
    }
}

/// Validated contact form payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Same checks the browser applies to the form: required fields and a
    /// plausible email address.
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Result<Self, ContactError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let message = required("message", message)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        Ok(Self {
            name,
            email,
            subject: subject.trim().to_string(),
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Delivery acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack;

/// Where contact messages go
#[async_trait(?Send)]
pub trait ContactChannel {
    async fn submit(&self, message: &ContactMessage) -> Result<Ack, ContactError>;
}

/// Stand-in channel: waits a fixed latency and acknowledges.
/// Nothing leaves the browser.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedChannel<S = BrowserScheduler> {
    scheduler: S,
    latency_ms: u32,
}

impl<S: Scheduler> SimulatedChannel<S> {
    pub fn new(scheduler: S, latency_ms: u32) -> Self {
        Self { scheduler, latency_ms }
    }
}

#[async_trait(?Send)]
impl<S: Scheduler> ContactChannel for SimulatedChannel<S> {
    async fn submit(&self, message: &ContactMessage) -> Result<Ack, ContactError> {
        timer::sleep(&self.scheduler, self.latency_ms).await;
        let payload = serde_json::to_string(message).map_err(|e| ContactError::Delivery(e.to_string()))?;
        log::debug!("simulated delivery of {} bytes", payload.len());
        Ok(Ack)
    }
}

/// Drives the `copied` flag after a clipboard write.
///
/// Success shows the flag and schedules its reset; a new copy restarts the
/// countdown. Failure leaves the flag off.
pub struct CopyFeedback<S: Scheduler> {
    reset: TimerSlot<S>,
    reset_after_ms: u32,
}

impl<S: Scheduler> CopyFeedback<S> {
    pub fn new(scheduler: S, reset_after_ms: u32) -> Self {
        Self {
            reset: TimerSlot::new(scheduler),
            reset_after_ms,
        }
    }

    pub fn record<F>(&mut self, outcome: &Result<(), BrowserError>, set_copied: F)
    where
        F: Fn(bool) + 'static,
    {
        match outcome {
            Ok(()) => {
                set_copied(true);
                self.reset.arm(self.reset_after_ms, move || set_copied(false));
            }
            Err(_) => {
                self.reset.cancel();
                set_copied(false);
            }
        }
    }

    /// Teardown: the pending reset must not run
    pub fn dispose(&mut self) {
        self.reset.cancel();
    }
}
