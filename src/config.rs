//! Site Configuration
//!
//! Owner details, asset paths and interaction timings, loaded from
//! `content/site.json`.

use serde::{Deserialize, Serialize};

/// Floor for the contact page clock refresh
pub const MIN_CLOCK_REFRESH_MS: u32 = 1000;

/// Outbound profile link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab (false for `mailto:`)
    #[serde(default = "default_true")]
    pub external: bool,
}

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub owner: String,
    pub brand: String,
    pub headline: String,
    pub role: String,
    pub employer: String,
    pub email: String,
    pub location: String,
    /// IANA zone used for the contact page clock
    pub timezone: String,
    pub profile_image: String,
    pub resume_path: String,
    pub resume_file_name: String,
    pub socials: Vec<SocialLink>,
    /// Contact form subjects, the first one is preselected
    pub subjects: Vec<String>,
    pub submit_latency_ms: u32,
    pub copy_reset_ms: u32,
    pub clock_refresh_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            brand: "PORTFOLIO".to_string(),
            headline: String::new(),
            role: String::new(),
            employer: String::new(),
            email: String::new(),
            location: String::new(),
            timezone: "America/Los_Angeles".to_string(),
            profile_image: "/profile.png".to_string(),
            resume_path: "/resume.pdf".to_string(),
            resume_file_name: "Resume.pdf".to_string(),
            socials: Vec::new(),
            subjects: vec!["Project Inquiry".to_string()],
            submit_latency_ms: 1500,
            copy_reset_ms: 2000,
            clock_refresh_ms: 30_000,
        }
    }
}

impl SiteConfig {
    /// Subject preselected in the contact form
    pub fn default_subject(&self) -> String {
        self.subjects.first().cloned().unwrap_or_else(|| "Other".to_string())
    }

    /// Clock refresh period, never below `MIN_CLOCK_REFRESH_MS`
    pub fn clock_refresh(&self) -> u32 {
        self.clock_refresh_ms.max(MIN_CLOCK_REFRESH_MS)
    }
}

fn default_true() -> bool {
    true
}
