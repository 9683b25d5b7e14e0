//! Application Context
//!
//! Read-only site data provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::store::{ContentStore, Portfolio};

/// Shared handle to the loaded portfolio
#[derive(Clone, Copy)]
pub struct SiteContext {
    portfolio: &'static Portfolio,
}

impl SiteContext {
    pub fn new(portfolio: &'static Portfolio) -> Self {
        Self { portfolio }
    }

    pub fn site(&self) -> &'static SiteConfig {
        &self.portfolio.site
    }

    pub fn content(&self) -> &'static ContentStore {
        &self.portfolio.content
    }
}

/// Get the site context provided by `App`
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
