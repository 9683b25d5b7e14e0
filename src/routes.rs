//! View Resolver
//!
//! Maps browser paths to pages and back. Matching is exact: no prefix
//! matching, and anything unknown resolves to `NotFound`.

use crate::store::ContentStore;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";
const PROJECT_PREFIX: &str = "/project/";

/// Resolved page for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    Contact,
    /// Project detail, id taken from the path segment
    Project(String),
    /// No page for this path (carries the requested path)
    NotFound(String),
}

impl AppRoute {
    pub fn resolve(path: &str) -> Self {
        // "/about/" and "/about" address the same page
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "" | HOME => AppRoute::Home,
            ABOUT => AppRoute::About,
            CONTACT => AppRoute::Contact,
            other => match other.strip_prefix(PROJECT_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => AppRoute::Project(id.to_string()),
                _ => AppRoute::NotFound(path.to_string()),
            },
        }
    }

    /// Canonical path of this route
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => HOME.to_string(),
            AppRoute::About => ABOUT.to_string(),
            AppRoute::Contact => CONTACT.to_string(),
            AppRoute::Project(id) => project_path(id),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// Document title for this route
    pub fn title(&self, brand: &str, store: &ContentStore) -> String {
        match self {
            AppRoute::Home => brand.to_string(),
            AppRoute::About => format!("About · {}", brand),
            AppRoute::Contact => format!("Contact · {}", brand),
            AppRoute::Project(id) => match store.find_project(id) {
                Some(project) => format!("{} · {}", project.title, brand),
                None => format!("Project not found · {}", brand),
            },
            AppRoute::NotFound(_) => format!("Not found · {}", brand),
        }
    }
}

pub fn project_path(id: &str) -> String {
    format!("{}{}", PROJECT_PREFIX, id)
}

/// Navigation links marked active only on an exact match with the
/// canonical path of the current route
pub fn is_active(link: &str, current: &str) -> bool {
    AppRoute::resolve(current).path() == link
}
