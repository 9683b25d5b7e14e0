//! Error Types

/// Embedded dataset failed to load or violates a store invariant
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {file}: {error}")]
    Parse {
        file: &'static str,
        #[source]
        error: serde_json::Error,
    },

    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),

    #[error("project id `{0}` is not usable as a path segment")]
    InvalidProjectId(String),

    #[error("duplicate experience id `{0}`")]
    DuplicateExperienceId(String),
}

/// Contact form submission errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("message could not be delivered: {0}")]
    Delivery(String),
}

/// Failures of browser APIs
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("no window available")]
    NoWindow,

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("download failed: {0}")]
    Download(String),
}
