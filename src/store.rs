//! Content Store
//!
//! Read-only portfolio dataset, built once at startup from the embedded
//! JSON files and shared for the lifetime of the app.

use std::collections::HashSet;
use std::sync::OnceLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::models::{Experience, Project};

const SITE_JSON: &str = include_str!("../content/site.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");
const EXPERIENCE_JSON: &str = include_str!("../content/experience.json");

/// Characters that would need escaping inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

static PORTFOLIO: OnceLock<Portfolio> = OnceLock::new();

/// Ordered project and experience collections
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    projects: Vec<Project>,
    experience: Vec<Experience>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate or non-URL-safe ids.
    /// Order is kept exactly as given.
    pub fn new(projects: Vec<Project>, experience: Vec<Experience>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !is_path_segment(&project.id) {
                return Err(ContentError::InvalidProjectId(project.id.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for entry in &experience {
            if !seen.insert(entry.id.as_str()) {
                return Err(ContentError::DuplicateExperienceId(entry.id.clone()));
            }
        }

        Ok(Self { projects, experience })
    }

    pub fn from_json(projects_json: &str, experience_json: &str) -> Result<Self, ContentError> {
        let projects = serde_json::from_str(projects_json)
            .map_err(|error| ContentError::Parse { file: "projects.json", error })?;
        let experience = serde_json::from_str(experience_json)
            .map_err(|error| ContentError::Parse { file: "experience.json", error })?;
        Self::new(projects, experience)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    /// Look up a project by id. `None` is the expected not-found outcome.
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Everything the site renders: configuration plus content
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub site: SiteConfig,
    pub content: ContentStore,
}

impl Portfolio {
    /// Parse the dataset compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        let site = serde_json::from_str(SITE_JSON)
            .map_err(|error| ContentError::Parse { file: "site.json", error })?;
        let content = ContentStore::from_json(PROJECTS_JSON, EXPERIENCE_JSON)?;
        Ok(Self { site, content })
    }
}

/// Process-wide portfolio, loaded on first access.
///
/// A broken dataset is logged and replaced by an empty one so the shell
/// still renders.
pub fn portfolio() -> &'static Portfolio {
    PORTFOLIO.get_or_init(|| match Portfolio::embedded() {
        Ok(loaded) => {
            log::info!(
                "loaded {} projects, {} experience entries",
                loaded.content.projects().len(),
                loaded.content.experience().len()
            );
            loaded
        }
        Err(e) => {
            log::error!("failed to load portfolio content: {}", e);
            Portfolio::default()
        }
    })
}

fn is_path_segment(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && utf8_percent_encode(id, PATH_SEGMENT).to_string() == id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{experience, project, projects};

    #[test]
    fn test_embedded_dataset_loads() {
        let portfolio = Portfolio::embedded().expect("embedded content should be valid");
        assert!(!portfolio.content.projects().is_empty());
        assert!(!portfolio.content.experience().is_empty());
        assert!(!portfolio.site.email.is_empty());
        assert!(!portfolio.site.subjects.is_empty());
    }

    #[test]
    fn test_find_project() {
        let store = ContentStore::new(projects(3), Vec::new()).unwrap();
        assert_eq!(store.find_project("p2").map(|p| p.id.as_str()), Some("p2"));
        assert!(store.find_project("nope").is_none());
        assert!(store.find_project("").is_none());
    }

    #[test]
    fn test_rejects_duplicate_project_id() {
        let err = ContentStore::new(vec![project("a"), project("b"), project("a")], Vec::new()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(id) if id == "a"));
    }

    #[test]
    fn test_rejects_unsafe_project_ids() {
        for bad in ["", "a/b", "with space", "q?x", "hash#", "..", "100%"] {
            let result = ContentStore::new(vec![project(bad)], Vec::new());
            assert!(
                matches!(result, Err(ContentError::InvalidProjectId(_))),
                "id {:?} should be rejected",
                bad
            );
        }
        assert!(ContentStore::new(vec![project("nr-ai_monitoring.v2")], Vec::new()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_experience_id() {
        let result = ContentStore::new(Vec::new(), vec![experience("e1"), experience("e1")]);
        assert!(matches!(result, Err(ContentError::DuplicateExperienceId(_))));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = ContentStore::from_json("[]", "{not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse experience.json"));
    }

    #[test]
    fn test_order_preserved() {
        let store = ContentStore::new(projects(5), vec![experience("b"), experience("a")]).unwrap();
        let ids: Vec<_> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(store.experience()[0].id, "b");
    }
}
