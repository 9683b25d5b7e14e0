//! Content Models
//!
//! Portfolio records as stored in the embedded dataset.

use serde::{Deserialize, Serialize};

/// One image of a project gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

/// Project case study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Routing key, used verbatim as a path segment
    pub id: String,
    pub title: String,
    pub client: String,
    pub subtitle: String,
    pub thumbnail_url: String,
    /// First image is the hero, the rest form the gallery
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    pub overview: String,
    pub problem_statement: String,
    pub impact: String,
    pub scope_and_team: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    /// Hero image URL: first gallery image, else the thumbnail
    pub fn hero_url(&self) -> &str {
        self.images
            .first()
            .map(|img| img.url.as_str())
            .unwrap_or(&self.thumbnail_url)
    }

    /// Gallery images shown below the narrative (everything after the hero)
    pub fn gallery(&self) -> &[GalleryImage] {
        self.images.get(1..).unwrap_or(&[])
    }

    /// Tags shown in compact views
    pub fn preview_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(2)]
    }
}

/// Work history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl Experience {
    pub fn date_range(&self) -> String {
        format!("{} — {}", self.start_date, self.end_date)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            client: "Acme".to_string(),
            subtitle: "A subtitle".to_string(),
            thumbnail_url: format!("/thumbs/{}.jpg", id),
            images: Vec::new(),
            overview: "Overview".to_string(),
            problem_statement: "Problem".to_string(),
            impact: "Impact".to_string(),
            scope_and_team: "Lead designer".to_string(),
            tags: vec!["UX".to_string(), "Research".to_string(), "Systems".to_string()],
            live_url: None,
        }
    }

    pub fn projects(n: usize) -> Vec<Project> {
        (1..=n).map(|i| project(&format!("p{}", i))).collect()
    }

    pub fn experience(id: &str) -> Experience {
        Experience {
            id: id.to_string(),
            title: "Designer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            start_date: "2020".to_string(),
            end_date: "Present".to_string(),
            description: "Did things".to_string(),
        }
    }
}
