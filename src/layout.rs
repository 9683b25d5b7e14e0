//! Derived Views
//!
//! Pure projections of the content store used by the pages: the home page
//! featured/archive split and the project detail resolution.

use crate::models::{GalleryImage, Project};
use crate::store::ContentStore;

/// Number of projects shown in the featured grid
pub const FEATURED_COUNT: usize = 6;

/// Grid cell footprint of a featured card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSize {
    /// 2x2 cell reserved for the first featured project
    Priority,
    Standard,
}

impl TileSize {
    pub fn grid_class(self) -> &'static str {
        match self {
            TileSize::Priority => "tile tile-priority",
            TileSize::Standard => "tile",
        }
    }

    pub fn is_priority(self) -> bool {
        self == TileSize::Priority
    }
}

/// One entry of the featured grid
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedTile<'a> {
    pub project: &'a Project,
    pub size: TileSize,
}

/// Home page partition of the project list
#[derive(Debug, Clone, PartialEq)]
pub struct HomeLayout<'a> {
    pub featured: Vec<FeaturedTile<'a>>,
    pub archive: &'a [Project],
}

impl<'a> HomeLayout<'a> {
    /// First `FEATURED_COUNT` projects become tiles, the rest the archive.
    /// Position 0 always gets the priority tile.
    pub fn from_projects(projects: &'a [Project]) -> Self {
        let split = projects.len().min(FEATURED_COUNT);
        let (head, archive) = projects.split_at(split);
        let featured = head
            .iter()
            .enumerate()
            .map(|(index, project)| FeaturedTile {
                project,
                size: if index == 0 { TileSize::Priority } else { TileSize::Standard },
            })
            .collect();
        Self { featured, archive }
    }

    /// The archive section is omitted entirely when empty
    pub fn show_archive(&self) -> bool {
        !self.archive.is_empty()
    }
}

/// Content of the project detail page
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    Found {
        project: &'a Project,
        hero_url: &'a str,
        gallery: &'a [GalleryImage],
    },
    NotFound {
        id: String,
    },
}

impl<'a> DetailView<'a> {
    pub fn resolve(store: &'a ContentStore, id: &str) -> Self {
        match store.find_project(id) {
            Some(project) => DetailView::Found {
                project,
                hero_url: project.hero_url(),
                gallery: project.gallery(),
            },
            None => DetailView::NotFound { id: id.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::projects;
    use proptest::prelude::*;

    fn ids<'a>(layout: &HomeLayout<'a>) -> (Vec<&'a str>, Vec<&'a str>) {
        (
            layout.featured.iter().map(|t| t.project.id.as_str()).collect(),
            layout.archive.iter().map(|p| p.id.as_str()).collect(),
        )
    }

    #[test]
    fn test_seven_projects() {
        let all = projects(7);
        let layout = HomeLayout::from_projects(&all);
        let (featured, archive) = ids(&layout);

        assert_eq!(featured, ["p1", "p2", "p3", "p4", "p5", "p6"]);
        assert_eq!(archive, ["p7"]);
        assert_eq!(layout.featured[0].size, TileSize::Priority);
        assert!(layout.show_archive());
    }

    #[test]
    fn test_three_projects_hide_archive() {
        let all = projects(3);
        let layout = HomeLayout::from_projects(&all);
        let (featured, archive) = ids(&layout);

        assert_eq!(featured, ["p1", "p2", "p3"]);
        assert!(archive.is_empty());
        assert!(layout.featured[0].size.is_priority());
        assert!(!layout.show_archive());
    }

    #[test]
    fn test_empty_store() {
        let layout = HomeLayout::from_projects(&[]);
        assert!(layout.featured.is_empty());
        assert!(!layout.show_archive());
    }

    #[test]
    fn test_detail_found() {
        let mut all = projects(2);
        all[1].images = vec![GalleryImage { url: "/hero.jpg".into(), caption: "Hero".into() }];
        let store = ContentStore::new(all, Vec::new()).unwrap();

        match DetailView::resolve(&store, "p2") {
            DetailView::Found { project, hero_url, gallery } => {
                assert_eq!(project.title, "Project p2");
                assert_eq!(hero_url, "/hero.jpg");
                assert!(gallery.is_empty());
            }
            other => panic!("expected found, got {:?}", other),
        }

        match DetailView::resolve(&store, "p1") {
            DetailView::Found { hero_url, .. } => assert_eq!(hero_url, "/thumbs/p1.jpg"),
            other => panic!("expected found, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_not_found() {
        let store = ContentStore::new(projects(2), Vec::new()).unwrap();
        assert_eq!(
            DetailView::resolve(&store, "missing"),
            DetailView::NotFound { id: "missing".to_string() }
        );
    }

    proptest! {
        #[test]
        fn prop_partition_sizes_and_order(n in 0usize..40) {
            let all = projects(n);
            let layout = HomeLayout::from_projects(&all);

            prop_assert_eq!(layout.featured.len(), n.min(FEATURED_COUNT));
            prop_assert_eq!(layout.archive.len(), n.saturating_sub(FEATURED_COUNT));

            let rebuilt: Vec<&Project> = layout
                .featured
                .iter()
                .map(|t| t.project)
                .chain(layout.archive.iter())
                .collect();
            let original: Vec<&Project> = all.iter().collect();
            prop_assert_eq!(rebuilt, original);
        }

        #[test]
        fn prop_exactly_one_priority_tile(n in 1usize..40) {
            let all = projects(n);
            let layout = HomeLayout::from_projects(&all);
            let priority: Vec<usize> = layout
                .featured
                .iter()
                .enumerate()
                .filter(|(_, t)| t.size.is_priority())
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(priority, vec![0]);
        }
    }
}
