//! Project gallery state: fetched collection plus the active tag filter.
//!
//! DESIGN
//! ======
//! Filtering is a pure projection over the in-memory collection. Selecting a
//! tag never re-fetches, and the source order is preserved in every view.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Inline message shown when the project fetch fails.
pub const PROJECTS_ERROR_MESSAGE: &str = "Failed to load projects.";

/// Active gallery filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// Pseudo-tag that shows every project.
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }
}

/// Fetch lifecycle and filter selection for the project gallery.
#[derive(Clone, Debug)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: TagFilter,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, filter: TagFilter::All }
    }
}

impl ProjectsState {
    /// Store a successful fetch.
    pub fn loaded(&mut self, items: Vec<Project>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        if let TagFilter::Tag(tag) = &self.filter {
            if !self.items.iter().any(|p| p.has_tag(tag)) {
                self.filter = TagFilter::All;
            }
        }
    }

    /// Record a failed fetch.
    pub fn failed(&mut self) {
        self.items.clear();
        self.loading = false;
        self.error = Some(PROJECTS_ERROR_MESSAGE.to_owned());
    }

    /// Distinct tags across the collection.
    pub fn tags(&self) -> Vec<String> {
        distinct_tags(&self.items)
    }

    /// Filter chips in display order: `All` first, then each observed tag.
    pub fn filter_options(&self) -> Vec<TagFilter> {
        std::iter::once(TagFilter::All)
            .chain(self.tags().into_iter().map(TagFilter::Tag))
            .collect()
    }

    pub fn select(&mut self, filter: TagFilter) {
        self.filter = filter;
    }

    /// Projects passing the active filter, in source order.
    pub fn visible(&self) -> Vec<Project> {
        filter_projects(&self.items, &self.filter)
    }
}

/// Every tag across `projects` exactly once, in order of first appearance.
pub fn distinct_tags(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// The subset of `projects` matching `filter`, in source order.
pub fn filter_projects(projects: &[Project], filter: &TagFilter) -> Vec<Project> {
    projects.iter().filter(|p| filter.matches(p)).cloned().collect()
}
