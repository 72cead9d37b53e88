//! Notes list state.
//!
//! The section is suppressed entirely unless a fetch settled with at least one
//! post; loading and failure both render nothing.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::Post;

#[derive(Clone, Debug)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub loading: bool,
    /// Slug of the post whose body is expanded.
    pub expanded: Option<String>,
}

impl Default for PostsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, expanded: None }
    }
}

impl PostsState {
    pub fn loaded(&mut self, items: Vec<Post>) {
        self.items = items;
        self.loading = false;
    }

    pub fn failed(&mut self) {
        self.items.clear();
        self.loading = false;
    }

    /// Whether the section container should be emitted at all.
    pub fn is_visible(&self) -> bool {
        !self.loading && !self.items.is_empty()
    }

    /// Expand `slug`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, slug: &str) {
        if self.expanded.as_deref() == Some(slug) {
            self.expanded = None;
        } else {
            self.expanded = Some(slug.to_owned());
        }
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded.as_deref() == Some(slug)
    }
}
