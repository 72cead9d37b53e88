//! Wire DTOs for the content API.
//!
//! DESIGN
//! ======
//! Records are display-only; the client never mutates or validates them.
//! Optional and collection fields default when the backend omits them so a
//! sparse record still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A portfolio entry describing one piece of work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier, also used as the render key.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover: Option<String>,
    /// Free-form labels used for client-side filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Technology labels shown on the card.
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub featured: bool,
    /// One-line outcome note (e.g. "cut build times by 40%").
    #[serde(default)]
    pub impact: Option<String>,
}

impl Project {
    /// Whether this project carries `tag` in its tag set.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// External link attached to a project (repository, live demo, write-up).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A short writing entry for the notes list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    /// Display date as provided by the backend.
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Contact form payload for `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
