//! Networking modules for the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three HTTP calls (projects, posts, contact) and `types`
//! defines their JSON schema.

pub mod api;
pub mod types;
