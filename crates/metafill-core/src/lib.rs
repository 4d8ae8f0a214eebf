//! Metafill Core Library
//!
//! Core domain logic for the metafill meta-description tool: front matter
//! parsing and serialization, summary synthesis, and in-place post updates.

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod post;
pub mod store;
pub mod summary;
pub mod update;
