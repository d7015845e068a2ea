//! Shared test utilities for the stencil workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`docs`] : document builders and sample content
//! - [`site`] : [`TestSite`] temporary directory for file-based tests

pub mod docs;
pub mod site;

pub use docs::{LONG_BODY, fenced};
pub use site::TestSite;
