#![warn(missing_docs)]

//! Static content for the portfolio page, independent of any UI toolkit.
//!
//! The page is driven entirely by a [`Content`] document: the profile shown in
//! the hero, the ordered lists rendered by each section, and the small tables
//! of facts and tools. The embedded default lives in `content/default.json`.

/// Content document types and loading.
pub mod schema;
pub use schema::*;

/// Closed set of icons that content may reference.
pub mod icon;
pub use icon::IconName;

/// Validation errors for content documents.
pub mod error;
pub use error::ContentError;

/// Contact form submission and `mailto:` composition.
pub mod contact;

/// Bar model for the skills chart.
pub mod chart;
