//! Data models for the site backend.
//!
//! Field names match what the front-end bundle reads from the JSON endpoints.

mod contact;
mod post;
mod project;

pub use contact::*;
pub use post::*;
pub use project::*;
