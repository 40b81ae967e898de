//! Flat-file persistence for blog posts.
//!
//! The backing file is the single source of truth: every read loads it in full
//! and every create rewrites it in full.

mod post_store;
mod seed;

pub use post_store::*;
pub use seed::default_posts;
