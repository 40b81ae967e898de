//! REST API module.
//!
//! Handlers are stateless; everything they read comes from the post store or
//! compiled-in data.

mod blog;
mod contact;
mod projects;

pub use blog::*;
pub use contact::*;
pub use projects::*;

use chrono::NaiveDate;

/// Handler result; errors render as `{ "error": ... }`.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;

/// Render a stored `YYYY-MM-DD` date as e.g. `March 05, 2024`.
///
/// Anything that does not parse is returned unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
