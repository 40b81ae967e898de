//! Project list endpoint.

use axum::Json;

use crate::models::{Project, PROJECTS};

/// GET /api/projects - The fixed project list.
pub async fn list_projects() -> Json<&'static [Project]> {
    Json(&PROJECTS[..])
}
