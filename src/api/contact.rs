//! Contact form endpoint.

use axum::Json;

use crate::models::{ContactResponse, ContactSubmission};

/// POST /api/contact - Log the submission and acknowledge it.
pub async fn submit_contact(Json(submission): Json<ContactSubmission>) -> Json<ContactResponse> {
    tracing::info!(
        name = ?submission.name,
        email = ?submission.email,
        message = ?submission.message,
        "Contact form submission"
    );

    Json(ContactResponse::acknowledged())
}
