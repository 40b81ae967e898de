//! Contact form submission and acknowledgment.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgment returned for every contact submission.
pub const CONTACT_ACK: &str = "Thank you for your message! I'll get back to you soon.";

/// A contact form submission. Nothing is required, any JSON value is
/// accepted per field, and nothing is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ContactResponse {
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            message: CONTACT_ACK,
        }
    }
}
