//! # Response Formatting
//!
//! Confirmation bodies for mutating operations.

use serde::Serialize;

/// Confirmation message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
