use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic message response.
///
/// Used for successful operations that return no entity, and as the
/// documented shape of every error body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
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
