//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::types::CategoryId;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Creates a failed response that still carries a payload.
    pub fn failed(data: T) -> Self {
        Self {
            success: false,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// When the server started.
    pub started_at: DateTime<Utc>,
    /// Uptime.
    pub uptime_seconds: u64,
}

/// Nested path of a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPathResponse {
    pub id: CategoryId,
    pub path: String,
}
