//! Code descriptors — the registered metadata behind a numeric error code.

use serde::{Deserialize, Serialize};

/// HTTP statuses a descriptor is allowed to carry.
///
/// Anything outside this set is a startup configuration bug, rejected at
/// registration time.
pub const ALLOWED_HTTP_STATUS: [u16; 6] = [200, 400, 401, 403, 404, 500];

/// The reserved code every unclassified error resolves to.
pub const UNKNOWN_CODE: u32 = 1;

/// Documentation link reported with the unknown descriptor.
const UNKNOWN_REFERENCE: &str = "https://github.com/errkit-rs/errkit/blob/main/README.md";

/// Registered metadata for one error code.
///
/// Identity is `code`; descriptors are created once at registration and
/// never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescriptor {
    /// Stable numeric identifier for this class of error.
    pub code: u32,
    /// HTTP status the boundary layer should respond with.
    pub http_status: u16,
    /// External (user-facing) error text.
    pub message: String,
    /// Optional link to the detail documentation for this code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CodeDescriptor {
    /// Create a descriptor with no documentation reference.
    pub fn new(code: u32, http_status: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            http_status,
            message: message.into(),
            reference: None,
        }
    }

    /// Attach a documentation reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// The fallback descriptor used when no registered code can be
    /// determined for an error: code 1, HTTP 500, generic message.
    pub fn unknown() -> Self {
        Self {
            code: UNKNOWN_CODE,
            http_status: 500,
            message: "An internal server error occurred".to_string(),
            reference: Some(UNKNOWN_REFERENCE.to_string()),
        }
    }
}
