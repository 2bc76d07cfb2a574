//! errkit-core — error classification and chaining for HTTP-facing services.
//!
//! Two cooperating pieces:
//! - [`CodeRegistry`] — a write-once-per-code table from numeric error code
//!   to [`CodeDescriptor`] (HTTP status, external message, documentation
//!   reference), populated at startup and read concurrently afterwards.
//! - [`CodedError`] — a chained error value that attaches a code to an
//!   underlying cause and records a call-stack snapshot, with plain,
//!   detailed, and structured renderings.
//!
//! # Quick Start
//!
//! ```rust
//! use errkit_core::{has_code, CodeRegistry, CodedError};
//!
//! // Startup: build and populate the registry.
//! let registry = CodeRegistry::new();
//! registry.register(110001, 404, "User not found");
//!
//! // Somewhere deep in the stack: classify a low-level failure.
//! let db = std::io::Error::new(std::io::ErrorKind::NotFound, "no rows");
//! let err = CodedError::wrap(db, 110001, "loading user profile");
//!
//! // Boundary layer: decide the HTTP response.
//! let desc = registry.lookup(Some(&err)).unwrap();
//! assert_eq!(desc.http_status, 404);
//! assert!(has_code(&err, 110001));
//! ```

pub mod chain;
pub mod descriptor;
pub mod registry;

mod macros;

pub use chain::{has_code, CodedError};
pub use descriptor::{CodeDescriptor, ALLOWED_HTTP_STATUS, UNKNOWN_CODE};
pub use registry::{CodeRegistry, RegistrationError, TableError};
