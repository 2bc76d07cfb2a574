//! Code registry — maps numeric error codes to their descriptors.
//!
//! The registry is an explicit object with an init-then-freeze lifecycle:
//! construct it, populate it during process startup, read it concurrently
//! afterwards. Tests get isolation by building their own instances.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::chain::CodedError;
use crate::descriptor::{CodeDescriptor, ALLOWED_HTTP_STATUS};

/// Why a registration was rejected.
///
/// Every variant is a startup configuration bug, unrecoverable by design:
/// codes are static application data, so a duplicate or invalid entry means
/// the code table itself is wrong. [`CodeRegistry::must_register`] turns
/// these into a panic; [`CodeRegistry::try_register`] returns them for
/// callers that assemble tables dynamically (e.g. from JSON).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Code 0 means "no code assigned" and can never carry a descriptor.
    #[error("code 0 is reserved for \"no code assigned\"")]
    ReservedZero,

    /// The HTTP status is outside the allowed set.
    #[error("HTTP status {status} is not one of 200, 400, 401, 403, 404, 500")]
    DisallowedStatus { status: u16 },

    /// The code was already registered.
    #[error("code {code} already exists")]
    AlreadyExists { code: u32 },
}

/// Errors from loading a JSON code table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid code table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Register(#[from] RegistrationError),
}

/// Process-wide table from error code to [`CodeDescriptor`].
///
/// Writes take the write lock for the duration of the uniqueness check and
/// insert; reads take the read lock and may run concurrently with each
/// other. Registration is expected to finish before concurrent reads begin.
pub struct CodeRegistry {
    codes: RwLock<HashMap<u32, CodeDescriptor>>,
}

impl CodeRegistry {
    /// Create a registry with the reserved unknown descriptor (code 1)
    /// already registered.
    pub fn new() -> Self {
        let mut codes = HashMap::new();
        let unknown = CodeDescriptor::unknown();
        codes.insert(unknown.code, unknown);
        Self {
            codes: RwLock::new(codes),
        }
    }

    /// Insert a new descriptor, rejecting reserved/invalid/duplicate codes.
    pub fn try_register(&self, descriptor: CodeDescriptor) -> Result<(), RegistrationError> {
        if descriptor.code == 0 {
            return Err(RegistrationError::ReservedZero);
        }
        if !ALLOWED_HTTP_STATUS.contains(&descriptor.http_status) {
            return Err(RegistrationError::DisallowedStatus {
                status: descriptor.http_status,
            });
        }

        let mut codes = self.codes.write().unwrap();
        if codes.contains_key(&descriptor.code) {
            return Err(RegistrationError::AlreadyExists {
                code: descriptor.code,
            });
        }
        tracing::debug!(
            code = descriptor.code,
            http_status = descriptor.http_status,
            "registered error code"
        );
        codes.insert(descriptor.code, descriptor);
        Ok(())
    }

    /// Insert a new descriptor, panicking on any [`RegistrationError`].
    ///
    /// Call this only from startup paths: a failure here is a bug in the
    /// application's static code table and the process should fail fast.
    pub fn must_register(&self, descriptor: CodeDescriptor) {
        if let Err(err) = self.try_register(descriptor) {
            panic!("error code registration failed: {err}");
        }
    }

    /// Convenience over [`Self::must_register`] for reference-less codes.
    pub fn register(&self, code: u32, http_status: u16, message: impl Into<String>) {
        self.must_register(CodeDescriptor::new(code, http_status, message));
    }

    /// Register every descriptor in a JSON array.
    ///
    /// Expected format:
    /// `[{ "code": 110001, "http_status": 404, "message": "..." }, ...]`
    ///
    /// Returns the number of descriptors registered. Fails on malformed
    /// JSON or on the first entry that violates a registration constraint.
    pub fn load_json(&self, json: &str) -> Result<usize, TableError> {
        let descriptors: Vec<CodeDescriptor> = serde_json::from_str(json)?;
        let count = descriptors.len();
        for descriptor in descriptors {
            self.try_register(descriptor)?;
        }
        Ok(count)
    }

    /// Raw table lookup by code.
    pub fn get(&self, code: u32) -> Option<CodeDescriptor> {
        self.codes.read().unwrap().get(&code).cloned()
    }

    /// Resolve an error to the descriptor the boundary layer should present.
    ///
    /// - `None` in, `None` out: no error means no descriptor.
    /// - A [`CodedError`] whose code is registered yields that descriptor.
    /// - Anything else (a plain error, or a coded error with an
    ///   unregistered code) yields [`CodeDescriptor::unknown`].
    ///
    /// This never fails: an unclassified error degrades to the unknown
    /// descriptor rather than leaking an unstructured status.
    pub fn lookup(
        &self,
        err: Option<&(dyn std::error::Error + 'static)>,
    ) -> Option<CodeDescriptor> {
        let err = err?;
        let found = CodedError::from_err(err).and_then(|coded| self.get(coded.code()));
        Some(found.unwrap_or_else(CodeDescriptor::unknown))
    }

    /// Snapshot of every registered descriptor, sorted by code.
    pub fn descriptors(&self) -> Vec<CodeDescriptor> {
        let mut all: Vec<_> = self.codes.read().unwrap().values().cloned().collect();
        all.sort_by_key(|d| d.code);
        all
    }

    /// Number of registered codes (the reserved unknown code included).
    pub fn len(&self) -> usize {
        self.codes.read().unwrap().len()
    }

    /// Returns `true` if nothing is registered. Always `false` in practice
    /// since `new()` seeds the unknown descriptor.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
