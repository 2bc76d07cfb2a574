//! errkit-catalog — the bundled table of well-known application codes.
//!
//! Codes are grouped by decade-style ranges:
//! - `1000xx` general request/response handling
//! - `1001xx` database
//! - `1002xx` authentication and authorization
//! - `1003xx` encoding and decoding
//! - `1100xx` user domain
//! - `1101xx` secret domain
//!
//! The catalog is configuration data, not mechanism: `errkit-core` works
//! without it, and services with their own taxonomy can register a table of
//! their own instead.

use errkit_core::{CodeDescriptor, CodeRegistry};

// ─── General ──────────────────────────────────────────────────────────────────

/// Request succeeded.
pub const ERR_SUCCESS: u32 = 100001;
/// Unclassified internal failure.
pub const ERR_UNKNOWN: u32 = 100002;
/// Request body could not be bound to the expected shape.
pub const ERR_BIND: u32 = 100003;
/// Request failed validation.
pub const ERR_VALIDATION: u32 = 100004;
/// Authentication token is malformed or forged.
pub const ERR_TOKEN_INVALID: u32 = 100005;

// ─── Database ─────────────────────────────────────────────────────────────────

/// Database operation failed.
pub const ERR_DATABASE: u32 = 100101;

// ─── Authentication / authorization ───────────────────────────────────────────

/// Password hashing or comparison failed.
pub const ERR_ENCRYPT: u32 = 100201;
/// Request signature does not verify.
pub const ERR_SIGNATURE_INVALID: u32 = 100202;
/// Authentication token has expired.
pub const ERR_EXPIRED: u32 = 100203;
/// The `Authorization` header is present but malformed.
pub const ERR_INVALID_AUTH_HEADER: u32 = 100204;
/// The `Authorization` header is missing.
pub const ERR_MISSING_HEADER: u32 = 100205;
/// Credentials were presented but are wrong.
pub const ERR_PASSWORD_INCORRECT: u32 = 100206;
/// The caller is authenticated but not allowed.
pub const ERR_PERMISSION_DENIED: u32 = 100207;

// ─── Encoding / decoding ──────────────────────────────────────────────────────

/// Data could not be encoded.
pub const ERR_ENCODING_FAILED: u32 = 100301;
/// Data could not be decoded.
pub const ERR_DECODING_FAILED: u32 = 100302;
/// Payload is not valid JSON.
pub const ERR_INVALID_JSON: u32 = 100303;
/// JSON payload could not be encoded.
pub const ERR_ENCODING_JSON: u32 = 100304;
/// JSON payload could not be decoded.
pub const ERR_DECODING_JSON: u32 = 100305;

// ─── User domain ──────────────────────────────────────────────────────────────

/// No user matches the given identifier.
pub const ERR_USER_NOT_FOUND: u32 = 110001;
/// A user with the given identifier already exists.
pub const ERR_USER_ALREADY_EXISTS: u32 = 110002;

// ─── Secret domain ────────────────────────────────────────────────────────────

/// The account owns the maximum number of secrets already.
pub const ERR_REACH_MAX_COUNT: u32 = 110101;
/// No secret matches the given identifier.
pub const ERR_SECRET_NOT_FOUND: u32 = 110102;

/// The bundled table: code, HTTP status, external message.
const BUILTIN: &[(u32, u16, &str)] = &[
    (ERR_SUCCESS, 200, "OK"),
    (ERR_UNKNOWN, 500, "Internal server error"),
    (ERR_BIND, 400, "Error occurred while binding the request body to the struct"),
    (ERR_VALIDATION, 400, "Validation failed"),
    (ERR_TOKEN_INVALID, 401, "Token invalid"),
    (ERR_DATABASE, 500, "Database error"),
    (ERR_ENCRYPT, 401, "Error occurred while encrypting the user password"),
    (ERR_SIGNATURE_INVALID, 401, "Signature is invalid"),
    (ERR_EXPIRED, 401, "Token expired"),
    (ERR_INVALID_AUTH_HEADER, 401, "Invalid authorization header"),
    (ERR_MISSING_HEADER, 401, "The `Authorization` header was empty"),
    (ERR_PASSWORD_INCORRECT, 401, "Password was incorrect"),
    (ERR_PERMISSION_DENIED, 403, "Permission denied"),
    (ERR_ENCODING_FAILED, 500, "Encoding failed due to an error with the data"),
    (ERR_DECODING_FAILED, 500, "Decoding failed due to an error with the data"),
    (ERR_INVALID_JSON, 500, "Data is not valid JSON"),
    (ERR_ENCODING_JSON, 500, "JSON data could not be encoded"),
    (ERR_DECODING_JSON, 500, "JSON data could not be decoded"),
    (ERR_USER_NOT_FOUND, 404, "User not found"),
    (ERR_USER_ALREADY_EXISTS, 400, "User already exist"),
    (ERR_REACH_MAX_COUNT, 400, "Secret reach the max count"),
    (ERR_SECRET_NOT_FOUND, 404, "Secret not found"),
];

/// Register every bundled code into `registry`.
///
/// Call once at startup. Panics if any bundled code collides with a code
/// already registered, since that is a configuration bug.
pub fn register_builtin(registry: &CodeRegistry) {
    for &(code, http_status, message) in BUILTIN {
        registry.must_register(CodeDescriptor::new(code, http_status, message));
    }
}
