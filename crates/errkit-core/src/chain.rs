//! Coded errors — the chained error value carrying a code, a message, an
//! optional cause, and a call-stack snapshot captured at construction.
//!
//! Three renderings, mapped onto the standard formatting traits:
//! - `Display` — just this node's message (safe for terse logs).
//! - `Debug` — message plus captured stack, then the cause chain,
//!   outermost to innermost, with the stack of every coded node.
//! - `Serialize` — a nested `{code, message, cause}` tree for structured
//!   logging, rendered with `serde_json`.

use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An error value classified by a numeric code.
///
/// A `CodedError` is a node in a singly linked cause chain: it owns its
/// boxed cause (which may be any error, not necessarily another
/// `CodedError`) and its own [`Backtrace`], captured where the node was
/// constructed. Values are immutable once built; wrapping produces a new,
/// longer chain.
pub struct CodedError {
    code: u32,
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

// ─── Construction ─────────────────────────────────────────────────────────────

impl CodedError {
    /// Build a root error with no cause.
    ///
    /// The backtrace is captured with `force_capture`, independent of
    /// `RUST_BACKTRACE`.
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
            backtrace: Backtrace::force_capture(),
        }
    }

    /// Wrap an existing error, attaching a code and message of this layer's
    /// own. The backtrace is captured at the wrap site.
    pub fn wrap(
        source: impl Into<Box<dyn Error + Send + Sync + 'static>>,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(source.into()),
            backtrace: Backtrace::force_capture(),
        }
    }
}

// ─── Inspection ───────────────────────────────────────────────────────────────

impl CodedError {
    /// This node's code. Does not walk the chain.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// This node's message. Does not walk the chain.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The stack snapshot captured when this node was constructed.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Downcast any error to a `CodedError` if that is what it is.
    ///
    /// This is the capability check the chain walk is built on: traversal
    /// stops at the first cause that fails it.
    pub fn from_err<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a CodedError> {
        err.downcast_ref::<CodedError>()
    }
}

/// Report whether any `CodedError` node in `err`'s cause chain carries
/// `code`.
///
/// The walk proceeds outermost to innermost and stops at the first cause
/// that is not itself a `CodedError`; causes beyond that point are never
/// inspected. A non-coded `err` is `false` for every code.
pub fn has_code(err: &(dyn Error + 'static), code: u32) -> bool {
    let mut node = CodedError::from_err(err);
    while let Some(coded) = node {
        if coded.code == code {
            return true;
        }
        node = Error::source(coded).and_then(CodedError::from_err);
    }
    false
}

// ─── Error + renderings ───────────────────────────────────────────────────────

impl Error for CodedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}

/// Plain rendering: the outermost message only.
impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Detailed rendering: message and stack for this node, then each cause in
/// turn. Coded causes contribute their message and stack; the terminal
/// non-coded cause contributes its plain message last.
impl fmt::Debug for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nstack backtrace:\n{}", self.message, self.backtrace)?;
        let mut next = Error::source(self);
        while let Some(cause) = next {
            match CodedError::from_err(cause) {
                Some(coded) => {
                    write!(
                        f,
                        "\ncaused by: {}\nstack backtrace:\n{}",
                        coded.message, coded.backtrace
                    )?;
                    next = Error::source(coded);
                }
                None => {
                    write!(f, "\ncaused by: {cause}")?;
                    next = None;
                }
            }
        }
        Ok(())
    }
}

/// Structured rendering: `{code, message, cause}` with `cause` recursing
/// through coded nodes and flattening a terminal non-coded cause to its
/// plain message. Stacks are not included; this form feeds structured
/// logging, not human diagnostics.
impl Serialize for CodedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CodedError", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        match Error::source(self) {
            Some(cause) => match CodedError::from_err(cause) {
                Some(coded) => state.serialize_field("cause", coded)?,
                None => state.serialize_field("cause", &cause.to_string())?,
            },
            None => state.skip_field("cause")?,
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err(msg: &str) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, msg.to_string())
    }

    fn three_level_chain() -> CodedError {
        let root = CodedError::new(5, "a");
        let mid = CodedError::wrap(root, 6, "b");
        CodedError::wrap(mid, 7, "c")
    }

    #[test]
    fn new_has_no_source() {
        let err = CodedError::new(100001, "all good, oddly");
        assert_eq!(err.code(), 100001);
        assert!(Error::source(&err).is_none());
    }

    #[test]
    fn wrap_preserves_the_cause() {
        let err = CodedError::wrap(io_err("connection refused"), 100101, "query failed");
        let cause = Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "connection refused");
    }

    #[test]
    fn from_err_is_the_capability_check() {
        let coded = CodedError::new(5, "a");
        let plain = io_err("nope");
        assert!(CodedError::from_err(&coded).is_some());
        assert!(CodedError::from_err(&plain).is_none());
    }

    #[test]
    fn has_code_walks_the_whole_chain() {
        let err = three_level_chain();
        assert!(has_code(&err, 7));
        assert!(has_code(&err, 6));
        assert!(has_code(&err, 5));
        assert!(!has_code(&err, 99));
    }

    #[test]
    fn has_code_is_false_for_non_coded_errors() {
        let plain = io_err("nope");
        assert!(!has_code(&plain, 5));
    }

    #[test]
    fn has_code_stops_at_first_non_coded_cause() {
        // coded(8) -> io error; codes past the io error are unreachable
        let err = CodedError::wrap(io_err("db down"), 8, "outer");
        assert!(has_code(&err, 8));
        assert!(!has_code(&err, 1));
    }

    #[test]
    fn plain_rendering_is_outermost_message_only() {
        let err = three_level_chain();
        assert_eq!(err.to_string(), "c");
    }

    #[test]
    fn detailed_rendering_contains_every_message_and_a_stack() {
        let rendered = format!("{:?}", three_level_chain());
        assert!(rendered.contains("c"));
        assert!(rendered.contains("caused by: b"));
        assert!(rendered.contains("caused by: a"));
        assert!(rendered.contains("stack backtrace:"));
    }

    #[test]
    fn detailed_rendering_ends_with_terminal_plain_message() {
        let err = CodedError::wrap(io_err("connection refused"), 100101, "query failed");
        let rendered = format!("{err:?}");
        assert!(rendered.starts_with("query failed"));
        assert!(rendered.trim_end().ends_with("caused by: connection refused"));
    }

    #[test]
    fn structured_rendering_is_a_nested_tree() {
        let value = serde_json::to_value(three_level_chain()).unwrap();
        assert_eq!(value["code"], 7);
        assert_eq!(value["message"], "c");
        assert_eq!(value["cause"]["code"], 6);
        assert_eq!(value["cause"]["cause"]["code"], 5);
        assert_eq!(value["cause"]["cause"]["message"], "a");
        assert!(value["cause"]["cause"].get("cause").is_none());
    }

    #[test]
    fn structured_rendering_flattens_terminal_cause_to_a_string() {
        let err = CodedError::wrap(io_err("connection refused"), 100101, "query failed");
        let value = serde_json::to_value(err).unwrap();
        assert_eq!(value["code"], 100101);
        assert_eq!(value["cause"], "connection refused");
    }

    #[test]
    fn wrapping_accepts_string_causes() {
        let err = CodedError::wrap("legacy failure text", 100002, "wrapped");
        assert_eq!(Error::source(&err).unwrap().to_string(), "legacy failure text");
    }
}
