/// Build a root [`CodedError`](crate::CodedError) from a code and a format
/// string.
///
/// ```
/// use errkit_core::coded;
///
/// let name = "jane";
/// let err = coded!(110001, "no row for user {name}");
/// assert_eq!(err.to_string(), "no row for user jane");
/// ```
#[macro_export]
macro_rules! coded {
    ($code:expr, $($arg:tt)+) => {
        $crate::CodedError::new($code, ::std::format!($($arg)+))
    };
}

/// Wrap an existing error with a code and a format string.
///
/// ```
/// use errkit_core::wrap_coded;
///
/// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk error");
/// let err = wrap_coded!(io, 100101, "loading profile for id {}", 42);
/// assert_eq!(err.to_string(), "loading profile for id 42");
/// ```
#[macro_export]
macro_rules! wrap_coded {
    ($source:expr, $code:expr, $($arg:tt)+) => {
        $crate::CodedError::wrap($source, $code, ::std::format!($($arg)+))
    };
}
