//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Group size or range outside the supported domain.
#[derive(Debug)]
pub struct DomainError(pub String);

/// Chart rendering failed.
#[derive(Debug)]
pub struct RenderError(pub String);

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "domain error: {}", self.0)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "render error: {}", self.0)
    }
}

impl error::Error for DomainError {}

impl error::Error for RenderError {}

/// A helper for constructing [DomainError].
pub fn domain_error(s: String) -> Box<dyn error::Error> {
    DomainError(s).into()
}

/// A helper for constructing [DomainError].
pub fn domain_error_ref(s: &str) -> Box<dyn error::Error> {
    DomainError(s.to_owned()).into()
}

/// A helper for constructing [RenderError].
pub fn render_error(s: String) -> Box<dyn error::Error> {
    RenderError(s).into()
}

/// A helper for constructing [RenderError].
pub fn render_error_ref(s: &str) -> Box<dyn error::Error> {
    RenderError(s.to_owned()).into()
}
