use miette::Diagnostic;
use thiserror::Error;

/// Failure raised by the asserting form when a check reports a problem.
///
/// The display text is exactly the message the checking form would have
/// returned. The three failure kinds (non-callable spec, malformed validator
/// return, reported validation error) are deliberately not distinguished
/// structurally; the contract is a text message or nothing.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(propcheck::check_failed),
    help("prop type checks run in development builds only; set PROPCHECK_ENV=production to disable them")
)]
pub struct CheckError {
    message: String,
}

impl CheckError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
