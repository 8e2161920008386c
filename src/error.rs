use thiserror::Error;

/// Errors raised by the case conversion API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// The requested case type is not one of the supported names.
    #[error(
        "unsupported case type '{0}' (expected one of: lowercase, uppercase, sentence, title, snake, kebab, camel, pascal, dot, constant)"
    )]
    UnsupportedCaseType(String),
}
