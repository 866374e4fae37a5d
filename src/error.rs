use thiserror::Error;

/// Errors raised when parsing the small value types of the crate from text
/// (command-line flags, URL segments, chart labels).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown gender '{0}', expected 'H' or 'F'")]
    Gender(String),

    #[error("unknown continent code '{0}', expected 0, 1 or 2")]
    Continent(String),

    #[error("invalid age range '{0}', expected 'N' or 'MIN-MAX'")]
    AgeRange(String),
}
