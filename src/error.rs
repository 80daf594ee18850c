use thiserror::Error;

/// Errors raised while preparing a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An acronym contained a separator character (or was empty).
    #[error("case conversion: acronym '{0}' is invalid")]
    InvalidAcronym(String),
}

pub type Result<T> = std::result::Result<T, Error>;
