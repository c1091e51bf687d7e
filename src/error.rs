use thiserror::Error;

/// Errors produced at the crate's input boundary.
///
/// The engine itself has no failure modes; only turning external text into a
/// sequence of comparable values can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A sequence element could not be parsed as an integer.
    #[error("invalid sequence element `{token}`")]
    InvalidElement {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
