//! Error type shared by polynomial parsing, term extraction and ladder expansion.

use thiserror::Error;

/// Errors surfaced by the synthesis entry points. A failed expansion never
/// yields a partial ladder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A term was requested from the zero polynomial.
    #[error("cannot extract a term from the zero polynomial")]
    EmptyPolynomial,

    /// An expansion step produced an element that is not physically realizable,
    /// or the expansion could not proceed.
    #[error("degenerate expansion at step {step}: {reason}")]
    DegenerateExpansion { step: usize, reason: String },

    /// Raw text could not be read as an exact polynomial.
    #[error("invalid polynomial `{input}` at offset {position}: {reason}")]
    InvalidPolynomialInput {
        input: String,
        position: usize,
        reason: String,
    },
}

impl Error {
    pub(crate) fn degenerate(step: usize, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::warn!("expansion aborted at step {}: {}", step, reason);
        Error::DegenerateExpansion { step, reason }
    }

    pub(crate) fn invalid_input(input: &str, position: usize, reason: impl Into<String>) -> Self {
        Error::InvalidPolynomialInput {
            input: input.to_owned(),
            position,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
