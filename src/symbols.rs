//! The indeterminate of driving-point polynomials.
//!
//! The Laplace variable is passed around explicitly rather than living in a
//! process-wide symbol table, so parsing and printing with another name (for
//! example a normalized frequency `p`) needs no global state.

use std::fmt;

/// Name of the single indeterminate a polynomial is written in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indeterminate {
    name: String,
}

impl Indeterminate {
    /// Create an indeterminate with a custom name. The name is matched
    /// literally by the parser, so it should be an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Indeterminate { name: name.into() }
    }

    /// The complex frequency `s` of the Laplace transform
    #[inline]
    pub fn laplace() -> Self {
        Self::new("s")
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Indeterminate {
    fn default() -> Self {
        Self::laplace()
    }
}

impl fmt::Display for Indeterminate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
