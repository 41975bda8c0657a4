//! `cauer-ladder` synthesizes passive one-port ladder networks from a
//! driving-point impedance or admittance given as a ratio of polynomials in
//! the Laplace variable, using the Cauer continued-fraction expansions.
//!
//! ```
//! use cauer_ladder::{synthesize, Polynomial, SynthesisOptions};
//!
//! let n: Polynomial<i64> = "6*s**4 + 42*s**2 + 48".parse().unwrap();
//! let d: Polynomial<i64> = "s**5 + 18*s**3 + 48*s".parse().unwrap();
//! let ladder = synthesize(n, d, &SynthesisOptions::default()).unwrap();
//! assert_eq!(ladder.len(), 5);
//! println!("{}", ladder);
//! ```

pub mod cauer;
mod error;
pub mod layout;
mod options;
mod poly;
pub mod symbols;
pub mod traits;

pub use cauer::{
    synthesize, CauerForm, ElementKind, Immittance, Ladder, NetworkElement, Placement, Terminator,
};
pub use error::{Error, Result};
pub use options::SynthesisOptions;
pub use poly::{Direction, Polynomial, PolynomialDisplay, Term};
pub use symbols::Indeterminate;

#[cfg(feature = "num-bigint")]
pub use cauer::BigLadder;
#[cfg(feature = "num-bigint")]
pub use poly::BigPolynomial;
