use super::Polynomial;
use crate::error::{Error, Result};
use crate::traits::CoeffBase;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::CheckedDiv;

/// A single term `coeff * x^degree`. The degree is signed because a quotient
/// of two terms can carry a negative power of the indeterminate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct Term<T> {
    pub coeff: Ratio<T>,
    pub degree: i64,
}

impl<T> Term<T> {
    #[inline]
    pub fn new(coeff: Ratio<T>, degree: i64) -> Self {
        Term { coeff, degree }
    }
}

impl<T: Clone + Integer> PartialEq for Term<T> {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.coeff == other.coeff
    }
}

impl<T: CoeffBase> Term<T> {
    /// Quotient of two terms, `None` if the divisor has a zero coefficient or
    /// the quotient overflows `T`
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.coeff.numer().is_zero() {
            return None;
        }
        Some(Term {
            coeff: self.coeff.checked_div(&rhs.coeff)?,
            degree: self.degree.checked_sub(rhs.degree)?,
        })
    }
}

/// Which end of a polynomial a term is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Term of minimum degree, used by ascending expansions
    Lowest,
    /// Term of maximum degree, used by descending expansions
    Highest,
}

impl<T: CoeffBase> Polynomial<T> {
    /// Extract the term of lowest or highest degree.
    ///
    /// The zero polynomial has no terms and yields [Error::EmptyPolynomial];
    /// callers driving a loop should test [Polynomial::is_zero] first.
    pub fn extract(&self, direction: Direction) -> Result<Term<T>> {
        let entry = match direction {
            Direction::Lowest => self.coeffs.iter().next(),
            Direction::Highest => self.coeffs.iter().next_back(),
        };
        let (degree, coeff) = entry.ok_or(Error::EmptyPolynomial)?;
        Ok(Term::new(coeff.clone(), i64::from(*degree)))
    }

    #[inline]
    pub fn lowest_term(&self) -> Result<Term<T>> {
        self.extract(Direction::Lowest)
    }

    #[inline]
    pub fn highest_term(&self) -> Result<Term<T>> {
        self.extract(Direction::Highest)
    }
}
