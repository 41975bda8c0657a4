//! Exact univariate polynomials over rational coefficients.
//!
//! A [Polynomial] is a sparse map from degree to a nonzero [Ratio]. Every
//! operation returns a new value, and coefficients that cancel are dropped
//! immediately, so two polynomials are equal iff their maps are equal and
//! the zero polynomial is exactly the empty map.

mod parse;
mod term;

pub use term::{Direction, Term};

use crate::symbols::Indeterminate;
use crate::traits::CoeffBase;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Signed, Zero};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A polynomial `c_n x^n + ... + c_1 x + c_0` with `Ratio<T>` coefficients
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct Polynomial<T> {
    /// Nonzero coefficients keyed by degree
    coeffs: BTreeMap<u32, Ratio<T>>,
}

impl<T> Polynomial<T> {
    #[inline]
    pub fn zero() -> Self {
        Polynomial {
            coeffs: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the highest nonzero term, `None` for the zero polynomial
    #[inline]
    pub fn degree(&self) -> Option<u32> {
        self.coeffs.keys().next_back().copied()
    }

    /// Degree of the lowest nonzero term, `None` for the zero polynomial
    #[inline]
    pub fn lowest_degree(&self) -> Option<u32> {
        self.coeffs.keys().next().copied()
    }

    /// Number of nonzero terms
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn coeff(&self, degree: u32) -> Option<&Ratio<T>> {
        self.coeffs.get(&degree)
    }

    /// Nonzero terms as `(degree, coefficient)` in ascending degree
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, &Ratio<T>)> + '_ {
        self.coeffs.iter().map(|(d, c)| (*d, c))
    }

    /// Render the polynomial in descending order using `var` as the indeterminate
    pub fn display<'a>(&'a self, var: &'a Indeterminate) -> PolynomialDisplay<'a, T> {
        PolynomialDisplay { poly: self, var }
    }
}

/// Add `coeff * x^degree` into a coefficient map, removing the entry if it cancels
pub(crate) fn accumulate<T: CoeffBase>(
    coeffs: &mut BTreeMap<u32, Ratio<T>>,
    degree: u32,
    coeff: Ratio<T>,
) {
    if coeff.is_zero() {
        return;
    }
    match coeffs.entry(degree) {
        Entry::Vacant(slot) => {
            slot.insert(coeff);
        }
        Entry::Occupied(mut slot) => {
            let sum = slot.get().clone() + coeff;
            if sum.is_zero() {
                slot.remove();
            } else {
                *slot.get_mut() = sum;
            }
        }
    }
}

/// [accumulate] that reports overflow of the coefficient type as `None`
pub(crate) fn checked_accumulate<T: CoeffBase>(
    coeffs: &mut BTreeMap<u32, Ratio<T>>,
    degree: u32,
    coeff: Ratio<T>,
) -> Option<()> {
    if coeff.is_zero() {
        return Some(());
    }
    match coeffs.entry(degree) {
        Entry::Vacant(slot) => {
            slot.insert(coeff);
        }
        Entry::Occupied(mut slot) => {
            let sum = slot.get().checked_add(&coeff)?;
            if sum.is_zero() {
                slot.remove();
            } else {
                *slot.get_mut() = sum;
            }
        }
    }
    Some(())
}

impl<T: CoeffBase> Polynomial<T> {
    fn from_map(mut coeffs: BTreeMap<u32, Ratio<T>>) -> Self {
        coeffs.retain(|_, c| !c.is_zero());
        Polynomial { coeffs }
    }

    /// The single term `coeff * x^degree`
    pub fn monomial(coeff: Ratio<T>, degree: u32) -> Self {
        let mut coeffs = BTreeMap::new();
        if !coeff.is_zero() {
            coeffs.insert(degree, coeff);
        }
        Polynomial { coeffs }
    }

    #[inline]
    pub fn constant(coeff: Ratio<T>) -> Self {
        Self::monomial(coeff, 0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::constant(Ratio::one())
    }

    /// Build from coefficients in ascending degree order, starting at `x^0`
    pub fn from_coeffs<I: IntoIterator<Item = Ratio<T>>>(ascending: I) -> Self {
        Self::from_map((0u32..).zip(ascending).collect())
    }

    /// Build from integer coefficients in ascending degree order
    pub fn from_integers<I: IntoIterator<Item = T>>(ascending: I) -> Self {
        Self::from_coeffs(ascending.into_iter().map(Ratio::from_integer))
    }

    /// Evaluate at `x` with Horner's scheme, skipping over absent degrees.
    /// Like the arithmetic operators this panics if `T` overflows.
    pub fn evaluate(&self, x: &Ratio<T>) -> Ratio<T> {
        let mut terms = self.coeffs.iter().rev();
        let (mut prev, mut acc) = match terms.next() {
            Some((d, c)) => (*d, c.clone()),
            None => return Ratio::zero(),
        };
        for (d, c) in terms {
            for _ in *d..prev {
                acc = acc * x;
            }
            acc = acc + c;
            prev = *d;
        }
        for _ in 0..prev {
            acc = acc * x;
        }
        acc
    }

    /// Multiply every coefficient by `factor`
    pub fn scale(&self, factor: &Ratio<T>) -> Self {
        if factor.is_zero() {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .map(|(d, c)| (*d, c * factor))
            .collect();
        Polynomial { coeffs }
    }

    /// Multiply by `x^exponent`. A negative exponent is allowed as long as it
    /// divides out exactly, otherwise `None` is returned.
    pub fn shift(&self, exponent: i64) -> Option<Self> {
        let mut coeffs = BTreeMap::new();
        for (d, c) in &self.coeffs {
            let shifted = i64::from(*d).checked_add(exponent)?;
            coeffs.insert(u32::try_from(shifted).ok()?, c.clone());
        }
        Some(Polynomial { coeffs })
    }

    /// Multiply by a single (possibly negative-degree) term
    pub fn mul_term(&self, term: &Term<T>) -> Option<Self> {
        self.scale(&term.coeff).shift(term.degree)
    }

    /// [scale][Self::scale], `None` if a coefficient overflows `T`
    pub fn checked_scale(&self, factor: &Ratio<T>) -> Option<Self> {
        if factor.is_zero() {
            return Some(Self::zero());
        }
        let coeffs = self
            .coeffs
            .iter()
            .map(|(d, c)| c.checked_mul(factor).map(|c| (*d, c)))
            .collect::<Option<_>>()?;
        Some(Polynomial { coeffs })
    }

    /// [mul_term][Self::mul_term], `None` on a negative power or on overflow
    pub fn checked_mul_term(&self, term: &Term<T>) -> Option<Self> {
        self.checked_scale(&term.coeff)?.shift(term.degree)
    }

    fn combine(&self, rhs: &Self, negate: bool) -> Self {
        let mut coeffs = self.coeffs.clone();
        for (d, c) in &rhs.coeffs {
            let c = if negate { -c } else { c.clone() };
            accumulate(&mut coeffs, *d, c);
        }
        Polynomial { coeffs }
    }

    fn checked_combine(&self, rhs: &Self, negate: bool) -> Option<Self> {
        let mut coeffs = self.coeffs.clone();
        for (d, c) in &rhs.coeffs {
            let c = if negate {
                Ratio::<T>::zero().checked_sub(c)?
            } else {
                c.clone()
            };
            checked_accumulate(&mut coeffs, *d, c)?;
        }
        Some(Polynomial { coeffs })
    }

    fn product(&self, rhs: &Self) -> Self {
        let mut coeffs = BTreeMap::new();
        for (da, ca) in &self.coeffs {
            for (db, cb) in &rhs.coeffs {
                accumulate(&mut coeffs, da + db, ca * cb);
            }
        }
        Polynomial { coeffs }
    }
}

impl<T: CoeffBase> CheckedAdd for Polynomial<T> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.checked_combine(v, false)
    }
}

impl<T: CoeffBase> CheckedSub for Polynomial<T> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.checked_combine(v, true)
    }
}

impl<T: CoeffBase> CheckedMul for Polynomial<T> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        let mut coeffs = BTreeMap::new();
        for (da, ca) in &self.coeffs {
            for (db, cb) in &v.coeffs {
                checked_accumulate(&mut coeffs, da.checked_add(db)?, ca.checked_mul(cb)?)?;
            }
        }
        Some(Polynomial { coeffs })
    }
}

impl<T: Clone + Integer> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Clone + Integer> Eq for Polynomial<T> {}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_binop_for_poly {
    (impl $imp:ident, $method:ident, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl<'a, 'b, T: CoeffBase> $imp<&'b Polynomial<T>> for &'a Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &'b Polynomial<T>) -> Polynomial<T> {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl<T: CoeffBase> $imp<Polynomial<T>> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: Polynomial<T>) -> Polynomial<T> {
                let ($lhs, $rhs) = (&self, &rhs);
                $body
            }
        }
    };
}

impl_binop_for_poly!(impl Add, add, |lhs, rhs| lhs.combine(rhs, false));
impl_binop_for_poly!(impl Sub, sub, |lhs, rhs| lhs.combine(rhs, true));
impl_binop_for_poly!(impl Mul, mul, |lhs, rhs| lhs.product(rhs));

impl<'a, T: CoeffBase> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        let coeffs = self.coeffs.iter().map(|(d, c)| (*d, -c)).collect();
        Polynomial { coeffs }
    }
}

impl<T: CoeffBase> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

/// Helper returned by [Polynomial::display]
pub struct PolynomialDisplay<'a, T> {
    poly: &'a Polynomial<T>,
    var: &'a Indeterminate,
}

impl<'a, T: CoeffBase> fmt::Display for PolynomialDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_str("0");
        }

        for (i, (degree, c)) in self.poly.coeffs.iter().rev().enumerate() {
            match (i, c.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }

            let magnitude = c.abs();
            if *degree == 0 {
                write!(f, "{}", magnitude)?;
                continue;
            }
            if !magnitude.is_one() {
                write!(f, "{}*", magnitude)?;
            }
            write!(f, "{}", self.var)?;
            if *degree > 1 {
                write!(f, "**{}", degree)?;
            }
        }
        Ok(())
    }
}

impl<T: CoeffBase> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(&Indeterminate::laplace()))
    }
}

#[cfg(feature = "num-bigint")]
/// Polynomial with arbitrary precision rational coefficients
pub type BigPolynomial = Polynomial<num_bigint::BigInt>;
