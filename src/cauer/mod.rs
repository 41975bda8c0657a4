//! Cauer continued-fraction synthesis of one-port ladder networks.
//!
//! A driving-point immittance `N(s)/D(s)` is expanded by repeated division
//! into `q1 + 1/(q2 + 1/(q3 + ...))`, every quotient term becoming one ladder
//! element and every reciprocal moving the expansion between the series arm
//! (impedance) and the shunt arm (admittance).
//!
//! 1. [CauerForm::First] divides by the highest degree terms, so for LC
//!    functions the quotients are `k*s` (inductors and capacitors placed
//!    along the ladder from the input port).
//! 2. [CauerForm::Second] divides by the lowest degree terms, so the
//!    quotients are `k/s` and the element roles are the duals of the first
//!    form.
//!
//! # References:
//! - W. Cauer, "Die Verwirklichung von Wechselstromwiderständen vorgeschriebener
//!   Frequenzabhängigkeit", Archiv für Elektrotechnik 17 (1926)
//! - M. E. Van Valkenburg, "Introduction to Modern Network Synthesis", ch. 5

mod element;
mod expand;
mod normalize;
mod proptests;

pub use element::*;
pub use expand::expand;
pub use normalize::{normalize, Normalized};

use crate::error::Result;
use crate::options::SynthesisOptions;
use crate::poly::{Direction, Polynomial};
use crate::traits::CoeffBase;
use std::fmt;

/// Variant of the continued-fraction expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CauerForm {
    /// Descending powers, Cauer I
    First,
    /// Ascending powers, Cauer II
    Second,
}

impl CauerForm {
    /// End of the polynomials the quotient terms are taken from
    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            CauerForm::First => Direction::Highest,
            CauerForm::Second => Direction::Lowest,
        }
    }

    /// Ascending expansions yield the dual reactive element of the descending one
    #[inline]
    pub fn swaps_reactance(self) -> bool {
        matches!(self, CauerForm::Second)
    }

    /// Ascending expansions store the reciprocal of the quotient coefficient
    #[inline]
    pub fn reciprocal_value(self) -> bool {
        matches!(self, CauerForm::Second)
    }
}

impl Default for CauerForm {
    fn default() -> Self {
        CauerForm::First
    }
}

impl fmt::Display for CauerForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CauerForm::First => f.write_str("Cauer I"),
            CauerForm::Second => f.write_str("Cauer II"),
        }
    }
}

/// Whether the function being expanded is an impedance Z(s) or an admittance Y(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Immittance {
    Impedance,
    Admittance,
}

impl Immittance {
    #[inline]
    pub fn is_impedance(self) -> bool {
        matches!(self, Immittance::Impedance)
    }

    /// The reciprocal domain
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Immittance::Impedance => Immittance::Admittance,
            Immittance::Admittance => Immittance::Impedance,
        }
    }
}

impl Default for Immittance {
    fn default() -> Self {
        Immittance::Impedance
    }
}

impl From<bool> for Immittance {
    /// `true` selects Z(s), `false` selects Y(s)
    fn from(impedance: bool) -> Self {
        if impedance {
            Immittance::Impedance
        } else {
            Immittance::Admittance
        }
    }
}

impl From<Immittance> for bool {
    fn from(im: Immittance) -> bool {
        im.is_impedance()
    }
}

impl fmt::Display for Immittance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Immittance::Impedance => f.write_str("Z(s)"),
            Immittance::Admittance => f.write_str("Y(s)"),
        }
    }
}

/// Synthesize a ladder realizing `numerator / denominator`.
///
/// A zero denominator yields a ground-only ladder. Otherwise the pair is
/// normalized for the chosen form and expanded; any invalid step aborts the
/// whole synthesis.
pub fn synthesize<T: CoeffBase>(
    numerator: Polynomial<T>,
    denominator: Polynomial<T>,
    options: &SynthesisOptions,
) -> Result<Ladder<T>> {
    if denominator.is_zero() {
        log::debug!("{}: zero denominator, ground-only ladder", options.form);
        return Ok(Ladder::ground_only(options.form, options.start));
    }

    let normalized = normalize(numerator, denominator, options.start, options.form);
    log::debug!(
        "{} from {}: start {}, swapped {}, N = {}, D = {}",
        options.form,
        options.start,
        normalized.start,
        normalized.swapped,
        normalized.numerator,
        normalized.denominator
    );

    let ladder = expand(
        normalized.numerator,
        normalized.denominator,
        normalized.start,
        options.form,
    )?;
    Ok(ladder.with_inverted(normalized.swapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Ratio;

    fn poly(text: &str) -> Polynomial<i64> {
        text.parse().unwrap()
    }

    /// Fold `a1*s + 1/(a2*s + 1/(...))` into a numerator and denominator
    fn lc_fraction<T: CoeffBase>(
        values: &[Ratio<T>],
    ) -> (Polynomial<T>, Polynomial<T>) {
        let mut iter = values.iter().rev();
        let mut p = match iter.next() {
            Some(a) => Polynomial::monomial(a.clone(), 1),
            None => Polynomial::one(),
        };
        let mut q = Polynomial::one();
        for a in iter {
            let numer = &(&Polynomial::monomial(a.clone(), 1) * &p) + &q;
            q = p;
            p = numer;
        }
        (p, q)
    }

    fn element(
        kind: ElementKind,
        value: Ratio<i64>,
        placement: Placement,
        exponent: i64,
    ) -> NetworkElement<i64> {
        NetworkElement {
            kind,
            value,
            placement,
            exponent,
        }
    }

    #[test]
    fn form_policy_test() {
        assert_eq!(CauerForm::First.direction(), Direction::Highest);
        assert_eq!(CauerForm::Second.direction(), Direction::Lowest);
        assert!(!CauerForm::First.swaps_reactance());
        assert!(CauerForm::Second.reciprocal_value());
        assert_eq!(Immittance::from(true), Immittance::Impedance);
        assert_eq!(Immittance::Impedance.flip(), Immittance::Admittance);
        assert!(!bool::from(Immittance::Admittance));
        assert_eq!(
            format!("{} {}", CauerForm::Second, Immittance::Admittance),
            "Cauer II Y(s)"
        );
    }

    #[test]
    fn cauer_first_test() {
        use ElementKind::*;
        use Placement::*;

        let n = poly("6*s**4 + 42*s**2 + 48");
        let d = poly("s**5 + 18*s**3 + 48*s");
        let ladder = synthesize(n.clone(), d.clone(), &SynthesisOptions::default()).unwrap();

        // numerator has the lower degree, so the expansion runs on Y(s) = D/N
        assert!(ladder.is_inverted());
        assert_eq!(ladder.start(), Immittance::Admittance);
        assert_eq!(
            ladder.elements(),
            &[
                element(Capacitor, Ratio::new(1, 6), Parallel, 1),
                element(Inductor, Ratio::new(6, 11), Series, 1),
                element(Capacitor, Ratio::new(121, 222), Parallel, 1),
                element(Inductor, Ratio::new(4107, 2816), Series, 1),
                element(Capacitor, Ratio::new(32, 111), Parallel, 1),
            ][..]
        );
        assert_eq!(ladder.terminator(), Terminator::Ground);
        assert!(ladder.realizes(&n, &d));
    }

    #[test]
    fn cauer_second_test() {
        use ElementKind::*;
        use Placement::*;

        let n = poly("6*s**4 + 42*s**2 + 48");
        let d = poly("s**5 + 18*s**3 + 48*s");
        let options = SynthesisOptions::default().with_form(CauerForm::Second);
        let ladder = synthesize(n.clone(), d.clone(), &options).unwrap();

        assert!(!ladder.is_inverted());
        assert_eq!(ladder.start(), Immittance::Impedance);
        assert_eq!(
            ladder.elements(),
            &[
                element(Capacitor, Ratio::from_integer(1), Series, -1),
                element(Inductor, Ratio::new(1, 2), Parallel, -1),
                element(Capacitor, Ratio::new(1, 3), Series, -1),
                element(Inductor, Ratio::new(1, 4), Parallel, -1),
                element(Capacitor, Ratio::new(1, 2), Series, -1),
            ][..]
        );
        assert!(ladder.realizes(&n, &d));
    }

    #[test]
    fn cauer_second_swap_test() {
        // N(0) = 0 exchanges the roles before expanding
        let n = poly("s**5 + 18*s**3 + 48*s");
        let d = poly("6*s**4 + 42*s**2 + 48");
        let options = SynthesisOptions::default().with_form(CauerForm::Second);
        let ladder = synthesize(n.clone(), d.clone(), &options).unwrap();

        assert!(ladder.is_inverted());
        assert_eq!(ladder.start(), Immittance::Admittance);
        assert_eq!(ladder.len(), 5);
        assert_eq!(ladder.elements()[0].placement, Placement::Parallel);
        assert_eq!(ladder.elements()[0].kind, ElementKind::Inductor);
        assert!(ladder.realizes(&n, &d));
    }

    #[test]
    fn resistor_test() {
        // equal degree and proportional: a single resistor
        let options = SynthesisOptions::default();
        let ladder = synthesize(poly("2*s + 4"), poly("s + 2"), &options).unwrap();
        let resistor = element(
            ElementKind::Resistor,
            Ratio::from_integer(2),
            Placement::Series,
            0,
        );
        assert_eq!(ladder.elements(), &[resistor][..]);
    }

    #[test]
    fn rc_ladder_test() {
        use ElementKind::*;
        use Placement::*;

        // Z = (s + 2) / (s + 1) = 1 + 1/(s + 1)
        let n = poly("s + 2");
        let d = poly("s + 1");
        let ladder = synthesize(n.clone(), d.clone(), &SynthesisOptions::default()).unwrap();
        assert_eq!(
            ladder.elements(),
            &[
                element(Resistor, Ratio::from_integer(1), Series, 0),
                element(Capacitor, Ratio::from_integer(1), Parallel, 1),
                element(Resistor, Ratio::from_integer(1), Series, 0),
            ][..]
        );
        assert!(ladder.realizes(&n, &d));
    }

    #[test]
    fn zero_denominator_test() {
        for form in &[CauerForm::First, CauerForm::Second] {
            let options = SynthesisOptions::default().with_form(*form);
            let ladder = synthesize(poly("s**2 + 1"), Polynomial::zero(), &options).unwrap();
            assert!(ladder.is_empty());
            assert_eq!(format!("{}", ladder), "ground");

            // N(0) = 0 would normally swap for Cauer II
            let ladder = synthesize(poly("s"), Polynomial::zero(), &options).unwrap();
            assert!(ladder.is_empty());
        }
    }

    #[test]
    fn degenerate_test() {
        use crate::error::Error;

        let options = SynthesisOptions::default();

        // Z = (s + 1) / (s - 1): the third quotient is -2
        let err = synthesize(poly("s + 1"), poly("s - 1"), &options).unwrap_err();
        assert!(matches!(err, Error::DegenerateExpansion { step: 2, .. }));

        let err = synthesize(poly("-s"), poly("1"), &options).unwrap_err();
        assert!(matches!(err, Error::DegenerateExpansion { step: 0, .. }));
    }

    #[test]
    fn coefficient_overflow_test() {
        use crate::error::Error;

        // ten element ladder with values k/(k+7): N = 1/19448*s**10 + ... + 1
        let values: Vec<_> = (1..=10i64).map(|k| Ratio::new(k, k + 7)).collect();
        let (n, d) = lc_fraction(&values);

        let ladder = synthesize(n.clone(), d.clone(), &SynthesisOptions::default()).unwrap();
        assert_eq!(ladder.len(), 10);

        // the ascending remainders outgrow i64
        let options = SynthesisOptions::default().with_form(CauerForm::Second);
        let err = synthesize(n, d, &options).unwrap_err();
        assert!(matches!(err, Error::DegenerateExpansion { .. }));
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn big_coefficient_test() {
        use crate::poly::BigPolynomial;
        use num_bigint::BigInt;

        let values: Vec<_> = (1..=10i64)
            .map(|k| Ratio::new(BigInt::from(k), BigInt::from(k + 7)))
            .collect();
        let (n, d): (BigPolynomial, BigPolynomial) = lc_fraction(&values);

        let options = SynthesisOptions::default().with_form(CauerForm::Second);
        let ladder: BigLadder = synthesize(n.clone(), d.clone(), &options).unwrap();
        assert_eq!(ladder.len(), 10);
        assert!(ladder.realizes(&n, &d));
    }

    #[test]
    fn determinism_test() {
        let n = poly("6*s**4 + 42*s**2 + 48");
        let d = poly("s**5 + 18*s**3 + 48*s");
        for form in &[CauerForm::First, CauerForm::Second] {
            let options = SynthesisOptions::default().with_form(*form);
            let a = synthesize(n.clone(), d.clone(), &options).unwrap();
            let b = synthesize(n.clone(), d.clone(), &options).unwrap();
            assert_eq!(a, b);
        }
    }
}
