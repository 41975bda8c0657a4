use super::{CauerForm, Immittance};
use crate::poly::Polynomial;
use crate::traits::CoeffBase;
use std::mem::swap;

/// Input pair prepared for [expand][super::expand]
#[derive(Clone, Debug)]
pub struct Normalized<T> {
    pub numerator: Polynomial<T>,
    pub denominator: Polynomial<T>,
    pub start: Immittance,
    /// Whether numerator and denominator were exchanged
    pub swapped: bool,
}

/// Exchange numerator and denominator when the requested form cannot start
/// from the pair as given.
///
/// - Cauer I needs the higher degree polynomial on top. If the numerator has
///   the lower degree the pair is swapped and the expansion starts from Y(s).
/// - Cauer II pivots on the constant terms. If the numerator vanishes at
///   `s = 0` the pair is swapped and the starting immittance is inverted.
///
/// The zero polynomial counts as having a lower degree than any other.
pub fn normalize<T: CoeffBase>(
    numerator: Polynomial<T>,
    denominator: Polynomial<T>,
    start: Immittance,
    form: CauerForm,
) -> Normalized<T> {
    let mut numerator = numerator;
    let mut denominator = denominator;

    let (swapped, start) = match form {
        CauerForm::First => {
            if numerator.degree() < denominator.degree() {
                (true, Immittance::Admittance)
            } else {
                (false, start)
            }
        }
        CauerForm::Second => {
            // N(0) is the constant term
            if numerator.coeff(0).is_none() {
                (true, start.flip())
            } else {
                (false, start)
            }
        }
    };

    if swapped {
        swap(&mut numerator, &mut denominator);
    }
    Normalized {
        numerator,
        denominator,
        start,
        swapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CauerForm::{First, Second};
    use Immittance::{Admittance, Impedance};

    fn poly(text: &str) -> Polynomial<i64> {
        text.parse().unwrap()
    }

    #[test]
    fn first_form_test() {
        let n = poly("6*s**4 + 42*s**2 + 48");
        let d = poly("s**5 + 18*s**3 + 48*s");

        let r = normalize(n.clone(), d.clone(), Impedance, First);
        assert!(r.swapped);
        assert_eq!(r.numerator, d);
        assert_eq!(r.denominator, n);
        assert_eq!(r.start, Admittance);

        // swapping always lands on Y(s), regardless of the requested start
        let r = normalize(n.clone(), d.clone(), Admittance, First);
        assert_eq!(r.start, Admittance);

        let r = normalize(d.clone(), n.clone(), Impedance, First);
        assert!(!r.swapped);
        assert_eq!(r.numerator, d);
        assert_eq!(r.start, Impedance);

        // equal degrees keep their order
        let r = normalize(poly("s + 1"), poly("2*s"), Admittance, First);
        assert!(!r.swapped);
        assert_eq!(r.start, Admittance);
    }

    #[test]
    fn second_form_test() {
        let n = poly("6*s**4 + 42*s**2 + 48");
        let d = poly("s**5 + 18*s**3 + 48*s");

        let r = normalize(n.clone(), d.clone(), Impedance, Second);
        assert!(!r.swapped);
        assert_eq!(r.start, Impedance);

        for start in &[Impedance, Admittance] {
            let r = normalize(d.clone(), n.clone(), *start, Second);
            assert!(r.swapped);
            assert_eq!(r.numerator, n);
            assert_eq!(r.denominator, d);
            assert_eq!(r.start, start.flip());
        }
    }

    #[test]
    fn zero_numerator_test() {
        let d = poly("s + 1");
        let r = normalize(Polynomial::zero(), d.clone(), Impedance, First);
        assert!(r.swapped);
        assert!(r.denominator.is_zero());

        let r = normalize(Polynomial::zero(), d, Impedance, Second);
        assert!(r.swapped);
        assert!(r.denominator.is_zero());
    }
}
