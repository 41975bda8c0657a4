//! Ladder elements and the synthesized ladder itself

use super::{CauerForm, Immittance};
use crate::poly::{Polynomial, Term};
use crate::traits::{CoeffBase, ElementPlacer};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use std::fmt;

/// Kind of a passive two-terminal element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Inductor = 0,
    Capacitor = 1,
    Resistor = 2,
}

/// `REACTANCE_TABLE[kind][swap]`, the dual of a reactive element is the other
/// reactive element while a resistor stays a resistor
const REACTANCE_TABLE: [[ElementKind; 2]; 3] = [
    [ElementKind::Inductor, ElementKind::Capacitor],
    [ElementKind::Capacitor, ElementKind::Inductor],
    [ElementKind::Resistor, ElementKind::Resistor],
];

impl ElementKind {
    /// Resolve the final kind, exchanging inductor and capacitor when `swap` is set
    #[inline]
    pub fn resolve(self, swap: bool) -> Self {
        REACTANCE_TABLE[self as usize][swap as usize]
    }

    #[inline]
    pub fn swapped(self) -> Self {
        self.resolve(true)
    }

    /// Unit symbol of the element value
    pub fn unit(self) -> &'static str {
        match self {
            ElementKind::Inductor => "H",
            ElementKind::Capacitor => "F",
            ElementKind::Resistor => "Ω",
        }
    }

    /// Schematic designator letter
    pub fn symbol(self) -> char {
        match self {
            ElementKind::Inductor => 'L',
            ElementKind::Capacitor => 'C',
            ElementKind::Resistor => 'R',
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Inductor => "inductor",
            ElementKind::Capacitor => "capacitor",
            ElementKind::Resistor => "resistor",
        };
        f.write_str(name)
    }
}

/// Where an element sits relative to the chain built so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// In line with the chain
    Series,
    /// Shunt branch from the current chain node to the return rail
    Parallel,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Series
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Series => f.write_str("series"),
            Placement::Parallel => f.write_str("parallel"),
        }
    }
}

/// Reference node closing the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terminator {
    Ground,
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Ground => f.write_str("ground"),
        }
    }
}

/// One element extracted by a single expansion step
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct NetworkElement<T> {
    pub kind: ElementKind,
    /// Element value in henries, farads or ohms, always positive
    pub value: Ratio<T>,
    pub placement: Placement,
    /// Signed power of the indeterminate in the quotient term this element
    /// was extracted from
    pub exponent: i64,
}

impl<T: Clone + Integer> PartialEq for NetworkElement<T> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.placement == other.placement
            && self.exponent == other.exponent
            && self.value == other.value
    }
}

impl<T: Clone + Integer> Eq for NetworkElement<T> {}

impl<T: CoeffBase> fmt::Display for NetworkElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.kind.symbol(),
            self.value,
            self.kind.unit(),
            self.placement
        )
    }
}

/// A synthesized ladder: elements in expansion order closed by a terminator.
///
/// The ladder remembers how it was produced (form, starting immittance and
/// whether normalization exchanged numerator and denominator), which is
/// enough to fold the element values back into the rational function.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize + CoeffBase",
        deserialize = "T: serde::Deserialize<'de> + CoeffBase"
    ))
)]
pub struct Ladder<T> {
    elements: Vec<NetworkElement<T>>,
    terminator: Terminator,
    form: CauerForm,
    start: Immittance,
    inverted: bool,
}

impl<T: Clone + Integer> PartialEq for Ladder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form
            && self.start == other.start
            && self.inverted == other.inverted
            && self.terminator == other.terminator
            && self.elements == other.elements
    }
}

impl<T> Ladder<T> {
    pub(crate) fn new(
        elements: Vec<NetworkElement<T>>,
        form: CauerForm,
        start: Immittance,
        inverted: bool,
    ) -> Self {
        Ladder {
            elements,
            terminator: Terminator::Ground,
            form,
            start,
            inverted,
        }
    }

    pub(crate) fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// A ladder without elements, produced for a zero denominator
    pub(crate) fn ground_only(form: CauerForm, start: Immittance) -> Self {
        Self::new(Vec::new(), form, start, false)
    }

    #[inline]
    pub fn elements(&self) -> &[NetworkElement<T>] {
        &self.elements[..]
    }

    #[inline]
    pub fn into_elements(self) -> Vec<NetworkElement<T>> {
        self.elements
    }

    #[inline]
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    #[inline]
    pub fn form(&self) -> CauerForm {
        self.form
    }

    /// Immittance the first element was extracted from, after normalization
    #[inline]
    pub fn start(&self) -> Immittance {
        self.start
    }

    /// Whether normalization exchanged numerator and denominator
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetworkElement<T>> {
        self.elements.iter()
    }

    /// Feed every element and then the terminator to `placer`, in order
    pub fn place_with<P: ElementPlacer<T>>(&self, mut placer: P) -> P::Output {
        for element in &self.elements {
            placer.place(element);
        }
        placer.terminate(self.terminator);
        placer.finish()
    }
}

impl<'a, T> IntoIterator for &'a Ladder<T> {
    type Item = &'a NetworkElement<T>;
    type IntoIter = std::slice::Iter<'a, NetworkElement<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// `coeff * s^degree` as a fraction of two polynomials
fn term_fraction<T: CoeffBase>(term: &Term<T>) -> (Polynomial<T>, Polynomial<T>) {
    let power = term.degree.unsigned_abs() as u32;
    if term.degree >= 0 {
        (Polynomial::monomial(term.coeff.clone(), power), Polynomial::one())
    } else {
        (
            Polynomial::constant(term.coeff.clone()),
            Polynomial::monomial(Ratio::one(), power),
        )
    }
}

impl<T: CoeffBase> Ladder<T> {
    /// Quotient terms of the continued fraction, one per element. Descending
    /// expansions store the quotient coefficient as the value, ascending ones
    /// its reciprocal.
    pub fn quotients(&self) -> Vec<Term<T>> {
        let reciprocal = self.form.reciprocal_value();
        self.elements
            .iter()
            .map(|e| {
                let coeff = if reciprocal {
                    e.value.recip()
                } else {
                    e.value.clone()
                };
                Term::new(coeff, e.exponent)
            })
            .collect()
    }

    /// Fold the continued fraction `q1 + 1/(q2 + 1/(q3 + ...))` back into a
    /// `(numerator, denominator)` pair. This is the normalized immittance the
    /// expansion started from, up to a common factor. A ground-only ladder
    /// folds to `1/0`. Returns `None` if a coefficient overflows `T`.
    pub fn reconstruct(&self) -> Option<(Polynomial<T>, Polynomial<T>)> {
        let mut quotients = self.quotients().into_iter().rev();
        let (mut p, mut q) = match quotients.next() {
            Some(last) => term_fraction(&last),
            None => return Some((Polynomial::one(), Polynomial::zero())),
        };
        for term in quotients {
            // term + q/p = (tn*p + td*q) / (td*p)
            let (tn, td) = term_fraction(&term);
            let numer = tn.checked_mul(&p)?.checked_add(&td.checked_mul(&q)?)?;
            q = td.checked_mul(&p)?;
            p = numer;
        }
        Some((p, q))
    }

    /// Check that the ladder realizes `numerator / denominator` as supplied to
    /// the synthesis, before any normalization swap. A check that overflows
    /// `T` counts as not realized.
    pub fn realizes(&self, numerator: &Polynomial<T>, denominator: &Polynomial<T>) -> bool {
        let (p, q) = match self.reconstruct() {
            Some(pair) => pair,
            None => return false,
        };
        let (p, q) = if self.inverted { (q, p) } else { (p, q) };
        if q.is_zero() {
            return denominator.is_zero();
        }
        if denominator.is_zero() {
            return false;
        }
        match (numerator.checked_mul(&q), denominator.checked_mul(&p)) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }

    /// Sum of all element values of the given kind, `None` on overflow
    pub fn total(&self, kind: ElementKind) -> Option<Ratio<T>> {
        self.elements
            .iter()
            .filter(|e| e.kind == kind)
            .try_fold(Ratio::zero(), |acc: Ratio<T>, e| acc.checked_add(&e.value))
    }
}

impl<T: CoeffBase> fmt::Display for Ladder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            writeln!(f, "{}", element)?;
        }
        write!(f, "{}", self.terminator)
    }
}

#[cfg(feature = "num-bigint")]
/// Ladder with arbitrary precision element values
pub type BigLadder = Ladder<num_bigint::BigInt>;

#[cfg(test)]
mod tests {
    use super::*;
    use ElementKind::*;
    use Placement::*;

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
    fn kind_table_test() {
        assert_eq!(Inductor.resolve(false), Inductor);
        assert_eq!(Inductor.resolve(true), Capacitor);
        assert_eq!(Capacitor.swapped(), Inductor);
        assert_eq!(Resistor.swapped(), Resistor);
        assert_eq!(Inductor.swapped().swapped(), Inductor);
        assert_eq!(Resistor.unit(), "Ω");
        assert_eq!(Placement::default(), Placement::Series);
    }

    #[test]
    fn fmt_test() {
        let ladder = Ladder::new(
            vec![
                element(Capacitor, Ratio::new(1, 6), Parallel, 1),
                element(Inductor, Ratio::new(6, 11), Series, 1),
                element(Resistor, Ratio::from_integer(2), Series, 0),
            ],
            CauerForm::First,
            Immittance::Admittance,
            true,
        );
        assert_eq!(
            format!("{}", ladder),
            "C 1/6 F (parallel)\nL 6/11 H (series)\nR 2 Ω (series)\nground"
        );
        let ground = Ladder::<i64>::ground_only(CauerForm::Second, Immittance::Impedance);
        assert_eq!(format!("{}", ground), "ground");
    }

    #[test]
    fn reconstruct_test() {
        // Z = 2s + 1/(3s) = (6s^2 + 1) / (3s)
        let ladder = Ladder::new(
            vec![
                element(Inductor, Ratio::from_integer(2), Series, 1),
                element(Capacitor, Ratio::from_integer(3), Parallel, 1),
            ],
            CauerForm::First,
            Immittance::Impedance,
            false,
        );
        let (p, q) = ladder.reconstruct().unwrap();
        assert_eq!(p, Polynomial::from_integers(vec![1, 0, 6]));
        assert_eq!(q, Polynomial::from_integers(vec![0, 3]));

        let scaled = (
            Polynomial::from_integers(vec![2, 0, 12]),
            Polynomial::from_integers(vec![0, 6]),
        );
        assert!(ladder.realizes(&scaled.0, &scaled.1));
        let other = (
            Polynomial::from_integers(vec![1, 0, 6]),
            Polynomial::from_integers(vec![0, 2]),
        );
        assert!(!ladder.realizes(&other.0, &other.1));

        assert_eq!(ladder.total(ElementKind::Inductor), Some(Ratio::from_integer(2)));
        assert_eq!(ladder.total(ElementKind::Resistor), Some(Ratio::zero()));
    }

    #[test]
    fn reconstruct_ascending_test() {
        // Z = 1/s + 1/(2/s), ascending values are stored as reciprocals
        let ladder = Ladder::new(
            vec![
                element(Capacitor, Ratio::from_integer(1), Series, -1),
                element(Inductor, Ratio::new(1, 2), Parallel, -1),
            ],
            CauerForm::Second,
            Immittance::Impedance,
            false,
        );
        assert_eq!(
            ladder.quotients(),
            vec![
                Term::new(Ratio::from_integer(1), -1),
                Term::new(Ratio::from_integer(2), -1)
            ]
        );
        // 1/s + s/2 = (s^2 + 2) / (2s)
        let n = Polynomial::from_integers(vec![2, 0, 1]);
        let d = Polynomial::from_integers(vec![0, 2]);
        let (p, q) = ladder.reconstruct().unwrap();
        assert!(ladder.realizes(&n, &d));
        assert_eq!(&p * &d, &q * &n);
    }

    #[test]
    fn overflow_test() {
        let max = Ratio::from_integer(i64::MAX);
        let ladder = Ladder::new(
            vec![
                element(Inductor, max.clone(), Series, 1),
                element(Capacitor, Ratio::new(1, 2), Parallel, 1),
                element(Inductor, max, Series, 1),
            ],
            CauerForm::First,
            Immittance::Impedance,
            false,
        );
        assert_eq!(ladder.total(ElementKind::Inductor), None);
        assert_eq!(ladder.total(ElementKind::Capacitor), Some(Ratio::new(1, 2)));
        assert_eq!(ladder.reconstruct(), None);
        assert!(!ladder.realizes(&Polynomial::one(), &Polynomial::one()));
    }

    #[test]
    fn ground_only_test() {
        let ladder = Ladder::<i64>::ground_only(CauerForm::First, Immittance::Impedance);
        assert!(ladder.is_empty());
        assert_eq!(ladder.terminator(), Terminator::Ground);
        let (p, q) = ladder.reconstruct().unwrap();
        assert!(q.is_zero() && !p.is_zero());
        assert!(ladder.realizes(&Polynomial::from_integers(vec![1, 1]), &Polynomial::zero()));
    }
}
