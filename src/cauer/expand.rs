use super::{CauerForm, ElementKind, Immittance, Ladder, NetworkElement, Placement};
use crate::error::{Error, Result};
use crate::poly::{Polynomial, Term};
use crate::traits::CoeffBase;
use num_traits::{CheckedSub, Signed};
use std::mem::replace;

/// Arm of the ladder the next reactive element goes to. Alternates on every
/// step because each division inverts the remaining immittance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Logic {
    SeriesNext,
    ParallelNext,
}

impl Logic {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Logic::SeriesNext => Logic::ParallelNext,
            Logic::ParallelNext => Logic::SeriesNext,
        }
    }

    /// Reactive element a non-constant quotient stands for, before any form swap
    #[inline]
    fn reactance(self) -> ElementKind {
        match self {
            Logic::SeriesNext => ElementKind::Inductor,
            Logic::ParallelNext => ElementKind::Capacitor,
        }
    }

    #[inline]
    fn placement(self) -> Placement {
        match self {
            Logic::SeriesNext => Placement::Series,
            Logic::ParallelNext => Placement::Parallel,
        }
    }
}

impl From<Immittance> for Logic {
    fn from(start: Immittance) -> Self {
        match start {
            Immittance::Impedance => Logic::SeriesNext,
            Immittance::Admittance => Logic::ParallelNext,
        }
    }
}

enum State {
    Expanding,
    Terminated,
}

/// Evolving `(numerator, denominator, logic)` triple of one expansion
struct Expansion<T> {
    numerator: Polynomial<T>,
    denominator: Polynomial<T>,
    logic: Logic,
    form: CauerForm,
    elements: Vec<NetworkElement<T>>,
    /// Abort threshold, above the step count of any terminating expansion
    limit: usize,
}

impl<T: CoeffBase> Expansion<T> {
    fn new(
        numerator: Polynomial<T>,
        denominator: Polynomial<T>,
        start: Immittance,
        form: CauerForm,
    ) -> Self {
        let degree = numerator.degree().max(denominator.degree()).unwrap_or(0);
        Expansion {
            numerator,
            denominator,
            logic: Logic::from(start),
            form,
            elements: Vec::new(),
            limit: 2 * degree as usize + 2,
        }
    }

    fn run(mut self) -> Result<Vec<NetworkElement<T>>> {
        let mut state = if self.denominator.is_zero() {
            State::Terminated
        } else {
            State::Expanding
        };
        while let State::Expanding = state {
            state = self.step()?;
        }
        Ok(self.elements)
    }

    fn step(&mut self) -> Result<State> {
        let step = self.elements.len();
        if step >= self.limit {
            return Err(Error::degenerate(
                step,
                format!("no termination within {} steps", self.limit),
            ));
        }

        let direction = self.form.direction();
        let num = self
            .numerator
            .extract(direction)
            .map_err(|e| Error::degenerate(step, format!("numerator: {}", e)))?;
        let den = self
            .denominator
            .extract(direction)
            .map_err(|e| Error::degenerate(step, format!("denominator: {}", e)))?;
        let quotient = num
            .checked_div(&den)
            .ok_or_else(|| Error::degenerate(step, "quotient coefficient overflow"))?;

        let kind = if quotient.degree == 0 {
            ElementKind::Resistor
        } else {
            self.logic.reactance().resolve(self.form.swaps_reactance())
        };
        // the reciprocal keeps the sign, so test before taking it
        if !quotient.coeff.is_positive() {
            return Err(Error::degenerate(
                step,
                format!("{} quotient {} is not positive", kind, quotient.coeff),
            ));
        }
        let value = if self.form.reciprocal_value() {
            quotient.coeff.recip()
        } else {
            quotient.coeff.clone()
        };

        let element = NetworkElement {
            kind,
            value,
            placement: self.logic.placement(),
            exponent: quotient.degree,
        };
        log::trace!(
            "step {}: quotient {}*s^{} -> {}",
            step,
            quotient.coeff,
            quotient.degree,
            element
        );
        self.elements.push(element);

        let remainder = self.remainder(&quotient, step)?;
        self.numerator = replace(&mut self.denominator, remainder);
        self.logic = self.logic.flip();

        // the new numerator is the old denominator; a zero on either side ends it
        if self.numerator.is_zero() || self.denominator.is_zero() {
            Ok(State::Terminated)
        } else {
            Ok(State::Expanding)
        }
    }

    /// `numerator - quotient * denominator`, overflow of `T` is degenerate
    fn remainder(&self, quotient: &Term<T>, step: usize) -> Result<Polynomial<T>> {
        let overflow = || Error::degenerate(step, "coefficient overflow");
        let product = self
            .denominator
            .checked_scale(&quotient.coeff)
            .ok_or_else(overflow)?
            .shift(quotient.degree)
            .ok_or_else(|| Error::degenerate(step, "remainder has a negative power"))?;
        self.numerator.checked_sub(&product).ok_or_else(overflow)
    }
}

/// Run the continued-fraction expansion on an already normalized pair.
///
/// One element is extracted per division until the remainder vanishes; the
/// ladder is then closed with a ground terminator. A zero denominator gives a
/// ground-only ladder. A zero numerator, a non-positive element value or an
/// expansion that fails to terminate is reported as
/// [Error::DegenerateExpansion].
pub fn expand<T: CoeffBase>(
    numerator: Polynomial<T>,
    denominator: Polynomial<T>,
    start: Immittance,
    form: CauerForm,
) -> Result<Ladder<T>> {
    let elements = Expansion::new(numerator, denominator, start, form).run()?;
    log::debug!("{} expansion finished with {} elements", form, elements.len());
    Ok(Ladder::new(elements, form, start, false))
}
