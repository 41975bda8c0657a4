use std::fmt;

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Signed};

use crate::cauer::{NetworkElement, Terminator};

/// A helper trait to define valid integer types backing the rational
/// coefficients of a [Polynomial][crate::Polynomial]. The checked operations
/// let the expansion report overflow of bounded integers instead of panicking.
pub trait CoeffBase:
    Integer
    + Signed
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + CheckedDiv
    + Clone
    + fmt::Debug
    + fmt::Display
{
}

impl<T> CoeffBase for T
where
    T: Integer
        + Signed
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + CheckedDiv
        + Clone
        + fmt::Debug
        + fmt::Display
{
}

/// Consumer of a synthesized ladder, e.g. a schematic renderer or a netlist
/// writer. Elements are fed strictly in expansion order, because series
/// elements extend the chain that later parallel elements hang from.
pub trait ElementPlacer<T> {
    type Output;

    /// Place the next element of the ladder
    fn place(&mut self, element: &NetworkElement<T>);

    /// Close the ladder with its reference terminator
    fn terminate(&mut self, terminator: Terminator);

    fn finish(self) -> Self::Output;
}
