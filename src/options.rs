//! Synthesis configuration

use crate::cauer::{CauerForm, Immittance};

/// Options selecting the expansion variant and the domain of the input function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynthesisOptions {
    pub form: CauerForm,
    /// Whether the given function is Z(s) or Y(s)
    pub start: Immittance,
}

impl SynthesisOptions {
    pub fn new(form: CauerForm, start: Immittance) -> Self {
        SynthesisOptions { form, start }
    }

    #[inline]
    pub fn with_form(self, form: CauerForm) -> Self {
        SynthesisOptions { form, ..self }
    }

    #[inline]
    pub fn with_start(self, start: Immittance) -> Self {
        SynthesisOptions { start, ..self }
    }
}
