//! Calculation gate for a single form.
//!
//! A gated session starts `Pending`. Calculating moves it to `Calculated`
//! and any edit moves it back to `Pending`; results are only shown while
//! `Calculated`. Live sessions evaluate on every read instead.

use super::Form;
use crate::core::CalcError;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// Inputs changed since the last calculation
    Pending,
    /// Result reflects the current inputs
    Calculated(Result<T, CalcError>),
}

pub struct Session<F: Form> {
    form: F,
    phase: Phase<F::Output>,
}

impl<F: Form> Default for Session<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: Form> Session<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            phase: Phase::Pending,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    #[cfg(test)]
    pub fn phase(&self) -> &Phase<F::Output> {
        &self.phase
    }

    #[cfg(test)]
    pub fn is_calculated(&self) -> bool {
        matches!(self.phase, Phase::Calculated(_))
    }

    /// The only way to mutate the form. Always invalidates the last result.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut F) -> T) -> T {
        self.phase = Phase::Pending;
        f(&mut self.form)
    }

    /// Set a field by name. Returns false for an unknown field, leaving
    /// the session untouched.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        if self.form.field(name).is_none() {
            return false;
        }
        self.edit(|form| form.set_field(name, value))
    }

    pub fn calculate(&mut self) -> Result<F::Output, CalcError> {
        let result = self.form.evaluate();
        self.phase = Phase::Calculated(result.clone());
        result
    }

    /// Current result, if one should be shown.
    pub fn outcome(&self) -> Option<Result<F::Output, CalcError>> {
        if !F::GATED {
            return Some(self.form.evaluate());
        }
        match &self.phase {
            Phase::Pending => None,
            Phase::Calculated(result) => Some(result.clone()),
        }
    }

    /// Clear all inputs back to their defaults.
    pub fn reset(&mut self) {
        self.edit(|form| *form = F::default());
    }
}
