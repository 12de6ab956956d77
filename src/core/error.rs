use thiserror::Error;

/// Inputs an engine refuses to compute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A capital reduction of 100% or more leaves no capital to price.
    #[error("capital reduction must be below 100%, got {0}%")]
    ReductionOutOfRange(f64),
    /// The average-cost module treats any negative field as invalid.
    #[error("{field} must not be negative")]
    NegativeInput { field: &'static str },
}
