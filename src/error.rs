use std::{error::Error, fmt::Display};

/// Failure modes of curve fitting.
///
/// All variants are recoverable at the call site. A caller driving a display
/// typically skips drawing the affected curve; no fit ever falls back to a
/// default curve or returns non-finite coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Fewer points were supplied than the curve type requires.
    InsufficientPoints { required: usize, actual: usize },
    /// The assembled linear system has no numerically stable solution,
    /// typically because of duplicate x values or degenerate knot spacing.
    SingularSystem,
}

impl Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InsufficientPoints { required, actual } => {
                write!(f, "at least {} points are required, got {}", required, actual)
            }
            FitError::SingularSystem => {
                write!(f, "linear system is singular or nearly singular")
            }
        }
    }
}

impl Error for FitError {}
