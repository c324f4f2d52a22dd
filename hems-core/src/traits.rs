//! Core traits for evaluators
//!
//! Every index is computed by a small evaluator struct that owns its
//! [`InputLimits`](crate::InputLimits). The trait keeps them interchangeable
//! for hosts that batch requests, while the free functions in the crate root
//! cover the common one-shot case.

use crate::errors::EvaluationResult;

/// A stateless heat stress evaluation
///
/// Implementations must be pure: the same input always produces the same
/// output, and nothing is remembered between calls.
pub trait Evaluator {
    /// Input snapshot consumed by the evaluation
    type Input;

    /// Result record produced by the evaluation
    type Output;

    /// Run the evaluation
    fn evaluate(&self, input: &Self::Input) -> EvaluationResult<Self::Output>;

    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;
}

/// Extension trait for checking numeric validity
pub trait Validatable {
    /// Check if value is a usable number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
