//! Error Types for Heat Stress Evaluation
//!
//! ## Design Philosophy
//!
//! The evaluators are closed-form arithmetic over a single input snapshot, so
//! the error taxonomy stays narrow:
//!
//! 1. **Small Size**: variants carry only `f64` values and `&'static str`
//!    field names. No heap allocation, so the enum works without `std`.
//!
//! 2. **Copy Semantics**: errors are returned by value from every evaluator.
//!
//! 3. **Fail Fast**: an out-of-range or non-finite input is rejected before
//!    any formula runs. A `log10` of a non-positive metabolic rate or a
//!    negative humidity never reaches the arithmetic and never turns into NaN.
//!
//! ## What Is Not an Error
//!
//! The required sweat rate method can be *inapplicable* for a perfectly valid
//! input (the environment cannot absorb any evaporation). That is a domain
//! outcome, reported through
//! [`SweatRateOutcome::NotApplicable`](crate::evaluators::SweatRateOutcome),
//! not through this enum.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use hems_core::{evaluate_wbgt, Acclimatization, EvaluationError};
//!
//! match evaluate_wbgt(false, 32.0, 36.0, 28.0, 2.0, -5.0, Acclimatization::Acclimatized) {
//!     Ok(result) => println!("WBGT {:.1}", result.effective),
//!     Err(EvaluationError::OutOfRange { field, .. }) => {
//!         // Reject the form field and ask the user again
//!         println!("{field} outside plausible range");
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for evaluation operations
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Evaluation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EvaluationError {
    /// Value outside the configured plausible range
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending input
        field: &'static str,
        /// The value that failed the check
        value: f64,
        /// Lower bound of the accepted range
        min: f64,
        /// Upper bound of the accepted range
        max: f64,
    },

    /// Input is NaN or infinite
    #[error("{field} is not a finite number")]
    InvalidValue {
        /// Name of the offending input
        field: &'static str,
    },

    /// Maximum evaporative capacity is zero or negative, so no ratio index exists
    #[error("{method}: no evaporative capacity (Emax = {value} W/m²)")]
    NoEvaporativeCapacity {
        /// Method that needed the capacity
        method: &'static str,
        /// Computed capacity
        value: f64,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for EvaluationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { field, value, min, max } => {
                defmt::write!(fmt, "{} = {} outside [{}, {}]", field, value, min, max)
            }
            Self::InvalidValue { field } => defmt::write!(fmt, "{} not finite", field),
            Self::NoEvaporativeCapacity { method, value } => {
                defmt::write!(fmt, "{}: Emax = {}", method, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_copy_and_comparable() {
        let err = EvaluationError::InvalidValue { field: "humidity" };
        let copy = err;
        assert_eq!(err, copy);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_field() {
        let err = EvaluationError::OutOfRange {
            field: "metabolic_rate",
            value: -5.0,
            min: 1.0,
            max: 1000.0,
        };
        let text = std::format!("{err}");
        assert!(text.contains("metabolic_rate"));
        assert!(text.contains("-5"));
    }
}
