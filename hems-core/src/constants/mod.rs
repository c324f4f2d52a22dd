//! Constants for HEMS Core
//!
//! Every empirical coefficient used by the evaluators is defined here with
//! its unit and source, so the formulas in [`crate::evaluators`] read as
//! equations instead of strings of magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: physical constants and unit-conversion factors
//! - **Thresholds**: classification bands and physiological limits
//! - **Ranges**: plausible input ranges backing [`crate::InputLimits`]

/// Physical constants, psychrometric coefficients and unit conversion factors.
pub mod physics;

/// Classification thresholds and acclimatization-dependent physiological limits.
pub mod thresholds;

/// Plausible input ranges.
pub mod ranges;

// Re-export commonly used constants for convenience
pub use physics::{
    KELVIN_OFFSET, METABOLIC_SURFACE_AREA_FACTOR, SKIN_EMISSIVITY, STEFAN_BOLTZMANN_W_PER_M2_K4,
};

pub use thresholds::{HEAT_INDEX_REGRESSION_THRESHOLD_F, HOOD_CAVS_INCREMENT_C, ISC_MAX_ICLO};

/// Time conversion factors.
pub mod time {
    /// Minutes in one hour.
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}
