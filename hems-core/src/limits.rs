//! Plausible input ranges shared by the evaluators
//!
//! Inputs are expected to be validated by the caller, but every evaluator
//! still checks them against an [`InputLimits`] before computing anything,
//! so a typo in a form never becomes a NaN in a report.
//!
//! ```rust
//! use hems_core::InputLimits;
//!
//! // Accept anything the formulas can digest
//! let relaxed = InputLimits::default();
//!
//! // Mirror the ranges of the assessment form
//! let strict = InputLimits::strict();
//!
//! // Laboratory chamber with slow air only
//! let chamber = InputLimits::default().with_air_speed(0.0, 0.5);
//! # let _ = (relaxed, strict, chamber);
//! ```

use crate::constants::ranges::*;

/// Accepted `(min, max)` range for every scalar input
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputLimits {
    /// Dry-bulb and wet-bulb temperature (°C)
    pub air_temp_c: (f64, f64),
    /// Globe temperature (°C)
    pub globe_temp_c: (f64, f64),
    /// Relative humidity (%)
    pub humidity_pct: (f64, f64),
    /// Air speed (m/s)
    pub air_speed_m_s: (f64, f64),
    /// Metabolic rate (W/m²), must stay strictly positive
    pub metabolic_rate_w_m2: (f64, f64),
    /// Clothing resistance (m²·K/W)
    pub iclo_m2k_w: (f64, f64),
    /// CAVS correction (°C)
    pub cavs_c: (f64, f64),
    /// Worker height (cm)
    pub height_cm: (f64, f64),
    /// Worker weight (kg)
    pub weight_kg: (f64, f64),
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            air_temp_c: AIR_TEMP_RANGE_C,
            globe_temp_c: GLOBE_TEMP_RANGE_C,
            humidity_pct: HUMIDITY_RANGE_PCT,
            air_speed_m_s: AIR_SPEED_RANGE_M_S,
            metabolic_rate_w_m2: METABOLIC_RATE_RANGE_W_M2,
            iclo_m2k_w: ICLO_RANGE_M2K_W,
            cavs_c: CAVS_RANGE_C,
            height_cm: HEIGHT_RANGE_CM,
            weight_kg: WEIGHT_RANGE_KG,
        }
    }
}

impl InputLimits {
    /// Ranges enforced by the assessment form
    pub fn strict() -> Self {
        Self {
            air_temp_c: STRICT_AIR_TEMP_RANGE_C,
            globe_temp_c: STRICT_GLOBE_TEMP_RANGE_C,
            humidity_pct: STRICT_HUMIDITY_RANGE_PCT,
            metabolic_rate_w_m2: STRICT_METABOLIC_RATE_RANGE_W_M2,
            iclo_m2k_w: STRICT_ICLO_RANGE_M2K_W,
            weight_kg: STRICT_WEIGHT_RANGE_KG,
            ..Self::default()
        }
    }

    /// Override the dry-bulb / wet-bulb range
    pub fn with_air_temp(mut self, min: f64, max: f64) -> Self {
        self.air_temp_c = ordered(min, max);
        self
    }

    /// Override the globe temperature range
    pub fn with_globe_temp(mut self, min: f64, max: f64) -> Self {
        self.globe_temp_c = ordered(min, max);
        self
    }

    /// Override the air speed range (negative minimum is clamped to zero)
    pub fn with_air_speed(mut self, min: f64, max: f64) -> Self {
        let (min, max) = ordered(min, max);
        self.air_speed_m_s = (min.max(0.0), max);
        self
    }

    /// Override the metabolic rate range
    ///
    /// The reference WBGT takes `log10` of the rate, so a non-positive
    /// minimum is raised to the default minimum.
    pub fn with_metabolic_rate(mut self, min: f64, max: f64) -> Self {
        let (min, max) = ordered(min, max);
        let floor = METABOLIC_RATE_RANGE_W_M2.0;
        self.metabolic_rate_w_m2 = (if min > 0.0 { min } else { floor }, max);
        self
    }

    /// Override the clothing resistance range
    pub fn with_iclo(mut self, min: f64, max: f64) -> Self {
        let (min, max) = ordered(min, max);
        self.iclo_m2k_w = (min.max(0.0), max);
        self
    }
}

fn ordered(min: f64, max: f64) -> (f64, f64) {
    if min > max { (max, min) } else { (min, max) }
}
