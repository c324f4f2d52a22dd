//! Shared Evaluation Utilities
//!
//! ## Overview
//!
//! Input checks and the two psychrometric building blocks used by both heat
//! balance methods. Keeping them here guarantees the required sweat rate and
//! the heat strain index see the same radiant temperature and vapour
//! pressure for the same reading.
//!
//! ## Mean Radiant Temperature (ISO 7726)
//!
//! A 150 mm black globe settles where radiant gain equals convective loss.
//! Solving that balance for the radiant temperature gives, in Kelvin:
//!
//! ```text
//! forced  (v > 0.15 m/s):  Tr⁴ = Tg⁴ + 2.5e8  · v^0.6        · (tg − ta)
//! natural (v ≤ 0.15 m/s):  Tr⁴ = Tg⁴ + 0.42e8 · |tg − ta|^¼  · (tg − ta)
//! ```
//!
//! The natural branch uses the magnitude of the globe-air difference under
//! the quartic root so a globe cooler than the air (shaded, night work)
//! yields a radiant temperature below air temperature instead of NaN.
//!
//! Under strong forced convection a globe far below the air temperature can
//! drive the right-hand side negative. No radiant temperature satisfies the
//! balance then, and the reading is rejected with
//! [`EvaluationError::InvalidValue`] on `mean_radiant_temperature`.
//!
//! ## Vapour Pressure
//!
//! Saturation pressure follows the Antoine form `exp(16.653 − 4030.18/(t+235))`
//! in kPa. The ambient partial pressure is recovered from a ventilated wet
//! bulb with the psychrometer equation `pa = psat(tw) − 0.0667·(ta − tw)`.

use crate::{
    constants::physics::{
        ANTOINE_A, ANTOINE_B, ANTOINE_C, GLOBE_FORCED_COEFFICIENT,
        GLOBE_FORCED_CONVECTION_SPEED_M_S, GLOBE_NATURAL_COEFFICIENT, GLOBE_SPEED_EXPONENT,
        KELVIN_OFFSET, PSYCHROMETER_COEFFICIENT_KPA_PER_C,
    },
    errors::{EvaluationError, EvaluationResult},
    traits::Validatable,
};

/// Reject NaN and infinite values
pub fn check_finite(field: &'static str, value: f64) -> EvaluationResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(EvaluationError::InvalidValue { field })
    }
}

/// Check that a finite value lies inside `range` (inclusive)
pub fn check_range(field: &'static str, value: f64, range: (f64, f64)) -> EvaluationResult<f64> {
    let value = check_finite(field, value)?;
    let (min, max) = range;
    if value < min || value > max {
        Err(EvaluationError::OutOfRange { field, value, min, max })
    } else {
        Ok(value)
    }
}

/// Mean radiant temperature (°C) from globe and air temperature
pub fn mean_radiant_temperature(
    globe_c: f64,
    air_c: f64,
    air_speed_m_s: f64,
) -> EvaluationResult<f64> {
    let globe_k4 = libm::pow(globe_c + KELVIN_OFFSET, 4.0);
    let delta = globe_c - air_c;
    let exchange = if air_speed_m_s > GLOBE_FORCED_CONVECTION_SPEED_M_S {
        GLOBE_FORCED_COEFFICIENT * libm::pow(air_speed_m_s, GLOBE_SPEED_EXPONENT) * delta
    } else {
        GLOBE_NATURAL_COEFFICIENT * libm::pow(libm::fabs(delta), 0.25) * delta
    };
    let radiant_k4 = globe_k4 + exchange;
    if radiant_k4.is_nan() || radiant_k4 <= 0.0 {
        return Err(EvaluationError::InvalidValue { field: "mean_radiant_temperature" });
    }
    check_finite("mean_radiant_temperature", libm::pow(radiant_k4, 0.25) - KELVIN_OFFSET)
}

/// Saturation vapour pressure (kPa) at `temp_c`
pub fn saturation_vapour_pressure(temp_c: f64) -> f64 {
    libm::exp(ANTOINE_A - ANTOINE_B / (temp_c + ANTOINE_C))
}

/// Ambient partial vapour pressure (kPa) from dry-bulb and wet-bulb readings
pub fn ambient_vapour_pressure(dry_bulb_c: f64, wet_bulb_c: f64) -> f64 {
    saturation_vapour_pressure(wet_bulb_c)
        - PSYCHROMETER_COEFFICIENT_KPA_PER_C * (dry_bulb_c - wet_bulb_c)
}
