//! Unit conversions shared by the evaluators

use crate::constants::physics::{
    DUBOIS_FACTOR, DUBOIS_HEIGHT_EXPONENT, DUBOIS_WEIGHT_EXPONENT, FAHRENHEIT_FREEZING_POINT,
    FAHRENHEIT_PER_CELSIUS, METABOLIC_SURFACE_AREA_FACTOR,
};

/// Convert a Celsius temperature to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING_POINT
}

/// Rescale an entered metabolic rate onto the body-surface basis of the
/// heat balance equations
///
/// Used by both the required sweat rate and the heat strain index so the
/// two methods can never disagree on the conversion.
pub fn to_surface_area_basis(metabolic_rate: f64) -> f64 {
    metabolic_rate / METABOLIC_SURFACE_AREA_FACTOR
}

/// DuBois body surface area (m²) from height (cm) and weight (kg)
pub fn dubois_body_surface_area(height_cm: f64, weight_kg: f64) -> f64 {
    DUBOIS_FACTOR
        * libm::pow(weight_kg, DUBOIS_WEIGHT_EXPONENT)
        * libm::pow(height_cm, DUBOIS_HEIGHT_EXPONENT)
}
