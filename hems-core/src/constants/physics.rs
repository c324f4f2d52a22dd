//! Physical Constants for Heat Balance Calculations
//!
//! Coefficients of the mean radiant temperature, vapour pressure and skin
//! temperature regressions used by the required sweat rate and heat strain
//! methods. Values follow ISO 7933 / ISO 7726 as adopted by the national
//! heat stress regulation, including its rounded Kelvin offset.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Stefan-Boltzmann constant (W/(m²·K⁴)).
///
/// Source: CODATA, rounded as in ISO 7933
pub const STEFAN_BOLTZMANN_W_PER_M2_K4: f64 = 5.67e-8;

/// Emissivity of human skin (dimensionless).
///
/// Source: ISO 7933
pub const SKIN_EMISSIVITY: f64 = 0.97;

/// Celsius to Kelvin offset used by the radiant temperature formulas.
///
/// The heat stress standards use 273 rather than 273.15; keeping the
/// rounded value reproduces their published tables.
pub const KELVIN_OFFSET: f64 = 273.0;

// ===== UNIT CONVERSIONS =====

/// Divisor that rescales the entered metabolic rate onto the body-surface basis
/// used by the heat balance equations.
///
/// Both heat-balance methods apply it; see [`crate::units::to_surface_area_basis`].
pub const METABOLIC_SURFACE_AREA_FACTOR: f64 = 1.7;

/// Fahrenheit degrees per Celsius degree.
pub const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;

/// Fahrenheit reading at 0 °C.
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

// ===== MEAN RADIANT TEMPERATURE (ISO 7726, 150 mm globe) =====

/// Air speed separating natural from forced convection at the globe (m/s).
pub const GLOBE_FORCED_CONVECTION_SPEED_M_S: f64 = 0.15;

/// Forced-convection globe coefficient.
pub const GLOBE_FORCED_COEFFICIENT: f64 = 2.5e8;

/// Natural-convection globe coefficient.
pub const GLOBE_NATURAL_COEFFICIENT: f64 = 0.42e8;

/// Air speed exponent of the forced-convection globe formula.
pub const GLOBE_SPEED_EXPONENT: f64 = 0.6;

// ===== VAPOUR PRESSURE (Antoine form, kPa) =====

/// Antoine constant A for `exp(A - B / (t + C))`.
pub const ANTOINE_A: f64 = 16.653;

/// Antoine constant B (K).
pub const ANTOINE_B: f64 = 4030.18;

/// Antoine constant C (°C).
pub const ANTOINE_C: f64 = 235.0;

/// Psychrometer coefficient (kPa/°C) for a ventilated wet bulb.
pub const PSYCHROMETER_COEFFICIENT_KPA_PER_C: f64 = 0.0667;

// ===== MEAN SKIN TEMPERATURE REGRESSION =====

/// Intercept (°C).
pub const SKIN_TEMP_INTERCEPT_C: f64 = 30.0;
/// Air temperature weight.
pub const SKIN_TEMP_AIR_WEIGHT: f64 = 0.0930;
/// Mean radiant temperature weight.
pub const SKIN_TEMP_RADIANT_WEIGHT: f64 = 0.045;
/// Air speed weight (°C per m/s).
pub const SKIN_TEMP_AIR_SPEED_WEIGHT: f64 = 0.571;
/// Ambient vapour pressure weight (°C per kPa).
pub const SKIN_TEMP_VAPOUR_WEIGHT: f64 = 0.2540;
/// Metabolic rate weight (°C per W/m²).
pub const SKIN_TEMP_METABOLIC_WEIGHT: f64 = 0.00128;
/// Clothing resistance weight (°C per m²·K/W).
pub const SKIN_TEMP_CLOTHING_WEIGHT: f64 = 3.570;

// ===== CONVECTION AND CLOTHING =====

/// Metabolic rate at rest used by the relative air speed correction (W/m²).
pub const RESTING_METABOLIC_RATE_W_M2: f64 = 58.0;

/// Relative air speed gain per W/m² of activity above rest.
pub const ACTIVITY_AIR_SPEED_GAIN: f64 = 0.0052;

/// Linear convective coefficient intercept (W/(m²·K)).
pub const HC_LINEAR_INTERCEPT: f64 = 3.5;

/// Linear convective coefficient slope (W/(m²·K) per m/s).
pub const HC_LINEAR_SLOPE: f64 = 5.2;

/// Power-law convective coefficient factor for forced ventilation.
pub const HC_POWER_FACTOR: f64 = 8.7;

/// Relative air speed above which forced ventilation uses the power law (m/s).
pub const HC_POWER_LAW_SPEED_M_S: f64 = 1.0;

/// Lewis relation: evaporative coefficient per convective coefficient (K/kPa).
pub const LEWIS_RELATION_K_PER_KPA: f64 = 16.7;

/// Clothing area factor slope (per m²·K/W).
pub const CLOTHING_AREA_FACTOR_SLOPE: f64 = 1.970;

/// Evaporative reduction factor coefficient.
pub const EVAPORATIVE_REDUCTION_COEFFICIENT: f64 = 2.22;

// ===== RESPIRATORY EXCHANGE =====

/// Respiratory convective loss coefficient.
pub const RESPIRATORY_CONVECTION_COEFFICIENT: f64 = 0.0014;

/// Respiratory evaporative loss coefficient.
pub const RESPIRATORY_EVAPORATION_COEFFICIENT: f64 = 0.0173;

/// Expired air temperature (°C).
pub const EXPIRED_AIR_TEMP_C: f64 = 35.0;

/// Expired air vapour pressure (kPa).
pub const EXPIRED_AIR_VAPOUR_KPA: f64 = 5.624;

// ===== HEAT STRAIN INDEX (Belding & Hatch, NTP 18) =====

/// Reference skin temperature of the heat strain index (°C).
pub const ISC_SKIN_TEMP_C: f64 = 35.0;

/// Skin vapour pressure assumed by the heat strain index (in the units of
/// the ambient vapour pressure it is paired with).
pub const ISC_SKIN_VAPOUR_PRESSURE: f64 = 56.0;

/// Air speed exponent of the heat strain index exchange terms.
pub const ISC_AIR_SPEED_EXPONENT: f64 = 0.6;

/// Clothed exchange coefficients (K1 evaporation, K2 radiation, K3 convection).
pub const ISC_CLOTHED_COEFFICIENTS: (f64, f64, f64) = (7.0, 4.4, 4.6);

/// Nude exchange coefficients (K1 evaporation, K2 radiation, K3 convection).
pub const ISC_NUDE_COEFFICIENTS: (f64, f64, f64) = (11.7, 7.3, 7.6);

/// Heat storage budget of the permissible exposure time (W·min/m²).
pub const ISC_STORAGE_BUDGET: f64 = 2440.0;

// ===== BODY SURFACE AREA (DuBois) =====

/// DuBois scale factor (m² per kg^0.425 cm^0.725).
pub const DUBOIS_FACTOR: f64 = 0.007184;
/// DuBois weight exponent.
pub const DUBOIS_WEIGHT_EXPONENT: f64 = 0.425;
/// DuBois height exponent.
pub const DUBOIS_HEIGHT_EXPONENT: f64 = 0.725;
