//! Plausible Input Ranges
//!
//! `STRICT_*` ranges are the ones the assessment form enforces. The default
//! ranges are wider and exclude physically implausible inputs, such as a
//! negative air speed or a non-positive metabolic rate.

/// Default air temperature range (°C).
pub const AIR_TEMP_RANGE_C: (f64, f64) = (-10.0, 80.0);

/// Default globe temperature range (°C).
pub const GLOBE_TEMP_RANGE_C: (f64, f64) = (-10.0, 120.0);

/// Relative humidity range (%).
pub const HUMIDITY_RANGE_PCT: (f64, f64) = (0.0, 100.0);

/// Air speed range (m/s).
pub const AIR_SPEED_RANGE_M_S: (f64, f64) = (0.0, 10.0);

/// Default metabolic rate range (W/m²). Strictly positive for `log10`.
pub const METABOLIC_RATE_RANGE_W_M2: (f64, f64) = (1.0, 1000.0);

/// Default clothing resistance range (m²·K/W). Wide enough for ensembles
/// past the heat strain index limit, which are skipped rather than rejected.
pub const ICLO_RANGE_M2K_W: (f64, f64) = (0.0, 1.0);

/// CAVS correction range (°C). Vapour-barrier coveralls reach +11, a hood adds 1.
pub const CAVS_RANGE_C: (f64, f64) = (-1.0, 20.0);

/// Worker height range (cm).
pub const HEIGHT_RANGE_CM: (f64, f64) = (0.0, 300.0);

/// Worker weight range (kg).
pub const WEIGHT_RANGE_KG: (f64, f64) = (0.0, 400.0);

// ===== STRICT (assessment form) =====

/// Dry-bulb and wet-bulb temperature (°C).
pub const STRICT_AIR_TEMP_RANGE_C: (f64, f64) = (15.0, 60.0);

/// Globe temperature (°C).
pub const STRICT_GLOBE_TEMP_RANGE_C: (f64, f64) = (15.0, 80.0);

/// Relative humidity (%).
pub const STRICT_HUMIDITY_RANGE_PCT: (f64, f64) = (10.0, 100.0);

/// Clothing resistance (m²·K/W).
pub const STRICT_ICLO_RANGE_M2K_W: (f64, f64) = (0.0, 0.5);

/// Metabolic rate (W/m²).
pub const STRICT_METABOLIC_RATE_RANGE_W_M2: (f64, f64) = (100.0, 600.0);

/// Worker weight (kg).
pub const STRICT_WEIGHT_RANGE_KG: (f64, f64) = (50.0, 150.0);
