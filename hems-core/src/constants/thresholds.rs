//! Classification Thresholds and Physiological Limits
//!
//! Band edges of the four indices and the acclimatization-dependent limits of
//! the required sweat rate method.

// ===== HEAT INDEX (Rothfusz / NWS) =====

/// Preliminary index at or above which the Rothfusz regression replaces the
/// linear estimate (°F).
pub const HEAT_INDEX_REGRESSION_THRESHOLD_F: f64 = 80.0;

/// Lower edge of risk level II (°F).
pub const HEAT_INDEX_LEVEL_II_F: f64 = 91.0;

/// Lower edge of risk level III (°F).
pub const HEAT_INDEX_LEVEL_III_F: f64 = 103.0;

/// Lower edge of risk level IV (°F).
pub const HEAT_INDEX_LEVEL_IV_F: f64 = 125.0;

/// Dry-air correction applies below this relative humidity (%).
pub const HEAT_INDEX_DRY_RH_PCT: f64 = 13.0;

/// Temperature window of the dry-air correction (°F, exclusive).
pub const HEAT_INDEX_DRY_WINDOW_F: (f64, f64) = (80.0, 112.0);

/// Humid-air correction applies above this relative humidity (%).
pub const HEAT_INDEX_HUMID_RH_PCT: f64 = 85.0;

/// Temperature window of the humid-air correction (°F, exclusive).
pub const HEAT_INDEX_HUMID_WINDOW_F: (f64, f64) = (80.0, 87.0);

// ===== WBGT (ISO 7243) =====

/// CAVS added when the ensemble includes a hood (°C).
pub const HOOD_CAVS_INCREMENT_C: f64 = 1.0;

/// Reference WBGT intercept and log-slope for acclimatized workers.
pub const WBGT_REF_ACCLIMATIZED: (f64, f64) = (56.7, 11.5);

/// Reference WBGT intercept and log-slope for non-acclimatized workers.
pub const WBGT_REF_NOT_ACCLIMATIZED: (f64, f64) = (59.9, 14.1);

// ===== REQUIRED SWEAT RATE (ISO 7933) =====

/// Maximum skin wettedness, acclimatized.
pub const W_MAX_ACCLIMATIZED: f64 = 1.0;
/// Maximum skin wettedness, not acclimatized.
pub const W_MAX_NOT_ACCLIMATIZED: f64 = 0.85;

/// Maximum sweat rate, acclimatized (W/m²).
pub const SW_MAX_ACCLIMATIZED: f64 = 500.0;
/// Maximum sweat rate, not acclimatized (W/m²).
pub const SW_MAX_NOT_ACCLIMATIZED: f64 = 400.0;

/// Heat storage alarm limit (W·h/m²).
pub const Q_MAX_ALARM: f64 = 50.0;
/// Heat storage danger limit (W·h/m²).
pub const Q_MAX_DANGER: f64 = 60.0;

/// Water loss alarm limit, acclimatized (W·h/m²).
pub const D_MAX_ALARM_ACCLIMATIZED: f64 = 1500.0;
/// Water loss danger limit, acclimatized (W·h/m²).
pub const D_MAX_DANGER_ACCLIMATIZED: f64 = 2000.0;
/// Water loss alarm limit, not acclimatized (W·h/m²).
pub const D_MAX_ALARM_NOT_ACCLIMATIZED: f64 = 1000.0;
/// Water loss danger limit, not acclimatized (W·h/m²).
pub const D_MAX_DANGER_NOT_ACCLIMATIZED: f64 = 1250.0;

/// Alarm-level limits shorter than this raise an alert (min).
pub const SWREQ_ALARM_ALERT_MIN: f64 = 120.0;

/// Danger-level limits shorter than this raise an alert (min).
pub const SWREQ_DANGER_ALERT_MIN: f64 = 240.0;

// ===== HEAT STRAIN INDEX (NTP 323) =====

/// Upper edge of thermal comfort (%).
pub const ISC_COMFORT_PCT: f64 = 10.0;
/// Upper edge of mild strain (%).
pub const ISC_MILD_PCT: f64 = 30.0;
/// Upper edge of the alarm zone (%).
pub const ISC_ALARM_PCT: f64 = 40.0;
/// Upper edge of severe strain (%).
pub const ISC_SEVERE_PCT: f64 = 80.0;
/// Maximum permissible strain (%).
pub const ISC_MAXIMUM_PCT: f64 = 100.0;

/// The heat strain index is only offered below this clothing resistance (m²·K/W).
pub const ISC_MAX_ICLO: f64 = 0.6;
