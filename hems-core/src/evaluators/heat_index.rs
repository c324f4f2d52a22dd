//! Heat Index (apparent temperature)
//!
//! ## Physics Background
//!
//! The Heat Index folds humidity into temperature: humid air slows sweat
//! evaporation, so the body "feels" a higher temperature than the
//! thermometer shows. It is computed in Fahrenheit.
//!
//! ### Algorithm (NWS / Rothfusz)
//!
//! ```text
//! HI₀ = 0.5 · (T + 61 + 1.2·(T − 68) + 0.094·RH)         linear estimate
//!
//! if HI₀ ≥ 80 °F:
//!   HI = Rothfusz regression (9 terms in T and RH)
//!   if RH < 13 % and 80 < T < 112:  HI −= (13 − RH)/4 · √((17 − |T − 95|)/17)
//!   if RH > 85 % and 80 < T < 87:   HI += (RH − 85)/10 · (87 − T)/5
//! else:
//!   HI = HI₀
//! ```
//!
//! The two corrections are evaluated independently. Their humidity guards are
//! disjoint, so at most one of them ever applies.
//!
//! ### Risk Levels
//!
//! | Heat Index (°F) | Level |
//! |-----------------|-------|
//! | < 91            | I     |
//! | 91 – 103        | II    |
//! | 103 – 125       | III   |
//! | ≥ 125           | IV    |
//!
//! Work under direct sun raises the level used to pick protective measures by
//! one tier (never beyond IV). The effect description always follows the
//! unescalated level.

use crate::{
    constants::thresholds::{
        HEAT_INDEX_DRY_RH_PCT, HEAT_INDEX_DRY_WINDOW_F, HEAT_INDEX_HUMID_RH_PCT,
        HEAT_INDEX_HUMID_WINDOW_F, HEAT_INDEX_LEVEL_III_F, HEAT_INDEX_LEVEL_II_F,
        HEAT_INDEX_LEVEL_IV_F, HEAT_INDEX_REGRESSION_THRESHOLD_F,
    },
    errors::EvaluationResult,
    limits::InputLimits,
    traits::Evaluator,
    units::celsius_to_fahrenheit,
};

use super::utils;

/// Heat Index risk level, ordered from lowest to highest risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RiskLevel {
    /// Caution
    I,
    /// Extreme caution
    II,
    /// Danger
    III,
    /// Extreme danger
    IV,
}

impl RiskLevel {
    /// Classify a heat index in °F
    pub fn from_index(index_f: f64) -> Self {
        if index_f < HEAT_INDEX_LEVEL_II_F {
            RiskLevel::I
        } else if index_f < HEAT_INDEX_LEVEL_III_F {
            RiskLevel::II
        } else if index_f < HEAT_INDEX_LEVEL_IV_F {
            RiskLevel::III
        } else {
            RiskLevel::IV
        }
    }

    /// One tier higher, saturating at IV
    pub const fn escalated(self) -> Self {
        match self {
            RiskLevel::I => RiskLevel::II,
            RiskLevel::II => RiskLevel::III,
            RiskLevel::III | RiskLevel::IV => RiskLevel::IV,
        }
    }

    /// Expected health effect at this level
    pub const fn effect(self) -> &'static str {
        match self {
            RiskLevel::I => "Fatigue is possible with prolonged exposure and physical activity.",
            RiskLevel::II => {
                "Sunstroke, heat cramps and heat exhaustion are possible with prolonged exposure and physical activity."
            }
            RiskLevel::III => {
                "Sunstroke, heat cramps and heat exhaustion are likely with prolonged exposure and physical activity."
            }
            RiskLevel::IV => "High likelihood of sunstroke and heat stroke.",
        }
    }

    /// Protective measures for this level, in priority order
    pub const fn measures(self) -> &'static [&'static str] {
        match self {
            RiskLevel::I | RiskLevel::II => BASE_MEASURES,
            RiskLevel::III => LEVEL_III_MEASURES,
            RiskLevel::IV => LEVEL_IV_MEASURES,
        }
    }
}

const DRINKING_WATER: &str = "Ensure drinking water is available throughout the shift.";
const SHADE: &str = "Provide shaded areas (temporary or permanent) for rest in open fields.";
const HEADWEAR: &str = "Provide wide-brimmed hats or caps with neck cover, long sleeves, and sunscreen where possible.";
const TRAINING: &str = "Train the workers.";
const HEAVY_CLOTHING: &str = "When workers must wear heavy garments (CLO +1, +2), layers or non-breathable/impermeable uniforms, apply the level III measures.";
const ACCLIMATIZE: &str = "New or returning workers must be acclimatized.";
const DESIGNATED_PERSON: &str = "Designate a person trained in the clinical signs of heat strain who can report them to whoever has the authority, and to the occupational health officer, to modify work activities and the work/rest schedule as required.";
const WORK_REST_SCHEDULE: &str = "Establish and enforce work/rest schedules.";
const INFORM_SCHEDULE: &str = "Inform the workers of the established schedule.";
const DIRECT_SUN: &str = "If the work is performed under direct sun, apply the specific level IV measures for that condition.";
const REHYDRATION: &str = "Supply rehydration drinks as set by the Ministry of Health.";

const BASE_MEASURES: &[&str] = &[
    DRINKING_WATER,
    SHADE,
    HEADWEAR,
    TRAINING,
    HEAVY_CLOTHING,
    ACCLIMATIZE,
    DESIGNATED_PERSON,
];

const LEVEL_III_MEASURES: &[&str] = &[
    DRINKING_WATER,
    SHADE,
    HEADWEAR,
    TRAINING,
    ACCLIMATIZE,
    DESIGNATED_PERSON,
    WORK_REST_SCHEDULE,
    INFORM_SCHEDULE,
    DIRECT_SUN,
];

const LEVEL_IV_MEASURES: &[&str] = &[
    DRINKING_WATER,
    REHYDRATION,
    SHADE,
    HEADWEAR,
    TRAINING,
    ACCLIMATIZE,
    DESIGNATED_PERSON,
    WORK_REST_SCHEDULE,
    INFORM_SCHEDULE,
];

/// Input of the Heat Index evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatIndexInput {
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,
    /// Relative humidity (%)
    pub relative_humidity_pct: f64,
    /// Work under direct sun
    pub solar_exposed: bool,
}

/// Heat Index with its risk classification and advice
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeatIndexResult {
    /// Apparent temperature (°F)
    pub index_f: f64,
    /// Risk level of the index itself
    pub level: RiskLevel,
    /// Expected health effect at `level`
    pub effect: &'static str,
    /// Level used to pick the measures (escalated under sun)
    pub measures_level: RiskLevel,
    /// Recommended protective measures for `measures_level`
    pub measures: &'static [&'static str],
}

/// Heat Index evaluator
#[derive(Debug, Clone, Default)]
pub struct HeatIndexEvaluator {
    limits: InputLimits,
}

impl HeatIndexEvaluator {
    /// Evaluator with custom input limits
    pub fn with_limits(limits: InputLimits) -> Self {
        Self { limits }
    }

    /// Heat Index in °F, without classification
    pub fn index_fahrenheit(dry_bulb_c: f64, relative_humidity_pct: f64) -> f64 {
        let t = celsius_to_fahrenheit(dry_bulb_c);
        let rh = relative_humidity_pct;

        let preliminary = preliminary_index(t, rh);
        if preliminary < HEAT_INDEX_REGRESSION_THRESHOLD_F {
            return preliminary;
        }

        let mut index = rothfusz(t, rh);
        if rh < HEAT_INDEX_DRY_RH_PCT && in_window(t, HEAT_INDEX_DRY_WINDOW_F) {
            index -= ((HEAT_INDEX_DRY_RH_PCT - rh) / 4.0)
                * libm::sqrt((17.0 - libm::fabs(t - 95.0)) / 17.0);
        }
        if rh > HEAT_INDEX_HUMID_RH_PCT && in_window(t, HEAT_INDEX_HUMID_WINDOW_F) {
            index += ((rh - HEAT_INDEX_HUMID_RH_PCT) / 10.0) * ((87.0 - t) / 5.0);
        }
        index
    }
}

impl Evaluator for HeatIndexEvaluator {
    type Input = HeatIndexInput;
    type Output = HeatIndexResult;

    fn evaluate(&self, input: &HeatIndexInput) -> EvaluationResult<HeatIndexResult> {
        let dry_bulb = utils::check_range("dry_bulb_c", input.dry_bulb_c, self.limits.air_temp_c)?;
        let humidity = utils::check_range(
            "relative_humidity_pct",
            input.relative_humidity_pct,
            self.limits.humidity_pct,
        )?;

        let index_f = Self::index_fahrenheit(dry_bulb, humidity);
        let level = RiskLevel::from_index(index_f);
        let measures_level = if input.solar_exposed { level.escalated() } else { level };

        log_debug!(
            "heat index {:.1} °F -> level {:?} (measures {:?})",
            index_f,
            level,
            measures_level
        );

        Ok(HeatIndexResult {
            index_f,
            level,
            effect: level.effect(),
            measures_level,
            measures: measures_level.measures(),
        })
    }

    fn name(&self) -> &'static str {
        "Heat Index"
    }
}

fn preliminary_index(t: f64, rh: f64) -> f64 {
    0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094)
}

fn rothfusz(t: f64, rh: f64) -> f64 {
    -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh
}

fn in_window(t: f64, (low, high): (f64, f64)) -> bool {
    low < t && t < high
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluationError;

    fn evaluate(t: f64, rh: f64, sun: bool) -> HeatIndexResult {
        HeatIndexEvaluator::default()
            .evaluate(&HeatIndexInput {
                dry_bulb_c: t,
                relative_humidity_pct: rh,
                solar_exposed: sun,
            })
            .unwrap()
    }

    #[test]
    fn mild_day_uses_linear_estimate() {
        // 20 °C = 68 °F, 50 % -> 0.5·(68 + 61 + 0 + 4.7)
        let result = evaluate(20.0, 50.0, false);
        assert!((result.index_f - 66.85).abs() < 1e-9);
        assert_eq!(result.level, RiskLevel::I);
    }

    #[test]
    fn hot_humid_day_uses_regression() {
        let result = evaluate(32.0, 50.0, false);
        assert!((result.index_f - 93.8546).abs() < 1e-3);
        assert_eq!(result.level, RiskLevel::II);
        assert_eq!(result.measures_level, RiskLevel::II);
    }

    #[test]
    fn dry_air_correction_lowers_index() {
        // 40 °C = 104 °F at 10 % RH falls in the dry correction window
        let corrected = HeatIndexEvaluator::index_fahrenheit(40.0, 10.0);
        let raw = rothfusz(104.0, 10.0);
        assert!(corrected < raw);
        assert!((corrected - 98.0696).abs() < 1e-3);
    }

    #[test]
    fn humid_air_correction_raises_index() {
        // 29 °C = 84.2 °F at 90 % RH falls in the humid correction window
        let corrected = HeatIndexEvaluator::index_fahrenheit(29.0, 90.0);
        let raw = rothfusz(celsius_to_fahrenheit(29.0), 90.0);
        assert!(corrected > raw);
        assert!((corrected - 99.0161).abs() < 1e-3);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(RiskLevel::from_index(90.999), RiskLevel::I);
        assert_eq!(RiskLevel::from_index(91.0), RiskLevel::II);
        assert_eq!(RiskLevel::from_index(103.0), RiskLevel::III);
        assert_eq!(RiskLevel::from_index(124.999), RiskLevel::III);
        assert_eq!(RiskLevel::from_index(125.0), RiskLevel::IV);
    }

    #[test]
    fn sun_escalates_measures_not_effect() {
        let shade = evaluate(36.0, 50.0, false);
        let sun = evaluate(36.0, 50.0, true);
        assert_eq!(shade.level, RiskLevel::III);
        assert_eq!(sun.level, RiskLevel::III);
        assert_eq!(sun.measures_level, RiskLevel::IV);
        assert_eq!(sun.effect, shade.effect);
        assert_eq!(sun.measures, RiskLevel::IV.measures());
    }

    #[test]
    fn level_four_does_not_escalate() {
        let result = evaluate(45.0, 60.0, true);
        assert_eq!(result.level, RiskLevel::IV);
        assert_eq!(result.measures_level, RiskLevel::IV);
    }

    #[test]
    fn measures_lists() {
        assert_eq!(RiskLevel::I.measures().len(), 7);
        assert_eq!(RiskLevel::III.measures().len(), 9);
        assert!(RiskLevel::IV.measures().contains(&REHYDRATION));
        assert!(!RiskLevel::III.measures().contains(&REHYDRATION));
    }

    #[test]
    fn rejects_impossible_humidity() {
        let err = HeatIndexEvaluator::default()
            .evaluate(&HeatIndexInput {
                dry_bulb_c: 30.0,
                relative_humidity_pct: 120.0,
                solar_exposed: false,
            })
            .unwrap_err();
        assert!(matches!(err, EvaluationError::OutOfRange { field: "relative_humidity_pct", .. }));
    }
}
