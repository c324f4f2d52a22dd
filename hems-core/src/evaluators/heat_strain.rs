//! Heat Strain Index (ISC, Belding-Hatch as given in NTP 323)
//!
//! A simplified heat balance: the ratio of the evaporation the body needs to
//! the evaporation the environment allows, as a percentage.
//!
//! ```text
//! (K1, K2, K3) = (11.7, 7.3, 7.6)   Iclo = 0 (nude)
//!              = ( 7.0, 4.4, 4.6)   clothed
//!
//! R     = K2 · (tr − 35)
//! C     = K3 · v^0.6 · (ta − 35)
//! Emax  = K1 · v^0.6 · (56 − pa)
//! Ereq  = M + R + C
//! ISC   = 100 · Ereq / Emax
//! ```
//!
//! Above 100 % heat is stored; the worker may stay `2440 / (Ereq − Emax)`
//! minutes. At or below 100 % there is no limit.
//!
//! | ISC (%)       | Class        |
//! |---------------|--------------|
//! | ≤ 10          | Comfort      |
//! | 10 – 30       | Mild         |
//! | 30 – 40       | Alarm        |
//! | 40 – 80       | Severe       |
//! | 80 – < 100    | Very severe  |
//! | = 100         | Maximum      |
//! | > 100         | Critical     |
//!
//! Still air (`v = 0`) leaves no evaporative capacity and is reported as
//! [`EvaluationError::NoEvaporativeCapacity`] rather than an infinite index.

use crate::{
    constants::{
        physics::{
            ISC_AIR_SPEED_EXPONENT, ISC_CLOTHED_COEFFICIENTS, ISC_NUDE_COEFFICIENTS,
            ISC_SKIN_TEMP_C, ISC_SKIN_VAPOUR_PRESSURE, ISC_STORAGE_BUDGET,
        },
        thresholds::{ISC_ALARM_PCT, ISC_COMFORT_PCT, ISC_MAXIMUM_PCT, ISC_MILD_PCT, ISC_SEVERE_PCT},
    },
    errors::{EvaluationError, EvaluationResult},
    limits::InputLimits,
    time::ExposureTime,
    traits::Evaluator,
    units::{dubois_body_surface_area, to_surface_area_basis},
};

use super::utils;

/// Heat strain classification, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeatStrainClass {
    /// Thermal comfort
    Comfort,
    /// Mild to moderate strain
    Mild,
    /// Alarm
    Alarm,
    /// Severe strain
    Severe,
    /// Very severe strain
    VerySevere,
    /// Exactly at evaporative capacity
    Maximum,
    /// Heat is being stored
    Critical,
}

impl HeatStrainClass {
    /// Classify an index in percent, `None` for NaN
    pub fn from_index(isc_pct: f64) -> Option<Self> {
        if isc_pct.is_nan() {
            return None;
        }
        let class = if isc_pct <= ISC_COMFORT_PCT {
            HeatStrainClass::Comfort
        } else if isc_pct <= ISC_MILD_PCT {
            HeatStrainClass::Mild
        } else if isc_pct <= ISC_ALARM_PCT {
            HeatStrainClass::Alarm
        } else if isc_pct <= ISC_SEVERE_PCT {
            HeatStrainClass::Severe
        } else if isc_pct < ISC_MAXIMUM_PCT {
            HeatStrainClass::VerySevere
        } else if isc_pct == ISC_MAXIMUM_PCT {
            HeatStrainClass::Maximum
        } else {
            HeatStrainClass::Critical
        };
        Some(class)
    }

    /// Short English label
    pub const fn label(self) -> &'static str {
        match self {
            HeatStrainClass::Comfort => "Comfort",
            HeatStrainClass::Mild => "Mild",
            HeatStrainClass::Alarm => "Alarm",
            HeatStrainClass::Severe => "Severe",
            HeatStrainClass::VerySevere => "Very severe",
            HeatStrainClass::Maximum => "Maximum",
            HeatStrainClass::Critical => "Critical",
        }
    }

    /// Action to take at this level of strain
    pub const fn advice(self) -> &'static str {
        match self {
            HeatStrainClass::Comfort => "Thermal comfort, normal working conditions",
            HeatStrainClass::Mild => "Preventive monitoring recommended",
            HeatStrainClass::Alarm => "Start of the alarm zone, implement basic controls",
            HeatStrainClass::Severe => "Active controls required, monitor continuously",
            HeatStrainClass::VerySevere | HeatStrainClass::Maximum => {
                "Maximum permissible limit, take extreme caution"
            }
            HeatStrainClass::Critical => "Dangerous conditions, intervene immediately",
        }
    }
}

/// Input of the heat strain evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatStrainInput {
    /// Metabolic rate as entered (W/m²), rescaled internally
    pub metabolic_rate_w_m2: f64,
    /// Air speed (m/s)
    pub air_speed_m_s: f64,
    /// Globe temperature (°C)
    pub globe_c: f64,
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,
    /// Wet-bulb temperature (°C)
    pub wet_bulb_c: f64,
    /// Clothing thermal resistance (m²·K/W); zero selects the nude coefficients
    pub iclo: f64,
    /// Worker height (cm)
    pub height_cm: f64,
    /// Worker weight (kg)
    pub weight_kg: f64,
}

/// Heat strain index with its exposure limit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeatStrainResult {
    /// ISC (%), may exceed 100
    pub index_pct: f64,
    /// Classification of `index_pct`
    pub class: HeatStrainClass,
    /// Permissible exposure, unlimited at or below 100 %
    pub permissible_exposure: ExposureTime,
    /// Maximum evaporation Emax (W/m²)
    pub max_evaporation: f64,
    /// Required evaporation Ereq (W/m²)
    pub required_evaporation: f64,
    /// DuBois body surface area of the worker (m²)
    pub body_surface_area_m2: f64,
}

/// Heat strain index evaluator
#[derive(Debug, Clone, Default)]
pub struct HeatStrainEvaluator {
    limits: InputLimits,
}

impl HeatStrainEvaluator {
    /// Evaluator with custom input limits
    pub fn with_limits(limits: InputLimits) -> Self {
        Self { limits }
    }

    fn check(&self, input: &HeatStrainInput) -> EvaluationResult<()> {
        let limits = &self.limits;
        utils::check_range(
            "metabolic_rate_w_m2",
            input.metabolic_rate_w_m2,
            limits.metabolic_rate_w_m2,
        )?;
        utils::check_range("air_speed_m_s", input.air_speed_m_s, limits.air_speed_m_s)?;
        utils::check_range("globe_c", input.globe_c, limits.globe_temp_c)?;
        utils::check_range("dry_bulb_c", input.dry_bulb_c, limits.air_temp_c)?;
        utils::check_range("wet_bulb_c", input.wet_bulb_c, limits.air_temp_c)?;
        utils::check_range("iclo", input.iclo, limits.iclo_m2k_w)?;
        utils::check_range("height_cm", input.height_cm, limits.height_cm)?;
        utils::check_range("weight_kg", input.weight_kg, limits.weight_kg)?;
        Ok(())
    }
}

impl Evaluator for HeatStrainEvaluator {
    type Input = HeatStrainInput;
    type Output = HeatStrainResult;

    fn evaluate(&self, input: &HeatStrainInput) -> EvaluationResult<HeatStrainResult> {
        self.check(input)?;

        let (k1, k2, k3) = if input.iclo == 0.0 {
            ISC_NUDE_COEFFICIENTS
        } else {
            ISC_CLOTHED_COEFFICIENTS
        };

        let metabolic_rate = to_surface_area_basis(input.metabolic_rate_w_m2);
        let radiant_temp =
            utils::mean_radiant_temperature(input.globe_c, input.dry_bulb_c, input.air_speed_m_s)?;
        let vapour_pressure = utils::ambient_vapour_pressure(input.dry_bulb_c, input.wet_bulb_c);
        let wind = libm::pow(input.air_speed_m_s, ISC_AIR_SPEED_EXPONENT);

        let radiation = k2 * (radiant_temp - ISC_SKIN_TEMP_C);
        let convection = k3 * wind * (input.dry_bulb_c - ISC_SKIN_TEMP_C);
        let max_evaporation = utils::check_finite(
            "max_evaporation",
            k1 * wind * (ISC_SKIN_VAPOUR_PRESSURE - vapour_pressure),
        )?;
        let required_evaporation =
            utils::check_finite("required_evaporation", metabolic_rate + radiation + convection)?;

        if max_evaporation <= 0.0 {
            return Err(EvaluationError::NoEvaporativeCapacity {
                method: "ISC",
                value: max_evaporation,
            });
        }

        let index_pct = required_evaporation / max_evaporation * 100.0;
        let class = HeatStrainClass::from_index(index_pct)
            .ok_or(EvaluationError::InvalidValue { field: "index_pct" })?;
        let permissible_exposure = if index_pct > ISC_MAXIMUM_PCT {
            let storage_rate = required_evaporation - max_evaporation;
            ExposureTime::from_minutes(ISC_STORAGE_BUDGET / storage_rate)
                .ok_or(EvaluationError::InvalidValue { field: "permissible_exposure" })?
        } else {
            ExposureTime::UNLIMITED
        };

        log_debug!(
            "ISC tr {:.2} R {:.1} C {:.1} Emax {:.1} Ereq {:.1} -> {:.1}% {:?}",
            radiant_temp,
            radiation,
            convection,
            max_evaporation,
            required_evaporation,
            index_pct,
            class
        );

        Ok(HeatStrainResult {
            index_pct,
            class,
            permissible_exposure,
            max_evaporation,
            required_evaporation,
            body_surface_area_m2: dubois_body_surface_area(input.height_cm, input.weight_kg),
        })
    }

    fn name(&self) -> &'static str {
        "ISC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input() -> HeatStrainInput {
        HeatStrainInput {
            metabolic_rate_w_m2: 160.0,
            air_speed_m_s: 0.016,
            globe_c: 36.0,
            dry_bulb_c: 32.0,
            wet_bulb_c: 28.0,
            iclo: 0.11,
            height_cm: 170.0,
            weight_kg: 70.0,
        }
    }

    #[test]
    fn still_air_is_critical() {
        let result = HeatStrainEvaluator::default().evaluate(&input()).unwrap();
        assert_relative_eq!(result.max_evaporation, 30.735, epsilon = 1e-2);
        assert_relative_eq!(result.required_evaporation, 106.136, epsilon = 1e-2);
        assert_relative_eq!(result.index_pct, 345.32, epsilon = 1e-1);
        assert_eq!(result.class, HeatStrainClass::Critical);
        assert_relative_eq!(result.permissible_exposure.minutes(), 32.36, epsilon = 1e-2);
        assert_relative_eq!(result.body_surface_area_m2, 1.8097, epsilon = 1e-3);
    }

    #[test]
    fn nude_coefficients_when_unclothed() {
        let result = HeatStrainEvaluator::default()
            .evaluate(&HeatStrainInput {
                metabolic_rate_w_m2: 300.0,
                air_speed_m_s: 0.5,
                globe_c: 40.0,
                dry_bulb_c: 35.0,
                wet_bulb_c: 25.0,
                iclo: 0.0,
                ..input()
            })
            .unwrap();
        assert_relative_eq!(result.index_pct, 63.09, epsilon = 1e-1);
        assert_eq!(result.class, HeatStrainClass::Severe);
        assert!(result.permissible_exposure.is_unlimited());
    }

    #[test]
    fn breezy_light_clothing_is_mild() {
        let result = HeatStrainEvaluator::default()
            .evaluate(&HeatStrainInput {
                metabolic_rate_w_m2: 200.0,
                air_speed_m_s: 1.0,
                globe_c: 30.0,
                dry_bulb_c: 28.0,
                wet_bulb_c: 20.0,
                iclo: 0.08,
                ..input()
            })
            .unwrap();
        assert_relative_eq!(result.index_pct, 21.82, epsilon = 1e-1);
        assert_eq!(result.class, HeatStrainClass::Mild);
    }

    #[test]
    fn class_boundaries() {
        let class = |isc| HeatStrainClass::from_index(isc).unwrap();
        assert_eq!(class(10.0), HeatStrainClass::Comfort);
        assert_eq!(class(10.0001), HeatStrainClass::Mild);
        assert_eq!(class(30.0), HeatStrainClass::Mild);
        assert_eq!(class(40.0), HeatStrainClass::Alarm);
        assert_eq!(class(80.0), HeatStrainClass::Severe);
        assert_eq!(class(99.99), HeatStrainClass::VerySevere);
        assert_eq!(class(100.0), HeatStrainClass::Maximum);
        assert_eq!(class(100.0001), HeatStrainClass::Critical);
        assert_eq!(HeatStrainClass::from_index(f64::NAN), None);
    }

    #[test]
    fn advice_per_class() {
        use HeatStrainClass::*;
        assert_eq!(Comfort.advice(), "Thermal comfort, normal working conditions");
        assert_eq!(Mild.advice(), "Preventive monitoring recommended");
        assert_eq!(Alarm.advice(), "Start of the alarm zone, implement basic controls");
        assert_eq!(Severe.advice(), "Active controls required, monitor continuously");
        assert_eq!(VerySevere.advice(), "Maximum permissible limit, take extreme caution");
        assert_eq!(Maximum.advice(), VerySevere.advice());
        assert_eq!(Critical.advice(), "Dangerous conditions, intervene immediately");
    }

    #[test]
    fn cold_globe_in_strong_wind_is_rejected() {
        let err = HeatStrainEvaluator::with_limits(InputLimits::strict())
            .evaluate(&HeatStrainInput {
                dry_bulb_c: 60.0,
                globe_c: 15.0,
                wet_bulb_c: 20.0,
                air_speed_m_s: 10.0,
                ..input()
            })
            .unwrap_err();
        assert_eq!(err, EvaluationError::InvalidValue { field: "mean_radiant_temperature" });
    }

    #[test]
    fn still_air_has_no_capacity() {
        let err = HeatStrainEvaluator::default()
            .evaluate(&HeatStrainInput { air_speed_m_s: 0.0, ..input() })
            .unwrap_err();
        assert!(matches!(err, EvaluationError::NoEvaporativeCapacity { method: "ISC", .. }));
    }
}
