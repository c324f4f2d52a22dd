//! Wet-Bulb Globe Temperature (ISO 7243)
//!
//! ## Index
//!
//! ```text
//! indoor / no sun:  WBGT = 0.7·tnw + 0.3·tg
//! outdoor with sun: WBGT = 0.7·tnw + 0.2·tg + 0.1·ta
//!
//! effective = WBGT + CAVS                     (clothing adjustment value)
//! reference = 56.7 − 11.5·log10(M)            acclimatized
//!           = 59.9 − 14.1·log10(M)            not acclimatized
//! ```
//!
//! The environment is classed as heat **stress** when the effective WBGT is
//! strictly above the reference, and as **discomfort** otherwise. Only a
//! stress classification warrants the heat balance methods.
//!
//! ## Usage Constraint
//!
//! The reference curves assume sustained exposures of up to 8 hours averaged
//! over intervals of at least one hour. That is a sampling rule for the
//! caller; nothing here can check it.

use crate::{
    constants::thresholds::{
        HOOD_CAVS_INCREMENT_C, WBGT_REF_ACCLIMATIZED, WBGT_REF_NOT_ACCLIMATIZED,
    },
    errors::EvaluationResult,
    limits::InputLimits,
    traits::Evaluator,
    types::Acclimatization,
};

use super::utils;

/// Thermal state implied by the WBGT comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WbgtState {
    /// Effective WBGT above the reference: heat stress
    Stress,
    /// Effective WBGT at or below the reference: thermal discomfort at most
    Discomfort,
}

impl WbgtState {
    /// Stress iff `effective` is strictly greater than `reference`
    pub fn classify(effective: f64, reference: f64) -> Self {
        if effective > reference {
            WbgtState::Stress
        } else {
            WbgtState::Discomfort
        }
    }
}

/// CAVS of a garment set, plus the hood increment when one is worn
pub fn effective_cavs(garment_cavs_c: f64, hood_worn: bool) -> f64 {
    if hood_worn {
        garment_cavs_c + HOOD_CAVS_INCREMENT_C
    } else {
        garment_cavs_c
    }
}

/// Reference WBGT (°C) for a metabolic rate (W/m²)
pub fn reference_wbgt(metabolic_rate_w_m2: f64, acclimatization: Acclimatization) -> f64 {
    let (intercept, slope) = match acclimatization {
        Acclimatization::Acclimatized => WBGT_REF_ACCLIMATIZED,
        Acclimatization::NotAcclimatized => WBGT_REF_NOT_ACCLIMATIZED,
    };
    intercept - slope * libm::log10(metabolic_rate_w_m2)
}

/// Input of the WBGT evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WbgtInput {
    /// Work under direct sun
    pub solar_exposed: bool,
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,
    /// Globe temperature (°C)
    pub globe_c: f64,
    /// Natural wet-bulb temperature (°C)
    pub wet_bulb_c: f64,
    /// Clothing adjustment, hood increment already included (°C)
    pub cavs_c: f64,
    /// Metabolic rate (W/m²)
    pub metabolic_rate_w_m2: f64,
    /// Heat acclimatization
    pub acclimatization: Acclimatization,
}

/// WBGT comparison
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WbgtResult {
    /// WBGT from the temperature readings (°C)
    pub raw: f64,
    /// Raw WBGT plus the clothing adjustment (°C)
    pub effective: f64,
    /// Reference WBGT for the task (°C)
    pub reference: f64,
    /// Stress or discomfort
    pub state: WbgtState,
}

impl WbgtResult {
    /// Effective minus reference WBGT (°C); positive under stress
    pub fn excess(&self) -> f64 {
        self.effective - self.reference
    }
}

/// WBGT evaluator
#[derive(Debug, Clone, Default)]
pub struct WbgtEvaluator {
    limits: InputLimits,
}

impl WbgtEvaluator {
    /// Evaluator with custom input limits
    pub fn with_limits(limits: InputLimits) -> Self {
        Self { limits }
    }

    /// WBGT (°C) from the temperature readings alone
    pub fn raw_wbgt(solar_exposed: bool, dry_bulb_c: f64, globe_c: f64, wet_bulb_c: f64) -> f64 {
        if solar_exposed {
            0.7 * wet_bulb_c + 0.2 * globe_c + 0.1 * dry_bulb_c
        } else {
            0.7 * wet_bulb_c + 0.3 * globe_c
        }
    }
}

impl Evaluator for WbgtEvaluator {
    type Input = WbgtInput;
    type Output = WbgtResult;

    fn evaluate(&self, input: &WbgtInput) -> EvaluationResult<WbgtResult> {
        let limits = &self.limits;
        let dry_bulb = utils::check_range("dry_bulb_c", input.dry_bulb_c, limits.air_temp_c)?;
        let globe = utils::check_range("globe_c", input.globe_c, limits.globe_temp_c)?;
        let wet_bulb = utils::check_range("wet_bulb_c", input.wet_bulb_c, limits.air_temp_c)?;
        let cavs = utils::check_range("cavs_c", input.cavs_c, limits.cavs_c)?;
        let metabolic_rate = utils::check_range(
            "metabolic_rate_w_m2",
            input.metabolic_rate_w_m2,
            limits.metabolic_rate_w_m2,
        )?;

        let raw = Self::raw_wbgt(input.solar_exposed, dry_bulb, globe, wet_bulb);
        let effective = raw + cavs;
        let reference = reference_wbgt(metabolic_rate, input.acclimatization);
        let state = WbgtState::classify(effective, reference);

        log_debug!(
            "WBGT raw {:.2} effective {:.2} reference {:.2} -> {:?}",
            raw, effective, reference, state
        );

        Ok(WbgtResult { raw, effective, reference, state })
    }

    fn name(&self) -> &'static str {
        "WBGT"
    }
}
