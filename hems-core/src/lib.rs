//! Occupational heat stress evaluation
//!
//! Turns workstation measurements and task characteristics into the
//! standard heat stress indices:
//! - Heat Index (apparent temperature, NWS)
//! - WBGT with effective/reference comparison (ISO 7243)
//! - Required sweat rate with exposure time limits (ISO 7933)
//! - Heat strain index with permissible exposure (NTP 323)
//!
//! Every evaluation is closed-form arithmetic on plain scalars: no I/O, no
//! shared state, no heap. Runs the same on a server or a handheld meter.
//!
//! ```rust
//! use hems_core::{evaluate_heat_index, evaluate_wbgt, Acclimatization, RiskLevel, WbgtState};
//!
//! let hi = evaluate_heat_index(32.0, 50.0, false)?;
//! assert_eq!(hi.level, RiskLevel::II);
//!
//! let wbgt = evaluate_wbgt(false, 32.0, 36.0, 28.0, 2.0, 160.0, Acclimatization::Acclimatized)?;
//! assert_eq!(wbgt.state, WbgtState::Stress);
//! # Ok::<(), hems_core::EvaluationError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod assessment;
pub mod constants;
pub mod errors;
pub mod evaluators;
pub mod limits;
pub mod time;
pub mod traits;
pub mod types;
pub mod units;

// Public API
pub use assessment::{assess, Assessment, AssessmentInput, Assessor, ThermalEvaluation};
pub use errors::{EvaluationError, EvaluationResult};
pub use evaluators::{
    HeatIndexEvaluator, HeatIndexInput, HeatIndexResult, HeatStrainClass, HeatStrainEvaluator,
    HeatStrainInput, HeatStrainResult, RiskLevel, SweatRateEvaluator, SweatRateInput,
    SweatRateOutcome, SweatRateResult, WbgtEvaluator, WbgtInput, WbgtResult, WbgtState,
};
pub use limits::InputLimits;
pub use time::ExposureTime;
pub use traits::Evaluator;
pub use types::{
    Acclimatization, ClothingInsulation, EnvironmentalReading, Posture, TaskContext,
    VentilationMode, WorkerProfile,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heat Index with risk level and protective measures
pub fn evaluate_heat_index(
    dry_bulb_c: f64,
    relative_humidity_pct: f64,
    solar_exposed: bool,
) -> EvaluationResult<HeatIndexResult> {
    HeatIndexEvaluator::default().evaluate(&HeatIndexInput {
        dry_bulb_c,
        relative_humidity_pct,
        solar_exposed,
    })
}

/// WBGT comparison; `cavs_c` must already include the hood increment
pub fn evaluate_wbgt(
    solar_exposed: bool,
    dry_bulb_c: f64,
    globe_c: f64,
    wet_bulb_c: f64,
    cavs_c: f64,
    metabolic_rate_w_m2: f64,
    acclimatization: Acclimatization,
) -> EvaluationResult<WbgtResult> {
    WbgtEvaluator::default().evaluate(&WbgtInput {
        solar_exposed,
        dry_bulb_c,
        globe_c,
        wet_bulb_c,
        cavs_c,
        metabolic_rate_w_m2,
        acclimatization,
    })
}

/// Required sweat rate time limits, or not applicable
#[allow(clippy::too_many_arguments)]
pub fn evaluate_sweat_rate(
    dry_bulb_c: f64,
    globe_c: f64,
    wet_bulb_c: f64,
    iclo: f64,
    metabolic_rate_w_m2: f64,
    air_speed_m_s: f64,
    posture: Posture,
    acclimatization: Acclimatization,
    ventilation: VentilationMode,
) -> EvaluationResult<SweatRateOutcome> {
    SweatRateEvaluator::default().evaluate(&SweatRateInput {
        dry_bulb_c,
        globe_c,
        wet_bulb_c,
        iclo,
        metabolic_rate_w_m2,
        air_speed_m_s,
        posture,
        acclimatization,
        ventilation,
    })
}

/// Heat strain index with permissible exposure
#[allow(clippy::too_many_arguments)]
pub fn evaluate_heat_strain(
    metabolic_rate_w_m2: f64,
    air_speed_m_s: f64,
    globe_c: f64,
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    iclo: f64,
    height_cm: f64,
    weight_kg: f64,
) -> EvaluationResult<HeatStrainResult> {
    HeatStrainEvaluator::default().evaluate(&HeatStrainInput {
        metabolic_rate_w_m2,
        air_speed_m_s,
        globe_c,
        dry_bulb_c,
        wet_bulb_c,
        iclo,
        height_cm,
        weight_kg,
    })
}
