//! Method Dispatch
//!
//! Runs the methods in the order an occupational hygienist would:
//!
//! ```text
//! Heat Index ─────────────────────────────────────────────► always
//! WBGT (CAVS + hood) ──┬─ Stress ─────► SWreq              always
//!                      │              └► ISC               iclo < 0.6 and acclimatized
//!                      └─ Discomfort ─► comfort method recommendation
//! ```
//!
//! The heat balance methods are only valid under heat stress. Below the
//! WBGT reference the environment calls for a comfort method instead
//! (PMV/PPD indoors), which is out of scope here and reported as a
//! recommendation.
//!
//! ```rust
//! use hems_core::assessment::{assess, AssessmentInput, ThermalEvaluation};
//! use hems_core::types::*;
//!
//! let input = AssessmentInput {
//!     reading: EnvironmentalReading {
//!         dry_bulb_c: 32.0,
//!         globe_c: 36.0,
//!         wet_bulb_c: 28.0,
//!         air_speed_m_s: 0.016,
//!         relative_humidity_pct: 50.0,
//!     },
//!     task: TaskContext {
//!         posture: Posture::Standing,
//!         acclimatization: Acclimatization::Acclimatized,
//!         ventilation: VentilationMode::Natural,
//!         solar_exposed: false,
//!         hood_worn: false,
//!         metabolic_rate_w_m2: 160.0,
//!     },
//!     clothing: ClothingInsulation { cavs_c: 2.0, iclo: 0.11 },
//!     worker: WorkerProfile::default(),
//! };
//!
//! let assessment = assess(&input)?;
//! assert!(matches!(assessment.evaluation, ThermalEvaluation::Stress(_)));
//! # Ok::<(), hems_core::EvaluationError>(())
//! ```

use crate::{
    constants::thresholds::ISC_MAX_ICLO,
    errors::{EvaluationError, EvaluationResult},
    evaluators::{
        effective_cavs, HeatIndexEvaluator, HeatIndexInput, HeatIndexResult, HeatStrainEvaluator,
        HeatStrainInput, HeatStrainResult, SweatRateEvaluator, SweatRateInput, SweatRateOutcome,
        WbgtEvaluator, WbgtInput, WbgtResult, WbgtState,
    },
    limits::InputLimits,
    traits::Evaluator,
    types::{ClothingInsulation, EnvironmentalReading, TaskContext, WorkerProfile},
};

/// Everything one assessment needs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssessmentInput {
    /// Environmental measurements
    pub reading: EnvironmentalReading,
    /// Task performed
    pub task: TaskContext,
    /// Clothing in both CAVS and Iclo terms
    pub clothing: ClothingInsulation,
    /// Representative worker
    pub worker: WorkerProfile,
}

/// Why the heat strain index was not computed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeatStrainSkipped {
    /// Iclo at or above 0.6 m²·K/W
    ClothingTooInsulating {
        /// Iclo of the ensemble
        iclo: f64,
    },
    /// The index assumes acclimatized workers
    NotAcclimatized,
    /// Still air leaves no evaporative capacity
    NoEvaporativeCapacity {
        /// Maximum evaporation (W/m²)
        max_evaporation: f64,
    },
}

/// Heat strain index or the reason it was skipped
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeatStrainOutcome {
    /// Index computed
    Evaluated(HeatStrainResult),
    /// Index not applicable to this task
    Skipped(HeatStrainSkipped),
}

impl HeatStrainOutcome {
    /// The computed result, if any
    pub fn result(&self) -> Option<&HeatStrainResult> {
        match self {
            HeatStrainOutcome::Evaluated(result) => Some(result),
            HeatStrainOutcome::Skipped(_) => None,
        }
    }
}

/// Heat balance methods run under heat stress
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StressEvaluation {
    /// Required sweat rate
    pub sweat_rate: SweatRateOutcome,
    /// Heat strain index
    pub heat_strain: HeatStrainOutcome,
}

/// Method to use when the WBGT reports discomfort only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MethodRecommendation {
    /// Assess with a comfort method (PMV/PPD, Fanger)
    ComfortIndoor,
    /// No standard comfort method covers outdoor work under sun
    NoOutdoorComfortMethod,
}

impl MethodRecommendation {
    /// Advice text for a report
    pub const fn advice(self) -> &'static str {
        match self {
            MethodRecommendation::ComfortIndoor => {
                "Thermal discomfort only: assess with the Fanger method (PMV/PPD)."
            }
            MethodRecommendation::NoOutdoorComfortMethod => {
                "Thermal discomfort only: no comfort assessment method exists for outdoor work."
            }
        }
    }
}

/// Methods selected by the WBGT screening
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ThermalEvaluation {
    /// Heat stress: heat balance methods applied
    Stress(StressEvaluation),
    /// Discomfort: comfort method recommended
    Discomfort(MethodRecommendation),
}

/// Complete assessment of one workstation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assessment {
    /// Heat Index, always computed
    pub heat_index: HeatIndexResult,
    /// CAVS actually applied, hood included (°C)
    pub effective_cavs_c: f64,
    /// WBGT screening
    pub wbgt: WbgtResult,
    /// Follow-up selected by the screening
    pub evaluation: ThermalEvaluation,
}

/// Runs all evaluators with one set of input limits
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    heat_index: HeatIndexEvaluator,
    wbgt: WbgtEvaluator,
    sweat_rate: SweatRateEvaluator,
    heat_strain: HeatStrainEvaluator,
}

impl Assessor {
    /// Assessor whose evaluators all share `limits`
    pub fn new(limits: InputLimits) -> Self {
        Self {
            heat_index: HeatIndexEvaluator::with_limits(limits),
            wbgt: WbgtEvaluator::with_limits(limits),
            sweat_rate: SweatRateEvaluator::with_limits(limits),
            heat_strain: HeatStrainEvaluator::with_limits(limits),
        }
    }

    /// Assess one workstation
    pub fn assess(&self, input: &AssessmentInput) -> EvaluationResult<Assessment> {
        let AssessmentInput { reading, task, clothing, worker } = input;

        let heat_index = self.heat_index.evaluate(&HeatIndexInput {
            dry_bulb_c: reading.dry_bulb_c,
            relative_humidity_pct: reading.relative_humidity_pct,
            solar_exposed: task.solar_exposed,
        })?;

        let effective_cavs_c = effective_cavs(clothing.cavs_c, task.hood_worn);
        let wbgt = self.wbgt.evaluate(&WbgtInput {
            solar_exposed: task.solar_exposed,
            dry_bulb_c: reading.dry_bulb_c,
            globe_c: reading.globe_c,
            wet_bulb_c: reading.wet_bulb_c,
            cavs_c: effective_cavs_c,
            metabolic_rate_w_m2: task.metabolic_rate_w_m2,
            acclimatization: task.acclimatization,
        })?;

        let evaluation = match wbgt.state {
            WbgtState::Stress => ThermalEvaluation::Stress(StressEvaluation {
                sweat_rate: self.sweat_rate(reading, task, clothing)?,
                heat_strain: self.heat_strain(reading, task, clothing, worker)?,
            }),
            WbgtState::Discomfort if task.solar_exposed => {
                ThermalEvaluation::Discomfort(MethodRecommendation::NoOutdoorComfortMethod)
            }
            WbgtState::Discomfort => {
                ThermalEvaluation::Discomfort(MethodRecommendation::ComfortIndoor)
            }
        };

        Ok(Assessment { heat_index, effective_cavs_c, wbgt, evaluation })
    }

    fn sweat_rate(
        &self,
        reading: &EnvironmentalReading,
        task: &TaskContext,
        clothing: &ClothingInsulation,
    ) -> EvaluationResult<SweatRateOutcome> {
        self.sweat_rate.evaluate(&SweatRateInput {
            dry_bulb_c: reading.dry_bulb_c,
            globe_c: reading.globe_c,
            wet_bulb_c: reading.wet_bulb_c,
            iclo: clothing.iclo,
            metabolic_rate_w_m2: task.metabolic_rate_w_m2,
            air_speed_m_s: reading.air_speed_m_s,
            posture: task.posture,
            acclimatization: task.acclimatization,
            ventilation: task.ventilation,
        })
    }

    fn heat_strain(
        &self,
        reading: &EnvironmentalReading,
        task: &TaskContext,
        clothing: &ClothingInsulation,
        worker: &WorkerProfile,
    ) -> EvaluationResult<HeatStrainOutcome> {
        if clothing.iclo >= ISC_MAX_ICLO {
            return Ok(HeatStrainOutcome::Skipped(HeatStrainSkipped::ClothingTooInsulating {
                iclo: clothing.iclo,
            }));
        }
        if !task.acclimatization.is_acclimatized() {
            return Ok(HeatStrainOutcome::Skipped(HeatStrainSkipped::NotAcclimatized));
        }

        let result = self.heat_strain.evaluate(&HeatStrainInput {
            metabolic_rate_w_m2: task.metabolic_rate_w_m2,
            air_speed_m_s: reading.air_speed_m_s,
            globe_c: reading.globe_c,
            dry_bulb_c: reading.dry_bulb_c,
            wet_bulb_c: reading.wet_bulb_c,
            iclo: clothing.iclo,
            height_cm: worker.height_cm,
            weight_kg: worker.weight_kg,
        });

        match result {
            Ok(result) => Ok(HeatStrainOutcome::Evaluated(result)),
            Err(EvaluationError::NoEvaporativeCapacity { value, .. }) => {
                log_warn!("ISC skipped: Emax = {:.1} W/m²", value);
                Ok(HeatStrainOutcome::Skipped(HeatStrainSkipped::NoEvaporativeCapacity {
                    max_evaporation: value,
                }))
            }
            Err(e) => Err(e),
        }
    }
}

/// Assess one workstation with the default input limits
pub fn assess(input: &AssessmentInput) -> EvaluationResult<Assessment> {
    Assessor::default().assess(input)
}
