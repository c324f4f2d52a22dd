//! Heat Stress Evaluators
//!
//! ## Overview
//!
//! Four methods, each a stateless struct implementing [`Evaluator`]:
//!
//! | Evaluator               | Answers                                   | Clothing input |
//! |-------------------------|-------------------------------------------|----------------|
//! | [`HeatIndexEvaluator`]  | How hot does it feel, what measures apply | none           |
//! | [`WbgtEvaluator`]       | Is this heat stress or only discomfort    | CAVS (°C)      |
//! | [`SweatRateEvaluator`]  | How long until overheating or dehydration | Iclo (m²·K/W)  |
//! | [`HeatStrainEvaluator`] | How far over evaporative capacity         | Iclo (m²·K/W)  |
//!
//! The WBGT acts as the screening step. The two heat balance methods only
//! mean something once it reports [`WbgtState::Stress`]; the
//! [`assessment`](crate::assessment) module encodes that rule.
//!
//! ## Validation
//!
//! Every evaluator checks its inputs against an [`InputLimits`] first and
//! returns [`EvaluationError`] for a NaN or an implausible value. Build with
//! [`InputLimits::strict`] to mirror a data-entry form:
//!
//! ```rust
//! use hems_core::{Evaluator, InputLimits, WbgtEvaluator, WbgtInput, Acclimatization};
//!
//! let wbgt = WbgtEvaluator::with_limits(InputLimits::strict());
//! let input = WbgtInput {
//!     solar_exposed: false,
//!     dry_bulb_c: 32.0,
//!     globe_c: 36.0,
//!     wet_bulb_c: 28.0,
//!     cavs_c: 2.0,
//!     metabolic_rate_w_m2: 60.0, // below the strict 100 W/m² floor
//!     acclimatization: Acclimatization::Acclimatized,
//! };
//! assert!(wbgt.evaluate(&input).is_err());
//! ```
//!
//! ## Shared Physics
//!
//! Mean radiant temperature and vapour pressure live in [`utils`] so the
//! required sweat rate and the heat strain index always agree on them.
//!
//! [`Evaluator`]: crate::traits::Evaluator
//! [`InputLimits`]: crate::limits::InputLimits
//! [`InputLimits::strict`]: crate::limits::InputLimits::strict
//! [`EvaluationError`]: crate::errors::EvaluationError

pub mod heat_index;
pub mod heat_strain;
pub mod sweat_rate;
pub mod utils;
pub mod wbgt;

pub use heat_index::{HeatIndexEvaluator, HeatIndexInput, HeatIndexResult, RiskLevel};
pub use heat_strain::{HeatStrainClass, HeatStrainEvaluator, HeatStrainInput, HeatStrainResult};
pub use sweat_rate::{
    AlertKind, AlertSeverity, HeatBalance, PhysiologicalLimits, SweatRateAlert,
    SweatRateEvaluator, SweatRateInput, SweatRateOutcome, SweatRateResult,
};
pub use wbgt::{effective_cavs, reference_wbgt, WbgtEvaluator, WbgtInput, WbgtResult, WbgtState};
