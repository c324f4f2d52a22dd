//! Required Sweat Rate (SWreq, ISO 7933)
//!
//! ## Heat Balance
//!
//! The method asks how much sweat must evaporate for the body to stay in
//! thermal equilibrium, compares it with what the environment and clothing
//! allow, and turns the shortfall into time limits.
//!
//! ```text
//! M   metabolic rate, rescaled to the body-surface basis (÷ 1.7)
//! tr  mean radiant temperature (shared with the heat strain index)
//! pa  ambient vapour pressure (psychrometer equation)
//! tsk mean skin temperature (empirical regression)
//! psk saturation vapour pressure at the skin
//!
//! hc  convective coefficient   natural: 3.5 + 5.2·var
//!                              forced:  3.5 + 5.2·var  (var ≤ 1 m/s)
//!                                       8.7·var^0.6   (var > 1 m/s)
//!     with var = v + 0.0052·(M − 58)
//! hr  radiative coefficient    ε·σ·(Ar/Adu)·(Tsk⁴ − Tr⁴)/(tsk − tr)
//!
//! Emax = (psk − pa) / RT            maximum evaporation
//! Ereq = M − Cres − Eres − C − R    required evaporation
//! w    = min(Ereq / Emax, wmax)     required skin wettedness
//! SWp  = Ep / (1 − w²/2)            predicted sweat rate, capped at SWmax
//! ```
//!
//! ## Time Limits
//!
//! ```text
//! heat accumulation:  60 · Qmax / (Ereq − Ep)     alarm Qmax = 50, danger 60
//! dehydration:        60 · Dmax / SWp              Dmax by acclimatization
//! ```
//!
//! A shortfall of zero or less means heat never accumulates, and a sweat rate
//! of zero or less means no water is lost: both give an unlimited time. When
//! the wettedness is not capped, `Ep` equals `Ereq` exactly, so an
//! environment the body can fully compensate never produces a spurious
//! finite limit from rounding.
//!
//! ## Applicability
//!
//! If the skin cannot evaporate at all (`Emax < 0`, ambient vapour pressure
//! above the skin's) the method does not apply. That comes back as
//! [`SweatRateOutcome::NotApplicable`]; hosts that need the classic all-zero
//! record get it from [`SweatRateOutcome::into_limits`].
//!
//! The method is not valid for exposures shorter than 30 minutes. That is the
//! caller's call to make.

use heapless::Vec;

use crate::{
    constants::{
        physics::{
            ACTIVITY_AIR_SPEED_GAIN, CLOTHING_AREA_FACTOR_SLOPE, EVAPORATIVE_REDUCTION_COEFFICIENT,
            EXPIRED_AIR_TEMP_C, EXPIRED_AIR_VAPOUR_KPA, HC_LINEAR_INTERCEPT, HC_LINEAR_SLOPE,
            HC_POWER_FACTOR, HC_POWER_LAW_SPEED_M_S, KELVIN_OFFSET, LEWIS_RELATION_K_PER_KPA,
            RESPIRATORY_CONVECTION_COEFFICIENT, RESPIRATORY_EVAPORATION_COEFFICIENT,
            RESTING_METABOLIC_RATE_W_M2, SKIN_EMISSIVITY, SKIN_TEMP_AIR_SPEED_WEIGHT,
            SKIN_TEMP_AIR_WEIGHT, SKIN_TEMP_CLOTHING_WEIGHT, SKIN_TEMP_INTERCEPT_C,
            SKIN_TEMP_METABOLIC_WEIGHT, SKIN_TEMP_RADIANT_WEIGHT, SKIN_TEMP_VAPOUR_WEIGHT,
            STEFAN_BOLTZMANN_W_PER_M2_K4,
        },
        thresholds::{
            D_MAX_ALARM_ACCLIMATIZED, D_MAX_ALARM_NOT_ACCLIMATIZED, D_MAX_DANGER_ACCLIMATIZED,
            D_MAX_DANGER_NOT_ACCLIMATIZED, Q_MAX_ALARM, Q_MAX_DANGER, SWREQ_ALARM_ALERT_MIN,
            SWREQ_DANGER_ALERT_MIN, SW_MAX_ACCLIMATIZED, SW_MAX_NOT_ACCLIMATIZED,
            W_MAX_ACCLIMATIZED, W_MAX_NOT_ACCLIMATIZED,
        },
    },
    errors::{EvaluationError, EvaluationResult},
    limits::InputLimits,
    time::ExposureTime,
    traits::Evaluator,
    types::{Acclimatization, Posture, VentilationMode},
    units::to_surface_area_basis,
};

use super::utils;

/// Physiological limits that depend on acclimatization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysiologicalLimits {
    /// Maximum skin wettedness
    pub w_max: f64,
    /// Maximum sweat rate (W/m²)
    pub sw_max: f64,
    /// Heat storage alarm limit (W·h/m²)
    pub q_max_alarm: f64,
    /// Heat storage danger limit (W·h/m²)
    pub q_max_danger: f64,
    /// Water loss alarm limit (W·h/m²)
    pub d_max_alarm: f64,
    /// Water loss danger limit (W·h/m²)
    pub d_max_danger: f64,
}

impl PhysiologicalLimits {
    /// Limits for a population
    pub const fn for_population(acclimatization: Acclimatization) -> Self {
        match acclimatization {
            Acclimatization::Acclimatized => Self {
                w_max: W_MAX_ACCLIMATIZED,
                sw_max: SW_MAX_ACCLIMATIZED,
                q_max_alarm: Q_MAX_ALARM,
                q_max_danger: Q_MAX_DANGER,
                d_max_alarm: D_MAX_ALARM_ACCLIMATIZED,
                d_max_danger: D_MAX_DANGER_ACCLIMATIZED,
            },
            Acclimatization::NotAcclimatized => Self {
                w_max: W_MAX_NOT_ACCLIMATIZED,
                sw_max: SW_MAX_NOT_ACCLIMATIZED,
                q_max_alarm: Q_MAX_ALARM,
                q_max_danger: Q_MAX_DANGER,
                d_max_alarm: D_MAX_ALARM_NOT_ACCLIMATIZED,
                d_max_danger: D_MAX_DANGER_NOT_ACCLIMATIZED,
            },
        }
    }
}

/// Input of the required sweat rate evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweatRateInput {
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,
    /// Globe temperature (°C)
    pub globe_c: f64,
    /// Wet-bulb temperature (°C)
    pub wet_bulb_c: f64,
    /// Clothing thermal resistance (m²·K/W)
    pub iclo: f64,
    /// Metabolic rate as entered (W/m²), rescaled internally
    pub metabolic_rate_w_m2: f64,
    /// Air speed (m/s)
    pub air_speed_m_s: f64,
    /// Working posture
    pub posture: Posture,
    /// Heat acclimatization
    pub acclimatization: Acclimatization,
    /// Ventilation of the work area
    pub ventilation: VentilationMode,
}

/// Time limits and predicted thermoregulatory response
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweatRateResult {
    /// Heat accumulation, alarm level
    pub alarm_accumulation: ExposureTime,
    /// Heat accumulation, danger level
    pub danger_accumulation: ExposureTime,
    /// Dehydration, alarm level
    pub alarm_dehydration: ExposureTime,
    /// Dehydration, danger level
    pub danger_dehydration: ExposureTime,
    /// Maximum evaporation Emax (W/m²)
    pub max_evaporation: f64,
    /// Required evaporation Ereq (W/m²)
    pub required_evaporation: f64,
    /// Predicted evaporation Ep (W/m²)
    pub predicted_evaporation: f64,
    /// Predicted skin wettedness
    pub predicted_wettedness: f64,
    /// Predicted sweat rate SWp (W/m²)
    pub predicted_sweat_rate: f64,
}

impl SweatRateResult {
    /// All-zero record meaning "method not applicable"
    ///
    /// A computed result never has a zero limit: limits are either positive
    /// or unlimited.
    pub const NOT_APPLICABLE: Self = Self {
        alarm_accumulation: ExposureTime::ZERO,
        danger_accumulation: ExposureTime::ZERO,
        alarm_dehydration: ExposureTime::ZERO,
        danger_dehydration: ExposureTime::ZERO,
        max_evaporation: 0.0,
        required_evaporation: 0.0,
        predicted_evaporation: 0.0,
        predicted_wettedness: 0.0,
        predicted_sweat_rate: 0.0,
    };

    /// Whether this is the not-applicable sentinel
    pub fn is_not_applicable(&self) -> bool {
        self.limits().iter().all(|limit| limit.minutes() == 0.0)
    }

    /// The four limits in order: alarm/danger accumulation, alarm/danger dehydration
    pub fn limits(&self) -> [ExposureTime; 4] {
        [
            self.alarm_accumulation,
            self.danger_accumulation,
            self.alarm_dehydration,
            self.danger_dehydration,
        ]
    }

    /// Alerts for limits short enough to need action within a shift
    ///
    /// Alarm limits under two hours and danger limits under four hours raise
    /// an alert. Unlimited limits never do.
    pub fn alerts(&self) -> Vec<SweatRateAlert, 4> {
        let candidates = [
            (AlertKind::HeatAccumulation, AlertSeverity::Alarm, self.alarm_accumulation),
            (AlertKind::HeatAccumulation, AlertSeverity::Danger, self.danger_accumulation),
            (AlertKind::Dehydration, AlertSeverity::Alarm, self.alarm_dehydration),
            (AlertKind::Dehydration, AlertSeverity::Danger, self.danger_dehydration),
        ];

        let mut alerts = Vec::new();
        for (kind, severity, limit) in candidates {
            let threshold = match severity {
                AlertSeverity::Alarm => SWREQ_ALARM_ALERT_MIN,
                AlertSeverity::Danger => SWREQ_DANGER_ALERT_MIN,
            };
            if limit.is_shorter_than(threshold) {
                // Capacity matches the candidate count
                let _ = alerts.push(SweatRateAlert { kind, severity, limit });
            }
        }
        alerts
    }
}

/// Physiological limit an alert refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AlertKind {
    /// Body heat storage
    HeatAccumulation,
    /// Water loss
    Dehydration,
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AlertSeverity {
    /// Monitor continuously
    Alarm,
    /// Act immediately
    Danger,
}

/// A time limit short enough to act on
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweatRateAlert {
    /// Limit concerned
    pub kind: AlertKind,
    /// Alarm or danger
    pub severity: AlertSeverity,
    /// The limit that triggered the alert
    pub limit: ExposureTime,
}

impl SweatRateAlert {
    /// Recommended action
    pub const fn action(&self) -> &'static str {
        match (self.kind, self.severity) {
            (AlertKind::HeatAccumulation, AlertSeverity::Alarm) => "Monitor continuously",
            (AlertKind::HeatAccumulation, AlertSeverity::Danger) => "Take immediate action",
            (AlertKind::Dehydration, AlertSeverity::Alarm) => "Increase hydration",
            (AlertKind::Dehydration, AlertSeverity::Danger) => "Urgent hydration required",
        }
    }
}

/// Outcome of the required sweat rate evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SweatRateOutcome {
    /// The method applies; time limits were computed
    Limits(SweatRateResult),
    /// The environment cannot absorb evaporation from the skin (`Emax < 0`);
    /// do not use this method for these conditions
    NotApplicable {
        /// The negative maximum evaporation (W/m²)
        max_evaporation: f64,
    },
}

impl SweatRateOutcome {
    /// Whether time limits were computed
    pub fn is_applicable(&self) -> bool {
        matches!(self, SweatRateOutcome::Limits(_))
    }

    /// The computed result, if any
    pub fn limits(&self) -> Option<&SweatRateResult> {
        match self {
            SweatRateOutcome::Limits(result) => Some(result),
            SweatRateOutcome::NotApplicable { .. } => None,
        }
    }

    /// Collapse into a result record, using the all-zero sentinel when the
    /// method does not apply
    pub fn into_limits(self) -> SweatRateResult {
        match self {
            SweatRateOutcome::Limits(result) => result,
            SweatRateOutcome::NotApplicable { .. } => SweatRateResult::NOT_APPLICABLE,
        }
    }
}

/// Heat exchange terms of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeatBalance {
    /// Metabolic rate on the body-surface basis (W/m²)
    pub metabolic_rate: f64,
    /// Mean radiant temperature (°C)
    pub radiant_temp_c: f64,
    /// Ambient vapour pressure (kPa)
    pub ambient_vapour_kpa: f64,
    /// Mean skin temperature (°C)
    pub skin_temp_c: f64,
    /// Skin saturation vapour pressure (kPa)
    pub skin_vapour_kpa: f64,
    /// Convective coefficient (W/(m²·K))
    pub hc: f64,
    /// Radiative coefficient (W/(m²·K))
    pub hr: f64,
    /// Dry heat reduction factor of the clothing
    pub clothing_factor: f64,
    /// Total evaporative resistance of skin and clothing (m²·kPa/W)
    pub evaporative_resistance: f64,
    /// Maximum evaporation Emax (W/m²)
    pub max_evaporation: f64,
    /// Respiratory convective loss (W/m²)
    pub respiratory_convection: f64,
    /// Respiratory evaporative loss (W/m²)
    pub respiratory_evaporation: f64,
    /// Radiative exchange at the skin (W/m²)
    pub radiation: f64,
    /// Convective exchange at the skin (W/m²)
    pub convection: f64,
    /// Required evaporation Ereq (W/m²)
    pub required_evaporation: f64,
}

impl HeatBalance {
    /// Solve the heat balance for an input that already passed its checks
    ///
    /// Fails when the globe reading admits no radiant temperature, or when
    /// the balance terms do not come out finite.
    pub fn solve(input: &SweatRateInput) -> EvaluationResult<Self> {
        let ta = input.dry_bulb_c;
        let v = input.air_speed_m_s;
        let iclo = input.iclo;
        let metabolic_rate = to_surface_area_basis(input.metabolic_rate_w_m2);

        let radiant_temp_c = utils::mean_radiant_temperature(input.globe_c, ta, v)?;
        let ambient_vapour_kpa = utils::ambient_vapour_pressure(ta, input.wet_bulb_c);

        let skin_temp_c = SKIN_TEMP_INTERCEPT_C
            + SKIN_TEMP_AIR_WEIGHT * ta
            + SKIN_TEMP_RADIANT_WEIGHT * radiant_temp_c
            - SKIN_TEMP_AIR_SPEED_WEIGHT * v
            + SKIN_TEMP_VAPOUR_WEIGHT * ambient_vapour_kpa
            + SKIN_TEMP_METABOLIC_WEIGHT * metabolic_rate
            - SKIN_TEMP_CLOTHING_WEIGHT * iclo;
        let skin_vapour_kpa = utils::saturation_vapour_pressure(skin_temp_c);

        let relative_speed =
            v + ACTIVITY_AIR_SPEED_GAIN * (metabolic_rate - RESTING_METABOLIC_RATE_W_M2);
        let hc = convective_coefficient(relative_speed, input.ventilation);
        let hr = radiative_coefficient(skin_temp_c, radiant_temp_c, input.posture);

        let fcl = 1.0 + CLOTHING_AREA_FACTOR_SLOPE * iclo;
        let clothing_factor = 1.0 / ((hc + hr) * iclo + 1.0 / fcl);
        let clothing_vapour_term = iclo - (fcl - 1.0) / ((hc + hr) * fcl);
        let evaporative_factor =
            1.0 / (1.0 + EVAPORATIVE_REDUCTION_COEFFICIENT * hc * clothing_vapour_term);
        let he = LEWIS_RELATION_K_PER_KPA * hc;
        let evaporative_resistance = 1.0 / (he * evaporative_factor);

        let max_evaporation = (skin_vapour_kpa - ambient_vapour_kpa) / evaporative_resistance;

        let respiratory_convection =
            RESPIRATORY_CONVECTION_COEFFICIENT * metabolic_rate * (EXPIRED_AIR_TEMP_C - ta);
        let respiratory_evaporation = RESPIRATORY_EVAPORATION_COEFFICIENT
            * metabolic_rate
            * (EXPIRED_AIR_VAPOUR_KPA - ambient_vapour_kpa);
        let radiation = hr * clothing_factor * (skin_temp_c - radiant_temp_c);
        let convection = hc * clothing_factor * (skin_temp_c - ta);
        let required_evaporation = metabolic_rate
            - respiratory_convection
            - respiratory_evaporation
            - convection
            - radiation;

        utils::check_finite("max_evaporation", max_evaporation)?;
        utils::check_finite("required_evaporation", required_evaporation)?;

        Ok(Self {
            metabolic_rate,
            radiant_temp_c,
            ambient_vapour_kpa,
            skin_temp_c,
            skin_vapour_kpa,
            hc,
            hr,
            clothing_factor,
            evaporative_resistance,
            max_evaporation,
            respiratory_convection,
            respiratory_evaporation,
            radiation,
            convection,
            required_evaporation,
        })
    }
}

/// Convective heat transfer coefficient (W/(m²·K)) at a relative air speed
pub fn convective_coefficient(relative_speed_m_s: f64, ventilation: VentilationMode) -> f64 {
    let linear = HC_LINEAR_INTERCEPT + HC_LINEAR_SLOPE * relative_speed_m_s;
    match ventilation {
        VentilationMode::Natural => linear,
        VentilationMode::Forced if relative_speed_m_s <= HC_POWER_LAW_SPEED_M_S => linear,
        VentilationMode::Forced => HC_POWER_FACTOR * libm::pow(relative_speed_m_s, 0.6),
    }
}

/// Linearised radiative heat transfer coefficient (W/(m²·K))
///
/// `(a⁴ − b⁴)/(a − b)` is evaluated as `(a + b)(a² + b²)`, which stays
/// defined when skin and radiant temperatures coincide.
pub fn radiative_coefficient(skin_temp_c: f64, radiant_temp_c: f64, posture: Posture) -> f64 {
    let skin_k = skin_temp_c + KELVIN_OFFSET;
    let radiant_k = radiant_temp_c + KELVIN_OFFSET;
    SKIN_EMISSIVITY
        * STEFAN_BOLTZMANN_W_PER_M2_K4
        * posture.radiating_area_ratio()
        * (skin_k + radiant_k)
        * (skin_k * skin_k + radiant_k * radiant_k)
}

fn time_limit(budget: f64, rate: f64) -> EvaluationResult<ExposureTime> {
    ExposureTime::from_budget(budget, rate)
        .ok_or(EvaluationError::InvalidValue { field: "exposure_time" })
}

/// Required sweat rate evaluator
#[derive(Debug, Clone, Default)]
pub struct SweatRateEvaluator {
    limits: InputLimits,
}

impl SweatRateEvaluator {
    /// Evaluator with custom input limits
    pub fn with_limits(limits: InputLimits) -> Self {
        Self { limits }
    }

    fn check(&self, input: &SweatRateInput) -> EvaluationResult<()> {
        let limits = &self.limits;
        utils::check_range("dry_bulb_c", input.dry_bulb_c, limits.air_temp_c)?;
        utils::check_range("globe_c", input.globe_c, limits.globe_temp_c)?;
        utils::check_range("wet_bulb_c", input.wet_bulb_c, limits.air_temp_c)?;
        utils::check_range("iclo", input.iclo, limits.iclo_m2k_w)?;
        utils::check_range(
            "metabolic_rate_w_m2",
            input.metabolic_rate_w_m2,
            limits.metabolic_rate_w_m2,
        )?;
        utils::check_range("air_speed_m_s", input.air_speed_m_s, limits.air_speed_m_s)?;
        Ok(())
    }
}

impl Evaluator for SweatRateEvaluator {
    type Input = SweatRateInput;
    type Output = SweatRateOutcome;

    fn evaluate(&self, input: &SweatRateInput) -> EvaluationResult<SweatRateOutcome> {
        self.check(input)?;

        let balance = HeatBalance::solve(input)?;
        log_debug!(
            "SWreq balance: tr {:.2} pa {:.3} tsk {:.2} hc {:.2} hr {:.2} Emax {:.1} Ereq {:.1}",
            balance.radiant_temp_c,
            balance.ambient_vapour_kpa,
            balance.skin_temp_c,
            balance.hc,
            balance.hr,
            balance.max_evaporation,
            balance.required_evaporation
        );

        let e_max = balance.max_evaporation;
        if e_max < 0.0 {
            log_warn!("SWreq not applicable: Emax = {:.1} W/m² < 0", e_max);
            return Ok(SweatRateOutcome::NotApplicable { max_evaporation: e_max });
        }

        let e_req = balance.required_evaporation;
        let physiology = PhysiologicalLimits::for_population(input.acclimatization);

        let mut wettedness = e_req / e_max;
        let mut e_p = e_req;
        if wettedness > physiology.w_max {
            wettedness = physiology.w_max;
            e_p = wettedness * e_max;
        }

        let mut sweat_rate = e_p / (1.0 - wettedness * wettedness / 2.0);
        if sweat_rate > physiology.sw_max {
            let ratio = e_max / physiology.sw_max;
            wettedness = libm::sqrt(ratio * ratio + 2.0) - ratio;
            e_p = wettedness * e_max;
            sweat_rate = physiology.sw_max;
        }

        let deficit = e_req - e_p;
        let result = SweatRateResult {
            alarm_accumulation: time_limit(physiology.q_max_alarm, deficit)?,
            danger_accumulation: time_limit(physiology.q_max_danger, deficit)?,
            alarm_dehydration: time_limit(physiology.d_max_alarm, sweat_rate)?,
            danger_dehydration: time_limit(physiology.d_max_danger, sweat_rate)?,
            max_evaporation: e_max,
            required_evaporation: e_req,
            predicted_evaporation: e_p,
            predicted_wettedness: wettedness,
            predicted_sweat_rate: sweat_rate,
        };

        log_debug!(
            "SWreq w {:.3} SWp {:.1} -> Q {}/{} D {}/{}",
            wettedness,
            sweat_rate,
            result.alarm_accumulation,
            result.danger_accumulation,
            result.alarm_dehydration,
            result.danger_dehydration
        );

        Ok(SweatRateOutcome::Limits(result))
    }

    fn name(&self) -> &'static str {
        "SWreq"
    }
}
