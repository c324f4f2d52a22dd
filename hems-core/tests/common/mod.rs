//! Common fixtures for integration tests
//!
//! Provides:
//! - Named workstation scenarios with known outcomes
//! - Assertion helpers for exposure limits

#![allow(dead_code)]

use hems_core::{
    assessment::{Assessment, StressEvaluation, ThermalEvaluation},
    Acclimatization, AssessmentInput, ClothingInsulation, EnvironmentalReading, ExposureTime,
    Posture, TaskContext, VentilationMode, WorkerProfile,
};

pub mod scenarios;

/// Moderate indoor job: defaults of the assessment form
pub fn indoor_reading() -> EnvironmentalReading {
    EnvironmentalReading {
        dry_bulb_c: 32.0,
        globe_c: 36.0,
        wet_bulb_c: 28.0,
        air_speed_m_s: 0.016,
        relative_humidity_pct: 50.0,
    }
}

/// Standing, acclimatized, naturally ventilated, no sun, no hood
pub fn moderate_task(metabolic_rate_w_m2: f64) -> TaskContext {
    TaskContext {
        posture: Posture::Standing,
        acclimatization: Acclimatization::Acclimatized,
        ventilation: VentilationMode::Natural,
        solar_exposed: false,
        hood_worn: false,
        metabolic_rate_w_m2,
    }
}

/// Coverall over work clothes (CAVS 2 °C, Iclo 0.11 m²·K/W)
pub fn coverall() -> ClothingInsulation {
    ClothingInsulation { cavs_c: 2.0, iclo: 0.11 }
}

/// Assessment input assembled from the default fixtures
pub fn default_input() -> AssessmentInput {
    AssessmentInput {
        reading: indoor_reading(),
        task: moderate_task(160.0),
        clothing: coverall(),
        worker: WorkerProfile::default(),
    }
}

/// Unwrap the stress branch or fail the test
pub fn expect_stress(assessment: &Assessment) -> &StressEvaluation {
    match &assessment.evaluation {
        ThermalEvaluation::Stress(stress) => stress,
        other => panic!("expected heat stress, got {other:?}"),
    }
}

/// Assert a finite limit within `tolerance` minutes
pub fn assert_minutes(limit: ExposureTime, expected: f64, tolerance: f64) {
    assert!(
        !limit.is_unlimited() && (limit.minutes() - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance} min, got {}",
        limit.minutes()
    );
}
