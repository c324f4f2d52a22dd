//! Tables and resolved readings feeding a full assessment

use hems_core::{
    assessment::ThermalEvaluation, assess, Acclimatization, AssessmentInput, Posture,
    TaskContext, VentilationMode, WorkerProfile,
};
use hems_tables::{
    inputs::{resolve_reading, DRY_BULB_COLUMN, WET_BULB_COLUMN},
    DEFAULT_TABLES,
};

#[test]
fn test_lookups_drive_assessment() {
    let dry = [31.5, 32.5];
    let wet = [27.0, 29.0, f64::NAN];
    let resolved = resolve_reading([(DRY_BULB_COLUMN, &dry[..]), (WET_BULB_COLUMN, &wet[..])]);
    assert_eq!(resolved.found.len(), 2);
    assert_eq!(resolved.missing.len(), 3);

    let clothing = DEFAULT_TABLES
        .clothing_insulation("Double-layer woven clothing", "Underpants, coverall, socks, shoes")
        .unwrap();
    let metabolic_rate_w_m2 = DEFAULT_TABLES.metabolic_rate_for("Moderate metabolic rate").unwrap();

    let assessment = assess(&AssessmentInput {
        reading: resolved.reading,
        task: TaskContext {
            posture: Posture::Standing,
            acclimatization: Acclimatization::Acclimatized,
            ventilation: VentilationMode::Natural,
            solar_exposed: false,
            hood_worn: true,
            metabolic_rate_w_m2,
        },
        clothing,
        worker: WorkerProfile::default(),
    })
    .unwrap();

    // Double-layer woven (3 °C) plus hood
    assert_eq!(assessment.effective_cavs_c, 4.0);
    assert!(matches!(assessment.evaluation, ThermalEvaluation::Stress(_)));
}
