//! Integration tests for the full assessment
//!
//! Covers:
//! - Dispatch decisions across the workstation scenarios
//! - Worked numbers for the indoor reference workstation
//! - Agreement between the free functions and the assessor
//! - Input limit configuration

mod common;

use hems_core::{
    assessment::{HeatStrainOutcome, HeatStrainSkipped, MethodRecommendation, ThermalEvaluation},
    evaluate_heat_index, evaluate_heat_strain, evaluate_sweat_rate, evaluate_wbgt, Acclimatization,
    Assessor, EvaluationError, HeatStrainClass, InputLimits, Posture, RiskLevel, SweatRateOutcome,
    VentilationMode, WbgtState,
};

use common::{
    assert_minutes, default_input, expect_stress,
    scenarios::{self, ExpectedDispatch},
};

#[test]
fn test_scenarios_dispatch_as_expected() {
    let assessor = Assessor::default();

    for scenario in scenarios::all() {
        let assessment = assessor
            .assess(&scenario.input)
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));

        let actual = match &assessment.evaluation {
            ThermalEvaluation::Stress(stress) => match (&stress.sweat_rate, &stress.heat_strain) {
                (SweatRateOutcome::NotApplicable { .. }, _) => {
                    ExpectedDispatch::StressSweatRateNotApplicable
                }
                (_, HeatStrainOutcome::Evaluated(_)) => ExpectedDispatch::StressWithHeatStrain,
                (_, HeatStrainOutcome::Skipped(_)) => ExpectedDispatch::StressWithoutHeatStrain,
            },
            ThermalEvaluation::Discomfort(MethodRecommendation::ComfortIndoor) => {
                ExpectedDispatch::ComfortIndoor
            }
            ThermalEvaluation::Discomfort(MethodRecommendation::NoOutdoorComfortMethod) => {
                ExpectedDispatch::NoOutdoorComfortMethod
            }
        };

        assert_eq!(actual, scenario.expected, "scenario {}", scenario.name);
    }
}

#[test]
fn test_reference_workstation_numbers() {
    let assessment = Assessor::default().assess(&default_input()).unwrap();

    assert_eq!(assessment.heat_index.level, RiskLevel::II);
    assert!((93.0..100.0).contains(&assessment.heat_index.index_f));

    assert!((assessment.wbgt.raw - 30.4).abs() < 1e-9);
    assert!((assessment.wbgt.effective - 32.4).abs() < 1e-9);
    assert_eq!(assessment.wbgt.state, WbgtState::Stress);

    let stress = expect_stress(&assessment);
    let sweat = stress.sweat_rate.limits().expect("sweat rate applies");
    assert_minutes(sweat.alarm_accumulation, 1244.04, 0.05);
    assert_minutes(sweat.danger_accumulation, 1492.85, 0.05);
    assert_minutes(sweat.alarm_dehydration, 516.70, 0.05);
    assert_minutes(sweat.danger_dehydration, 688.93, 0.05);
    assert_eq!(sweat.alarm_accumulation.to_string(), "20h 44min");

    let strain = stress.heat_strain.result().expect("heat strain computed");
    assert_eq!(strain.class, HeatStrainClass::Critical);
    assert_minutes(strain.permissible_exposure, 32.36, 0.05);
}

#[test]
fn test_free_functions_agree_with_assessor() {
    let input = default_input();
    let assessment = Assessor::default().assess(&input).unwrap();
    let stress = expect_stress(&assessment);

    let hi = evaluate_heat_index(32.0, 50.0, false).unwrap();
    assert_eq!(hi, assessment.heat_index);

    let wbgt =
        evaluate_wbgt(false, 32.0, 36.0, 28.0, 2.0, 160.0, Acclimatization::Acclimatized).unwrap();
    assert_eq!(wbgt, assessment.wbgt);

    let sweat = evaluate_sweat_rate(
        32.0,
        36.0,
        28.0,
        0.11,
        160.0,
        0.016,
        Posture::Standing,
        Acclimatization::Acclimatized,
        VentilationMode::Natural,
    )
    .unwrap();
    assert_eq!(sweat, stress.sweat_rate);

    let strain = evaluate_heat_strain(160.0, 0.016, 36.0, 32.0, 28.0, 0.11, 170.0, 70.0).unwrap();
    assert_eq!(Some(&strain), stress.heat_strain.result());
}

#[test]
fn test_not_applicable_sweat_rate_collapses_to_sentinel() {
    let steam = scenarios::all()
        .into_iter()
        .find(|s| s.name == "steam_tunnel")
        .expect("scenario exists");
    let assessment = Assessor::default().assess(&steam.input).unwrap();
    let stress = expect_stress(&assessment);

    let collapsed = stress.sweat_rate.into_limits();
    assert!(collapsed.is_not_applicable());
    assert!(collapsed.alerts().is_empty());
}

#[test]
fn test_strict_limits_reject_what_default_accepts() {
    let mut input = default_input();
    input.task.metabolic_rate_w_m2 = 65.0;

    assert!(Assessor::default().assess(&input).is_ok());

    let strict = Assessor::new(InputLimits::strict());
    assert!(matches!(
        strict.assess(&input),
        Err(EvaluationError::OutOfRange { field: "metabolic_rate_w_m2", .. })
    ));
}

#[test]
fn test_new_hires_get_alerts_but_no_heat_strain() {
    let scenario = scenarios::all()
        .into_iter()
        .find(|s| s.name == "fanned_assembly_new_hires")
        .expect("scenario exists");
    let assessment = Assessor::default().assess(&scenario.input).unwrap();
    let stress = expect_stress(&assessment);

    assert_eq!(
        stress.heat_strain,
        HeatStrainOutcome::Skipped(HeatStrainSkipped::NotAcclimatized)
    );

    let sweat = stress.sweat_rate.limits().expect("sweat rate applies");
    assert_minutes(sweat.alarm_accumulation, 41.62, 0.01);
    assert_eq!(sweat.alarm_accumulation.to_string(), "0h 41min");
    assert_eq!(sweat.alerts().len(), 2);
}
