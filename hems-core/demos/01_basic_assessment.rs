//! Basic Heat Stress Assessment
//!
//! Assesses one indoor workstation end to end and prints what a hygienist
//! would put in a report.
//!
//! ## What You'll Learn
//!
//! - Describing a workstation with the input records
//! - Running the dispatch through an `Assessor`
//! - Reading the stress branch: time limits, alerts, heat strain advice
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p hems-core --example 01_basic_assessment
//! ```

use hems_core::{
    assessment::{HeatStrainOutcome, ThermalEvaluation},
    Acclimatization, AssessmentInput, Assessor, ClothingInsulation, EnvironmentalReading,
    InputLimits, Posture, SweatRateOutcome, TaskContext, VentilationMode, WorkerProfile,
};

fn main() {
    println!("HEMS Basic Assessment Example");
    println!("=============================\n");

    let input = AssessmentInput {
        reading: EnvironmentalReading {
            dry_bulb_c: 32.0,
            globe_c: 36.0,
            wet_bulb_c: 28.0,
            air_speed_m_s: 0.016,
            relative_humidity_pct: 50.0,
        },
        task: TaskContext {
            posture: Posture::Standing,
            acclimatization: Acclimatization::Acclimatized,
            ventilation: VentilationMode::Natural,
            solar_exposed: false,
            hood_worn: false,
            metabolic_rate_w_m2: 160.0,
        },
        clothing: ClothingInsulation { cavs_c: 2.0, iclo: 0.11 },
        worker: WorkerProfile { height_cm: 175.0, weight_kg: 78.0 },
    };

    let assessor = Assessor::new(InputLimits::strict());
    let assessment = match assessor.assess(&input) {
        Ok(assessment) => assessment,
        Err(e) => {
            println!("Input rejected: {e}");
            return;
        }
    };

    let hi = &assessment.heat_index;
    println!("Heat Index: {:.1} °F (level {:?})", hi.index_f, hi.level);
    println!("  {}", hi.effect);
    for measure in hi.measures {
        println!("  - {measure}");
    }
    println!();

    let wbgt = &assessment.wbgt;
    println!("WBGT");
    println!("  Raw:       {:.2} °C", wbgt.raw);
    println!("  Effective: {:.2} °C (CAVS {:+.1})", wbgt.effective, assessment.effective_cavs_c);
    println!("  Reference: {:.2} °C", wbgt.reference);
    println!("  State:     {:?}\n", wbgt.state);

    match assessment.evaluation {
        ThermalEvaluation::Stress(stress) => {
            match stress.sweat_rate {
                SweatRateOutcome::Limits(limits) => {
                    println!("Required sweat rate");
                    println!(
                        "  Heat accumulation  alarm {:>12}  danger {:>12}",
                        limits.alarm_accumulation.to_string(),
                        limits.danger_accumulation.to_string()
                    );
                    println!(
                        "  Dehydration        alarm {:>12}  danger {:>12}",
                        limits.alarm_dehydration.to_string(),
                        limits.danger_dehydration.to_string()
                    );
                    for alert in limits.alerts() {
                        println!("  ! {:?} {:?}: {}", alert.kind, alert.severity, alert.action());
                    }
                }
                SweatRateOutcome::NotApplicable { max_evaporation } => {
                    println!(
                        "Required sweat rate not applicable (Emax = {max_evaporation:.1} W/m²)"
                    );
                }
            }
            println!();

            match stress.heat_strain {
                HeatStrainOutcome::Evaluated(isc) => {
                    println!("Heat strain index: {:.1}% ({})", isc.index_pct, isc.class.label());
                    println!("  {}", isc.class.advice());
                    println!("  Permissible exposure: {}", isc.permissible_exposure);
                    println!("  Body surface area:    {:.2} m²", isc.body_surface_area_m2);
                }
                HeatStrainOutcome::Skipped(reason) => {
                    println!("Heat strain index skipped: {reason:?}");
                }
            }
        }
        ThermalEvaluation::Discomfort(recommendation) => {
            println!("{}", recommendation.advice());
        }
    }
}
