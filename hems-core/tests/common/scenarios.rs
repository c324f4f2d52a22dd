//! Pre-built workstation scenarios
//!
//! Each scenario pairs an input with the outcome a hygienist would expect,
//! covering:
//! - Indoor foundry-style heat with radiant load
//! - Fanned assembly work by new hires
//! - Outdoor summer work under sun
//! - Cool rooms that only call for a comfort method
//! - Saturated air where the required sweat rate does not apply

use hems_core::{
    Acclimatization, AssessmentInput, ClothingInsulation, EnvironmentalReading, Posture,
    TaskContext, VentilationMode, WorkerProfile,
};

use super::{coverall, default_input, indoor_reading, moderate_task};

/// What the dispatch should decide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedDispatch {
    /// Stress, heat strain index computed
    StressWithHeatStrain,
    /// Stress, heat strain index skipped
    StressWithoutHeatStrain,
    /// Stress, sweat rate method not applicable
    StressSweatRateNotApplicable,
    /// Discomfort indoors
    ComfortIndoor,
    /// Discomfort under sun
    NoOutdoorComfortMethod,
}

/// Scenario with its expected dispatch
pub struct Scenario {
    pub name: &'static str,
    pub input: AssessmentInput,
    pub expected: ExpectedDispatch,
}

/// All scenarios
pub fn all() -> [Scenario; 6] {
    [
        Scenario {
            name: "indoor_radiant_heat",
            input: default_input(),
            expected: ExpectedDispatch::StressWithHeatStrain,
        },
        Scenario {
            name: "fanned_assembly_new_hires",
            input: AssessmentInput {
                reading: EnvironmentalReading { air_speed_m_s: 0.5, ..indoor_reading() },
                task: TaskContext {
                    posture: Posture::Sitting,
                    acclimatization: Acclimatization::NotAcclimatized,
                    ventilation: VentilationMode::Forced,
                    ..moderate_task(300.0)
                },
                clothing: coverall(),
                worker: WorkerProfile::default(),
            },
            expected: ExpectedDispatch::StressWithoutHeatStrain,
        },
        Scenario {
            name: "outdoor_summer_roadwork",
            input: AssessmentInput {
                reading: EnvironmentalReading {
                    dry_bulb_c: 35.0,
                    globe_c: 50.0,
                    wet_bulb_c: 26.0,
                    air_speed_m_s: 1.0,
                    relative_humidity_pct: 45.0,
                },
                task: TaskContext { solar_exposed: true, ..moderate_task(230.0) },
                clothing: ClothingInsulation { cavs_c: 0.0, iclo: 0.08 },
                worker: WorkerProfile { height_cm: 180.0, weight_kg: 85.0 },
            },
            expected: ExpectedDispatch::StressWithHeatStrain,
        },
        Scenario {
            name: "air_conditioned_office",
            input: AssessmentInput {
                reading: EnvironmentalReading {
                    dry_bulb_c: 24.0,
                    globe_c: 24.0,
                    wet_bulb_c: 18.0,
                    air_speed_m_s: 0.1,
                    relative_humidity_pct: 50.0,
                },
                task: moderate_task(65.0),
                clothing: ClothingInsulation { cavs_c: 0.0, iclo: 0.08 },
                worker: WorkerProfile::default(),
            },
            expected: ExpectedDispatch::ComfortIndoor,
        },
        Scenario {
            name: "spring_field_inspection",
            input: AssessmentInput {
                reading: EnvironmentalReading {
                    dry_bulb_c: 22.0,
                    globe_c: 30.0,
                    wet_bulb_c: 15.0,
                    air_speed_m_s: 2.0,
                    relative_humidity_pct: 40.0,
                },
                task: TaskContext { solar_exposed: true, ..moderate_task(100.0) },
                clothing: ClothingInsulation { cavs_c: 0.0, iclo: 0.08 },
                worker: WorkerProfile::default(),
            },
            expected: ExpectedDispatch::NoOutdoorComfortMethod,
        },
        Scenario {
            name: "steam_tunnel",
            input: AssessmentInput {
                reading: EnvironmentalReading {
                    dry_bulb_c: 45.0,
                    globe_c: 46.0,
                    wet_bulb_c: 44.0,
                    air_speed_m_s: 0.1,
                    relative_humidity_pct: 95.0,
                },
                task: moderate_task(200.0),
                clothing: coverall(),
                worker: WorkerProfile::default(),
            },
            expected: ExpectedDispatch::StressSweatRateNotApplicable,
        },
    ]
}
