//! Input value objects
//!
//! Everything an assessment needs arrives as plain scalars grouped into a few
//! immutable records. Categorical choices that used to be free-form strings
//! (posture, ventilation, acclimatization) are closed enumerations so every
//! `match` on them is checked for coverage.

/// Snapshot of the thermal environment at the workstation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalReading {
    /// Dry-bulb air temperature (°C)
    pub dry_bulb_c: f64,
    /// Black globe temperature (°C)
    pub globe_c: f64,
    /// Natural wet-bulb temperature (°C)
    pub wet_bulb_c: f64,
    /// Air speed (m/s)
    pub air_speed_m_s: f64,
    /// Relative humidity (%)
    pub relative_humidity_pct: f64,
}

/// Working posture, fixing the fraction of skin exchanging radiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Posture {
    /// Standing
    #[default]
    Standing,
    /// Sitting
    Sitting,
    /// Crouching
    Crouching,
}

impl Posture {
    /// Effective radiating area over DuBois area (Ar/Adu)
    pub const fn radiating_area_ratio(self) -> f64 {
        match self {
            Posture::Standing => 0.77,
            Posture::Sitting => 0.70,
            Posture::Crouching => 0.67,
        }
    }
}

/// How air moves across the workstation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VentilationMode {
    /// Natural convection only
    #[default]
    Natural,
    /// Fans or forced air
    Forced,
}

/// Whether the exposed population is adapted to heat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acclimatization {
    /// Adapted after repeated heat exposure
    Acclimatized,
    /// New or returning workers
    NotAcclimatized,
}

impl Acclimatization {
    /// Convert a yes/no answer
    pub const fn from_bool(acclimatized: bool) -> Self {
        if acclimatized {
            Acclimatization::Acclimatized
        } else {
            Acclimatization::NotAcclimatized
        }
    }

    /// Whether the population is acclimatized
    pub const fn is_acclimatized(self) -> bool {
        matches!(self, Acclimatization::Acclimatized)
    }
}

/// Characteristics of the task performed in the environment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskContext {
    /// Working posture
    pub posture: Posture,
    /// Heat acclimatization of the workers
    pub acclimatization: Acclimatization,
    /// Ventilation of the work area
    pub ventilation: VentilationMode,
    /// Work performed under direct sun
    pub solar_exposed: bool,
    /// Ensemble includes a hood
    pub hood_worn: bool,
    /// Metabolic rate (W/m²)
    pub metabolic_rate_w_m2: f64,
}

/// Clothing expressed in both of its independent systems
///
/// `cavs_c` comes from the garment-set CAVS table and only feeds the WBGT.
/// `iclo` comes from the garment-resistance table and only feeds the heat
/// balance methods. Neither can be derived from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothingInsulation {
    /// Clothing adjustment value added to the WBGT (°C), hood not included
    pub cavs_c: f64,
    /// Clothing thermal resistance (m²·K/W)
    pub iclo: f64,
}

/// Anthropometry of a representative worker
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerProfile {
    /// Height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
}

impl Default for WorkerProfile {
    fn default() -> Self {
        Self { height_cm: 170.0, weight_kg: 70.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posture_area_ratios() {
        assert_eq!(Posture::Standing.radiating_area_ratio(), 0.77);
        assert_eq!(Posture::Sitting.radiating_area_ratio(), 0.70);
        assert_eq!(Posture::Crouching.radiating_area_ratio(), 0.67);
    }

    #[test]
    fn acclimatization_from_answer() {
        assert!(Acclimatization::from_bool(true).is_acclimatized());
        assert_eq!(Acclimatization::from_bool(false), Acclimatization::NotAcclimatized);
    }
}
