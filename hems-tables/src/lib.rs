//! Reference Tables for Heat Stress Assessment
//!
//! ## Overview
//!
//! The evaluators in `hems-core` take plain numbers. Turning "woven coveralls"
//! or "moderate work" into those numbers is a lookup in one of three tables:
//!
//! | Table       | Key                | Value                       | Feeds          |
//! |-------------|--------------------|-----------------------------|----------------|
//! | `cavs`      | garment ensemble   | CAVS correction (°C)        | WBGT           |
//! | `clothing`  | garment ensemble   | Iclo (m²·K/W)               | SWreq, ISC     |
//! | `metabolic` | activity           | metabolic rate (W/m²)       | all but HI     |
//!
//! CAVS and Iclo are separate systems: an ensemble present in one table need
//! not appear in the other, and neither value can be derived from the other.
//!
//! ## Loading
//!
//! ```rust
//! use hems_tables::{ReferenceTables, DEFAULT_TABLES};
//!
//! // Built-in tables, built once on first use
//! let cavs = DEFAULT_TABLES.cavs_for("Double-layer woven clothing")?;
//! assert_eq!(cavs, 3.0);
//!
//! // Site-specific tables
//! let tables = ReferenceTables::from_json_str(r#"{
//!     "cavs": [{ "ensemble": "Foundry apron", "cavs_c": 2.0 }],
//!     "clothing": [{ "ensemble": "Foundry apron", "iclo": 0.12 }],
//!     "metabolic": [{ "activity": "Shovelling", "rate_w_m2": 290.0 }]
//! }"#)?;
//! assert_eq!(tables.metabolic_rate_for("Shovelling")?, 290.0);
//! # Ok::<(), hems_tables::TableError>(())
//! ```
//!
//! Every loaded table is validated: values must be finite, Iclo non-negative,
//! metabolic rates positive, and names unique within a table.
//!
//! ## Input Resolution
//!
//! [`inputs`] turns measured columns into an
//! [`EnvironmentalReading`](hems_core::EnvironmentalReading), falling back to
//! defaults for columns that are missing or empty.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use hems_core::ClothingInsulation;

pub mod defaults;
pub mod inputs;

/// Table errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum TableError {
    /// Key absent from a table
    #[error("{key:?} not found in {table} table")]
    NotFound {
        /// Table searched
        table: &'static str,
        /// Key looked up
        key: String,
    },

    /// Malformed JSON
    #[error("Failed to parse tables: {0}")]
    Parse(String),

    /// File could not be read
    #[error("Failed to read tables: {0}")]
    Io(String),

    /// Well-formed but unusable entry
    #[error("Invalid table entry: {0}")]
    Invalid(String),
}

/// Garment ensemble with its WBGT clothing adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CavsEntry {
    /// Ensemble name
    pub ensemble: String,
    /// Clothing adjustment value (°C)
    pub cavs_c: f64,
}

/// Garment ensemble with its thermal resistance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingEntry {
    /// Ensemble name
    pub ensemble: String,
    /// Clothing thermal resistance (m²·K/W)
    pub iclo: f64,
}

/// Activity with a typical metabolic rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetabolicEntry {
    /// Activity description
    pub activity: String,
    /// Metabolic rate (W/m²)
    pub rate_w_m2: f64,
}

/// The three lookup tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    /// Ensemble → CAVS
    pub cavs: Vec<CavsEntry>,
    /// Ensemble → Iclo
    pub clothing: Vec<ClothingEntry>,
    /// Activity → metabolic rate (advisory)
    pub metabolic: Vec<MetabolicEntry>,
}

impl ReferenceTables {
    /// Built-in ISO tables
    pub fn defaults() -> Result<Self, TableError> {
        let tables: Self = serde_json::from_value(defaults::tables_json())
            .map_err(|e| TableError::Parse(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate tables from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let tables: Self =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        tables.validate()?;
        log::debug!(
            "loaded {} CAVS, {} clothing and {} metabolic entries",
            tables.cavs.len(),
            tables.clothing.len(),
            tables.metabolic.len()
        );
        Ok(tables)
    }

    /// Parse and validate tables from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| TableError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, TableError> {
        serde_json::to_string_pretty(self).map_err(|e| TableError::Parse(e.to_string()))
    }

    /// CAVS (°C) of a garment ensemble
    pub fn cavs_for(&self, ensemble: &str) -> Result<f64, TableError> {
        find(&self.cavs, ensemble, |e| &e.ensemble)
            .map(|e| e.cavs_c)
            .ok_or_else(|| not_found("CAVS", ensemble))
    }

    /// Iclo (m²·K/W) of a garment ensemble
    pub fn iclo_for(&self, ensemble: &str) -> Result<f64, TableError> {
        find(&self.clothing, ensemble, |e| &e.ensemble)
            .map(|e| e.iclo)
            .ok_or_else(|| not_found("clothing", ensemble))
    }

    /// Metabolic rate (W/m²) of an activity
    pub fn metabolic_rate_for(&self, activity: &str) -> Result<f64, TableError> {
        find(&self.metabolic, activity, |e| &e.activity)
            .map(|e| e.rate_w_m2)
            .ok_or_else(|| not_found("metabolic", activity))
    }

    /// Clothing in both systems from the two ensemble selections
    ///
    /// The hood increment is not applied here.
    pub fn clothing_insulation(
        &self,
        cavs_ensemble: &str,
        clothing_ensemble: &str,
    ) -> Result<ClothingInsulation, TableError> {
        Ok(ClothingInsulation {
            cavs_c: self.cavs_for(cavs_ensemble)?,
            iclo: self.iclo_for(clothing_ensemble)?,
        })
    }

    /// Check every entry
    pub fn validate(&self) -> Result<(), TableError> {
        for entry in &self.cavs {
            check_value("CAVS", &entry.ensemble, entry.cavs_c, |v| v.is_finite())?;
        }
        for entry in &self.clothing {
            check_value("clothing", &entry.ensemble, entry.iclo, |v| v.is_finite() && v >= 0.0)?;
        }
        for entry in &self.metabolic {
            check_value("metabolic", &entry.activity, entry.rate_w_m2, |v| {
                v.is_finite() && v > 0.0
            })?;
        }

        check_unique("CAVS", self.cavs.iter().map(|e| e.ensemble.as_str()))?;
        check_unique("clothing", self.clothing.iter().map(|e| e.ensemble.as_str()))?;
        check_unique("metabolic", self.metabolic.iter().map(|e| e.activity.as_str()))?;
        Ok(())
    }
}

fn find<'a, T>(entries: &'a [T], key: &str, name: impl Fn(&T) -> &String) -> Option<&'a T> {
    let key = key.trim();
    entries.iter().find(|e| name(e).eq_ignore_ascii_case(key))
}

fn not_found(table: &'static str, key: &str) -> TableError {
    TableError::NotFound { table, key: key.to_string() }
}

fn check_value(
    table: &str,
    name: &str,
    value: f64,
    ok: impl Fn(f64) -> bool,
) -> Result<(), TableError> {
    if name.trim().is_empty() {
        return Err(TableError::Invalid(format!("{} table has an unnamed entry", table)));
    }
    if !ok(value) {
        return Err(TableError::Invalid(format!("{} entry {:?} has value {}", table, name, value)));
    }
    Ok(())
}

fn check_unique<'a>(table: &str, names: impl Iterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        let normalized = name.trim().to_ascii_lowercase();
        if seen.contains(&normalized) {
            return Err(TableError::Invalid(format!("{} table lists {:?} twice", table, name)));
        }
        seen.push(normalized);
    }
    Ok(())
}

lazy_static::lazy_static! {
    /// Built-in tables, validated on first use
    ///
    /// Panics if the built-in data fails validation.
    pub static ref DEFAULT_TABLES: ReferenceTables =
        ReferenceTables::defaults().expect("built-in tables are valid");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_table() {
        let tables = ReferenceTables::defaults().unwrap();
        assert_eq!(tables.cavs.len(), 6);
        assert_eq!(tables.cavs_for("Limited-use vapour-barrier coveralls").unwrap(), 11.0);
        assert_eq!(tables.iclo_for("Underpants, coverall, socks, shoes").unwrap(), 0.11);
        assert_eq!(tables.metabolic_rate_for("Moderate metabolic rate").unwrap(), 165.0);
        assert_eq!(*DEFAULT_TABLES, tables);
    }

    #[test]
    fn global_tables_are_populated() {
        assert!(!DEFAULT_TABLES.cavs.is_empty());
        assert!(!DEFAULT_TABLES.clothing.is_empty());
        assert!(!DEFAULT_TABLES.metabolic.is_empty());
        assert!(DEFAULT_TABLES.validate().is_ok());
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(DEFAULT_TABLES.cavs_for("  woven coveralls ").unwrap(), 0.0);
    }

    #[test]
    fn missing_key_names_table() {
        let err = DEFAULT_TABLES.iclo_for("Chainmail").unwrap_err();
        match err {
            TableError::NotFound { table, key } => {
                assert_eq!(table, "clothing");
                assert_eq!(key, "Chainmail");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clothing_systems_stay_separate() {
        let clothing = DEFAULT_TABLES
            .clothing_insulation(
                "Double-layer woven clothing",
                "Underwear, shirt, trousers, jacket, socks, shoes",
            )
            .unwrap();
        assert_eq!(clothing.cavs_c, 3.0);
        assert_eq!(clothing.iclo, 0.155);
    }

    #[test]
    fn rejects_negative_iclo() {
        let err = ReferenceTables::from_json_str(
            r#"{"cavs": [], "clothing": [{"ensemble": "x", "iclo": -0.1}], "metabolic": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = ReferenceTables::from_json_str(
            r#"{"cavs": [], "clothing": [], "metabolic": [
                {"activity": "Walking", "rate_w_m2": 110.0},
                {"activity": "walking", "rate_w_m2": 120.0}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ReferenceTables::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = DEFAULT_TABLES.to_json_string().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = ReferenceTables::from_path(file.path()).unwrap();
        assert_eq!(loaded, *DEFAULT_TABLES);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceTables::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
