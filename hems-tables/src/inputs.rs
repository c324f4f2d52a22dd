//! Environmental input resolution
//!
//! Measurements usually arrive as a table of samples, one column per
//! quantity. Each quantity resolves to the mean of its samples; a column
//! that is absent, or present with no usable sample, falls back to a
//! default. The caller gets the reading plus a record of where each value
//! came from, so a report can say which numbers were measured.
//!
//! ```rust
//! use hems_tables::inputs::{resolve_reading, DRY_BULB_COLUMN, GLOBE_COLUMN};
//!
//! let dry = [31.0, 33.0];
//! let globe = [f64::NAN];
//! let resolved = resolve_reading([(DRY_BULB_COLUMN, &dry[..]), (GLOBE_COLUMN, &globe[..])]);
//!
//! assert_eq!(resolved.reading.dry_bulb_c, 32.0);
//! assert_eq!(resolved.reading.globe_c, 36.0); // default
//! assert_eq!(resolved.empty, vec![GLOBE_COLUMN]);
//! ```

use hems_core::EnvironmentalReading;

/// Dry-bulb temperature column (°C)
pub const DRY_BULB_COLUMN: &str = "Dry-bulb temperature";
/// Globe temperature column (°C)
pub const GLOBE_COLUMN: &str = "Globe temperature";
/// Wet-bulb temperature column (°C)
pub const WET_BULB_COLUMN: &str = "Wet-bulb temperature";
/// Air speed column (m/s)
pub const AIR_SPEED_COLUMN: &str = "Air speed";
/// Relative humidity column (%)
pub const HUMIDITY_COLUMN: &str = "Relative humidity";

/// Values used when a column provides nothing
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadingDefaults {
    /// Fallback reading
    pub reading: EnvironmentalReading,
}

impl Default for ReadingDefaults {
    fn default() -> Self {
        Self {
            reading: EnvironmentalReading {
                dry_bulb_c: 32.0,
                globe_c: 36.0,
                wet_bulb_c: 28.0,
                air_speed_m_s: 0.016,
                relative_humidity_pct: 50.0,
            },
        }
    }
}

/// Resolved reading with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedReading {
    /// Values to assess
    pub reading: EnvironmentalReading,
    /// Columns whose mean was used
    pub found: Vec<&'static str>,
    /// Columns absent from the input
    pub missing: Vec<&'static str>,
    /// Columns present without any finite sample
    pub empty: Vec<&'static str>,
}

impl ResolvedReading {
    /// Whether every value came from the measurements
    pub fn fully_measured(&self) -> bool {
        self.missing.is_empty() && self.empty.is_empty()
    }
}

/// Resolve with the standard defaults
pub fn resolve_reading<'a>(
    columns: impl IntoIterator<Item = (&'a str, &'a [f64])>,
) -> ResolvedReading {
    resolve_reading_with(columns, &ReadingDefaults::default())
}

/// Resolve with caller-supplied defaults
///
/// Unknown columns are ignored. Non-finite samples are treated as blanks.
/// If a column name appears more than once, the first occurrence wins.
pub fn resolve_reading_with<'a>(
    columns: impl IntoIterator<Item = (&'a str, &'a [f64])>,
    defaults: &ReadingDefaults,
) -> ResolvedReading {
    let columns: Vec<(&str, &[f64])> = columns.into_iter().collect();
    let mut resolved = ResolvedReading {
        reading: defaults.reading,
        found: Vec::new(),
        missing: Vec::new(),
        empty: Vec::new(),
    };

    let targets: [(&'static str, &mut f64); 5] = [
        (DRY_BULB_COLUMN, &mut resolved.reading.dry_bulb_c),
        (GLOBE_COLUMN, &mut resolved.reading.globe_c),
        (WET_BULB_COLUMN, &mut resolved.reading.wet_bulb_c),
        (AIR_SPEED_COLUMN, &mut resolved.reading.air_speed_m_s),
        (HUMIDITY_COLUMN, &mut resolved.reading.relative_humidity_pct),
    ];

    for (name, slot) in targets {
        match columns.iter().find(|(column, _)| column.trim() == name) {
            None => {
                log::debug!("column {:?} missing, default {}", name, slot);
                resolved.missing.push(name);
            }
            Some((_, samples)) => match mean(samples) {
                Some(value) => {
                    *slot = value;
                    resolved.found.push(name);
                }
                None => {
                    log::warn!("column {:?} has no usable samples, default {}", name, slot);
                    resolved.empty.push(name);
                }
            },
        }
    }

    resolved
}

fn mean(samples: &[f64]) -> Option<f64> {
    let (sum, count) = samples
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_columns_gives_defaults() {
        let resolved = resolve_reading(std::iter::empty());
        assert_eq!(resolved.reading, ReadingDefaults::default().reading);
        assert_eq!(resolved.missing.len(), 5);
        assert!(!resolved.fully_measured());
    }

    #[test]
    fn means_skip_blanks() {
        let humidity = [40.0, f64::NAN, 60.0];
        let resolved = resolve_reading([(HUMIDITY_COLUMN, &humidity[..])]);
        assert_eq!(resolved.reading.relative_humidity_pct, 50.0);
        assert_eq!(resolved.found, vec![HUMIDITY_COLUMN]);
    }

    #[test]
    fn all_columns_measured() {
        let dry = [30.0];
        let globe = [40.0, 42.0];
        let wet = [25.0];
        let speed = [0.2, 0.4];
        let humidity = [55.0];
        let resolved = resolve_reading([
            (DRY_BULB_COLUMN, &dry[..]),
            (GLOBE_COLUMN, &globe[..]),
            (WET_BULB_COLUMN, &wet[..]),
            (AIR_SPEED_COLUMN, &speed[..]),
            (HUMIDITY_COLUMN, &humidity[..]),
            ("Operator", &[][..]),
        ]);
        assert!(resolved.fully_measured());
        assert_eq!(resolved.reading.globe_c, 41.0);
        assert!((resolved.reading.air_speed_m_s - 0.3).abs() < 1e-12);
    }

    #[test]
    fn custom_defaults() {
        let defaults = ReadingDefaults {
            reading: EnvironmentalReading {
                air_speed_m_s: 0.5,
                ..ReadingDefaults::default().reading
            },
        };
        let speed: [f64; 0] = [];
        let resolved = resolve_reading_with([(AIR_SPEED_COLUMN, &speed[..])], &defaults);
        assert_eq!(resolved.reading.air_speed_m_s, 0.5);
        assert_eq!(resolved.empty, vec![AIR_SPEED_COLUMN]);
    }
}
