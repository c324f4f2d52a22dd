//! Exposure Time Limits
//!
//! Both heat-balance methods end in a time budget: how many minutes a worker
//! can stay in the environment before a physiological limit is reached.
//! When the body keeps up with the heat load there is no limit at all, which
//! is represented by an unlimited (infinite) duration rather than a magic
//! number. NaN is never a duration: the constructors return `None` for it.
//!
//! ```rust
//! use hems_core::time::ExposureTime;
//!
//! let limit = ExposureTime::from_budget(50.0, 40.0).unwrap();
//! assert_eq!(limit.minutes(), 75.0);
//! assert_eq!(limit.to_string(), "1h 15min");
//!
//! assert_eq!(ExposureTime::UNLIMITED.to_string(), "No limit");
//! assert_eq!(ExposureTime::from_budget(f64::NAN, 40.0), None);
//! ```

use core::fmt;

use crate::constants::time::MINUTES_PER_HOUR;

/// Exposure duration in minutes, possibly unlimited
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExposureTime(f64);

impl ExposureTime {
    /// No time limit applies
    pub const UNLIMITED: Self = Self(f64::INFINITY);

    /// Zero minutes, used only by the required sweat rate sentinel
    pub const ZERO: Self = Self(0.0);

    /// Wrap a duration in minutes, `None` for NaN
    pub fn from_minutes(minutes: f64) -> Option<Self> {
        (!minutes.is_nan()).then_some(Self(minutes))
    }

    /// Time to exhaust `budget` (per hour units) at `rate`
    ///
    /// `60 × budget / rate` minutes. A rate of zero or below never exhausts
    /// the budget, so the result is unlimited. `None` when either operand
    /// is NaN.
    pub fn from_budget(budget: f64, rate: f64) -> Option<Self> {
        if budget.is_nan() || rate.is_nan() {
            None
        } else if rate <= 0.0 {
            Some(Self::UNLIMITED)
        } else {
            Self::from_minutes(MINUTES_PER_HOUR * budget / rate)
        }
    }

    /// Duration in minutes (`f64::INFINITY` when unlimited)
    pub const fn minutes(self) -> f64 {
        self.0
    }

    /// Whether no limit applies
    pub fn is_unlimited(self) -> bool {
        self.0.is_infinite()
    }

    /// Whether this is a finite limit shorter than `minutes`
    pub fn is_shorter_than(self, minutes: f64) -> bool {
        !self.is_unlimited() && self.0 < minutes
    }
}

impl fmt::Display for ExposureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            return f.write_str("No limit");
        }
        let hours = libm::floor(self.0 / MINUTES_PER_HOUR);
        let minutes = libm::floor(self.0 - hours * MINUTES_PER_HOUR);
        write!(f, "{}h {}min", hours as u64, minutes as u64)
    }
}
