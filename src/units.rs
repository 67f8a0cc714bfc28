//! The fixed set of time units and their factor-to-seconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// A selectable time unit. Seconds is the base unit every conversion pivots on.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Seconds = 0,
    Minutes = 1,
    Hours = 2,
    Days = 3,
}

impl Unit {
    /// Display order of the unit pickers.
    pub const ALL: [Unit; 4] = [Unit::Seconds, Unit::Minutes, Unit::Hours, Unit::Days];

    /// How many seconds make up one of this unit.
    pub fn seconds_per_unit(self) -> f64 {
        match self {
            Unit::Seconds => 1.0,
            Unit::Minutes => SECONDS_PER_MINUTE,
            Unit::Hours => SECONDS_PER_HOUR,
            Unit::Days => SECONDS_PER_DAY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Seconds => "Seconds",
            Unit::Minutes => "Minutes",
            Unit::Hours => "Hours",
            Unit::Days => "Days",
        }
    }

    /// Position of this unit in [`Unit::ALL`].
    pub fn index(self) -> usize {
        match self {
            Unit::Seconds => 0,
            Unit::Minutes => 1,
            Unit::Hours => 2,
            Unit::Days => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a unit name matches none of the supported time units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnitError(pub String);

impl fmt::Display for UnknownUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown time unit '{}'. Use seconds, minutes, hours or days",
            self.0
        )
    }
}

impl std::error::Error for UnknownUnitError {}

impl FromStr for Unit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Unit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(Unit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Unit::Hours),
            "d" | "day" | "days" => Ok(Unit::Days),
            _ => Err(UnknownUnitError(s.trim().to_string())),
        }
    }
}

/// Serializable description of a unit, handed to JavaScript hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    pub unit: Unit,
    pub label: &'static str,
    pub seconds: f64,
}

impl From<Unit> for UnitInfo {
    fn from(unit: Unit) -> Self {
        Self {
            unit,
            label: unit.label(),
            seconds: unit.seconds_per_unit(),
        }
    }
}

/// All units in display order, with their labels and factors.
pub fn unit_infos() -> Vec<UnitInfo> {
    Unit::ALL.iter().copied().map(UnitInfo::from).collect()
}
