//! Birth-event data and the argument vector handed to the ephemeris engine.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::UnknownHouseSystem;

/// House system requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Whole sign houses, the Vedic default.
    #[default]
    WholeSign,
    Placidus,
}

impl HouseSystem {
    /// Single-letter engine code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::WholeSign => "W",
            Self::Placidus => "P",
        }
    }
}

impl Display for HouseSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HouseSystem {
    type Err = UnknownHouseSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Self::WholeSign),
            "P" => Ok(Self::Placidus),
            _ => Err(UnknownHouseSystem(s.to_string())),
        }
    }
}

/// Birth event as entered by the user, in local civil time.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInfo {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Offset from UTC in minutes (e.g. 330 for IST, -300 for EST).
    pub timezone_minutes: i32,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
    pub location_name: String,
    /// Metres above sea level.
    pub altitude: Option<f64>,
    pub house_system: Option<HouseSystem>,
}

/// One slot of the engine argument vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineArg {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Engine config tag selecting sidereal (Vedic) output.
pub const VEDIC_TAG: &str = "vedic";

/// Positional argument vector for the engine's chart call.
///
/// | slot | value |
/// |------|-------|
/// | 0-5  | year, month, day, hour, minute, second |
/// | 6    | timezone offset (minutes) |
/// | 7-8  | latitude, longitude |
/// | 9    | location name |
/// | 10   | altitude (0 when absent) |
/// | 11-12| reserved flags, always 0 |
/// | 13   | house system code (`W` when absent) |
/// | 14   | `"vedic"` |
/// | 15   | Vedic call selector, always 1 |
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EngineArgs(pub Vec<EngineArg>);

impl EngineArgs {
    pub const LEN: usize = 16;

    pub fn as_slice(&self) -> &[EngineArg] {
        &self.0
    }

    /// JSON array form, as posted to the engine.
    pub fn to_json(&self) -> String {
        // Serializing numbers and strings cannot fail; NaN becomes null.
        serde_json::to_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }
}

impl BirthInfo {
    pub fn engine_args(&self) -> EngineArgs {
        use EngineArg::{Float, Int, Text};
        EngineArgs(vec![
            Int(self.year.into()),
            Int(self.month.into()),
            Int(self.day.into()),
            Int(self.hour.into()),
            Int(self.minute.into()),
            Int(self.second.into()),
            Int(self.timezone_minutes.into()),
            Float(self.latitude),
            Float(self.longitude),
            Text(self.location_name.clone()),
            Float(self.altitude.unwrap_or(0.0)),
            Int(0),
            Int(0),
            Text(self.house_system.unwrap_or_default().code().to_string()),
            Text(VEDIC_TAG.to_string()),
            Int(1),
        ])
    }
}
