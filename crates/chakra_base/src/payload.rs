//! Chart payload returned by the ephemeris engine.
//!
//! The engine answers a chart request with a JSON document holding the
//! evaluation date, planets, the ascendant/MC list and house cusps. Only
//! `planets` and `ascmc[0]` feed the projection; the other sections are
//! carried through untouched.

use serde::{Deserialize, Serialize};

use crate::body::{CelestialBody, find_ketu};
use crate::error::ChartError;

/// Display name used for the ascendant in body lists.
pub const ASCENDANT_NAME: &str = "Asc";

/// Calendar instant the engine evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub jd_ut: f64,
}

/// One planet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(flatten)]
    pub body: CelestialBody,
    #[serde(default)]
    pub index: i64,
    /// Ecliptic latitude in degrees.
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub distance: f64,
    /// Longitude speed in degrees/day.
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub iflagret: i64,
    #[serde(default)]
    pub error: i64,
}

impl Planet {
    /// Apparent backward motion along the ecliptic.
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Full engine payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "initDate", default)]
    pub init_date: Vec<InitDate>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    /// Index 0 is the ascendant.
    #[serde(default)]
    pub ascmc: Vec<CelestialBody>,
    #[serde(default)]
    pub house: Vec<CelestialBody>,
}

impl ChartData {
    /// Decode an engine JSON payload.
    pub fn from_json(json: &str) -> Result<ChartData, ChartError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The ascendant entry (`ascmc[0]`).
    pub fn ascendant(&self) -> Result<&CelestialBody, ChartError> {
        self.ascmc.first().ok_or(ChartError::MissingAscendant)
    }

    /// Bodies shown in a chart: ascendant, planets, then Ketu when a lunar
    /// node is present.
    pub fn bodies(&self) -> Result<Vec<CelestialBody>, ChartError> {
        let asc = self.ascendant()?;
        let mut bodies = Vec::with_capacity(self.planets.len() + 2);
        bodies.push(CelestialBody::new(
            ASCENDANT_NAME,
            asc.longitude,
            asc.longitude_display.clone(),
        ));
        bodies.extend(self.planets.iter().map(|p| p.body.clone()));
        if let Some(ketu) = find_ketu(&bodies[1..]) {
            bodies.push(ketu);
        }
        Ok(bodies)
    }
}
