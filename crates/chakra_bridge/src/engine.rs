//! Boundary to the external ephemeris engine.
//!
//! The engine is a black box: it takes the positional argument vector built
//! from a [`BirthInfo`] and answers once, either with a JSON chart payload
//! or with a failure. Retries and timeouts belong to the caller.

use std::fs;
use std::path::PathBuf;

use chakra_base::ChartData;
use tracing::{debug, info};

use crate::birth::{BirthInfo, EngineArgs};
use crate::error::{BridgeError, EngineFailure};

/// An ephemeris engine that turns birth arguments into a chart payload.
pub trait EphemerisEngine {
    /// Compute the raw chart for one request. Returns the JSON payload.
    fn compute_raw_chart(&self, args: &EngineArgs) -> Result<String, EngineFailure>;
}

impl<E: EphemerisEngine + ?Sized> EphemerisEngine for &E {
    fn compute_raw_chart(&self, args: &EngineArgs) -> Result<String, EngineFailure> {
        (**self).compute_raw_chart(args)
    }
}

/// Request a chart for `birth` and decode the payload.
///
/// Calls the engine exactly once.
pub fn compute_chart<E: EphemerisEngine>(
    engine: &E,
    birth: &BirthInfo,
) -> Result<ChartData, BridgeError> {
    let args = birth.engine_args();
    info!(
        location = %birth.location_name,
        house_system = %birth.house_system.unwrap_or_default(),
        "requesting chart"
    );
    debug!(args = %args.to_json(), "engine arguments");

    let payload = engine.compute_raw_chart(&args)?;
    let data = ChartData::from_json(&payload)?;
    debug!(
        planets = data.planets.len(),
        ascmc = data.ascmc.len(),
        "chart payload decoded"
    );
    Ok(data)
}

/// Engine that answers every request with the same outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticEngine {
    outcome: Result<String, EngineFailure>,
}

impl StaticEngine {
    pub fn payload(json: impl Into<String>) -> Self {
        Self {
            outcome: Ok(json.into()),
        }
    }

    pub fn failing(failure: EngineFailure) -> Self {
        Self {
            outcome: Err(failure),
        }
    }
}

impl EphemerisEngine for StaticEngine {
    fn compute_raw_chart(&self, _args: &EngineArgs) -> Result<String, EngineFailure> {
        self.outcome.clone()
    }
}

/// Engine backed by a payload previously computed and saved to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEngine {
    path: PathBuf,
}

impl FileEngine {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EphemerisEngine for FileEngine {
    fn compute_raw_chart(&self, _args: &EngineArgs) -> Result<String, EngineFailure> {
        fs::read_to_string(&self.path).map_err(|e| {
            EngineFailure::Unavailable(format!("{}: {e}", self.path.display()))
        })
    }
}
