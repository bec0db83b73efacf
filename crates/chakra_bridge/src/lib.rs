//! Birth data and ephemeris engine boundary.
//!
//! This crate provides:
//! - Birth-form validation that reports every failing field at once
//! - The positional argument vector the ephemeris engine expects
//! - The [`EphemerisEngine`] seam and a single-shot [`compute_chart`] call
//!   that decodes the engine payload into [`chakra_base::ChartData`]

pub mod birth;
pub mod engine;
pub mod error;
pub mod validate;

pub use birth::{BirthInfo, EngineArg, EngineArgs, HouseSystem, VEDIC_TAG};
pub use engine::{EphemerisEngine, FileEngine, StaticEngine, compute_chart};
pub use error::{BridgeError, EngineFailure, FormErrors, UnknownHouseSystem};
pub use validate::{
    BirthForm, Field, validate_altitude, validate_date, validate_house_system,
    validate_latitude, validate_location_name, validate_longitude, validate_time,
    validate_timezone,
};
