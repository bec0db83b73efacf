//! Divisional-chart projection and whole-sign house assignment.
//!
//! This crate provides:
//! - Rashi and nakshatra/pada/lord lookup for ecliptic longitudes
//! - D-1 and D-9 (Navamsha) longitude projection
//! - Whole-sign house assignment and grouping of bodies by house
//! - Ketu derivation from the engine's lunar node
//! - Decoding of the ephemeris engine's chart payload into a chart view
//!
//! Every computation is pure: longitudes in, values out.

pub mod amsha;
pub mod bhava;
pub mod body;
pub mod error;
pub mod nakshatra;
pub mod payload;
pub mod rashi;
pub mod util;
pub mod view;

pub use amsha::{
    ALL_CHARTS, DivisionalChart, NAVAMSHA_SPAN, ProjectionConfig, RASHI_ELEMENTS, RashiElement,
    navamsha_longitude, navamsha_start_rashi, project_longitude, project_longitude_by_id,
    project_rashi_info, rashi_element,
};
pub use bhava::{HouseBuckets, group_by_house, whole_sign_house};
pub use body::{CelestialBody, KETU_NAME, RAHU_NAMES, derive_ketu, find_ketu, is_rahu_name};
pub use error::ChartError;
pub use nakshatra::{
    ALL_NAKSHATRAS, LORD_CYCLE, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, NakshatraLord,
    PADA_SPAN, nakshatra_from_longitude,
};
pub use payload::{ASCENDANT_NAME, ChartData, InitDate, Planet};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_for_house,
    rashi_from_longitude, zodiac_sign,
};
pub use util::normalize_360;
pub use view::{BodyDetail, ChartView, GRID_LAYOUT, GridCell, HouseView, abbreviation};
