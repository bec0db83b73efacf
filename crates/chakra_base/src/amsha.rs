//! Amsha (divisional chart / varga) projections.
//!
//! Transforms a D-1 longitude through a divisional mapping to produce the
//! longitude in the varga chart. D-1 is the identity. D-9 (Navamsha) divides
//! each 30-degree rashi into 9 segments of 3 deg 20' and maps the segments
//! onto a sign sequence whose start depends on the element of the natal
//! rashi.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::warn;

use crate::error::ChartError;
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::{RASHI_SPAN, normalize_360, sign_index};

// ---------------------------------------------------------------------------
// Rashi element classification
// ---------------------------------------------------------------------------

/// Rashi element classification (for element-based starting rashi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Element of each rashi by 0-based index.
///
/// Fire: 0,4,8 (Mesha, Simha, Dhanu)
/// Earth: 1,5,9 (Vrishabha, Kanya, Makara)
/// Air: 2,6,10 (Mithuna, Tula, Kumbha)
/// Water: 3,7,11 (Karka, Vrischika, Meena)
pub const RASHI_ELEMENTS: [RashiElement; 12] = [
    RashiElement::Fire,
    RashiElement::Earth,
    RashiElement::Air,
    RashiElement::Water,
    RashiElement::Fire,
    RashiElement::Earth,
    RashiElement::Air,
    RashiElement::Water,
    RashiElement::Fire,
    RashiElement::Earth,
    RashiElement::Air,
    RashiElement::Water,
];

/// Determine the element of a rashi by 0-based index (wraps modulo 12).
pub const fn rashi_element(rashi_index: u8) -> RashiElement {
    RASHI_ELEMENTS[(rashi_index % 12) as usize]
}

/// First navamsha rashi for signs of an element.
///
/// Fire starts from Mesha, Earth from Makara, Air from Tula, Water from Karka.
pub const fn navamsha_start_rashi(element: RashiElement) -> u8 {
    match element {
        RashiElement::Fire => 0,
        RashiElement::Earth => 9,
        RashiElement::Air => 6,
        RashiElement::Water => 3,
    }
}

// ---------------------------------------------------------------------------
// Divisional chart identifiers
// ---------------------------------------------------------------------------

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivisionalChart {
    /// Rashi chart (birth chart), identity projection.
    #[default]
    D1,
    /// Navamsha chart.
    D9,
}

/// All supported charts in order.
pub const ALL_CHARTS: [DivisionalChart; 2] = [DivisionalChart::D1, DivisionalChart::D9];

impl DivisionalChart {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D9 => 9,
        }
    }

    /// Canonical identifier, e.g. `"D-9"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D-1",
            Self::D9 => "D-9",
        }
    }

    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D9 => "Navamsha",
        }
    }

    /// Label used in chart selectors.
    pub const fn description(self) -> &'static str {
        match self {
            Self::D1 => "D-1 (Birth Chart)",
            Self::D9 => "D-9 (Navamsa Chart)",
        }
    }

    /// Reverse lookup from division count.
    pub fn from_divisions(n: u16) -> Option<DivisionalChart> {
        ALL_CHARTS.iter().copied().find(|c| c.divisions() == n)
    }

    /// Resolve an identifier, falling back to D-1 when it is not recognized.
    ///
    /// The unrecognized id is returned alongside so callers can report it.
    pub fn parse_or_default(id: &str) -> (DivisionalChart, Option<ChartError>) {
        match id.parse() {
            Ok(chart) => (chart, None),
            Err(e) => (DivisionalChart::D1, Some(e)),
        }
    }
}

impl Display for DivisionalChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Only the canonical codes (`"D-1"`, `"D-9"`) are recognized.
impl FromStr for DivisionalChart {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CHARTS
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| ChartError::UnrecognizedChartId(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Projection configuration
// ---------------------------------------------------------------------------

/// How chart identifiers from callers are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectionConfig {
    /// Reject unknown chart ids instead of falling back to D-1.
    pub strict: bool,
}

impl ProjectionConfig {
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Resolve a chart id under this policy.
    ///
    /// Lenient mode logs the fallback at `warn` and returns D-1.
    pub fn resolve(&self, id: &str) -> Result<DivisionalChart, ChartError> {
        match DivisionalChart::parse_or_default(id) {
            (chart, None) => Ok(chart),
            (_, Some(e)) if self.strict => Err(e),
            (chart, Some(e)) => {
                warn!(chart_id = id, fallback = %chart, "{e}; projecting as {chart}");
                Ok(chart)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Core transformation
// ---------------------------------------------------------------------------

/// Span of one navamsha segment: 30/9 = 3.3333... degrees.
pub const NAVAMSHA_SPAN: f64 = RASHI_SPAN / 9.0;

/// Transform a D-1 longitude into its D-9 (Navamsha) longitude.
///
/// The fractional position inside the 3 deg 20' segment is kept at segment
/// scale, so the result lies in `[sign*30, sign*30 + 3.333...)`.
pub fn navamsha_longitude(d1_lon: f64) -> f64 {
    let lon = normalize_360(d1_lon);
    let rashi_idx = sign_index(lon);
    let degree_in_rashi = lon % RASHI_SPAN;

    let segment_idx = ((degree_in_rashi / NAVAMSHA_SPAN).floor() as u8).min(8);
    let fraction = (degree_in_rashi % NAVAMSHA_SPAN) / NAVAMSHA_SPAN;

    let start = navamsha_start_rashi(rashi_element(rashi_idx));
    let target_rashi = (start + segment_idx) % 12;

    target_rashi as f64 * RASHI_SPAN + fraction * NAVAMSHA_SPAN
}

/// Transform a D-1 longitude through a divisional chart.
///
/// Returns a longitude in [0, 360).
pub fn project_longitude(chart: DivisionalChart, d1_lon: f64) -> f64 {
    match chart {
        DivisionalChart::D1 => normalize_360(d1_lon),
        DivisionalChart::D9 => navamsha_longitude(d1_lon),
    }
}

/// Transform a D-1 longitude through a chart named by identifier.
///
/// Unrecognized identifiers project as D-1 (logged at `warn`).
pub fn project_longitude_by_id(chart_id: &str, d1_lon: f64) -> f64 {
    let chart = ProjectionConfig::default()
        .resolve(chart_id)
        .unwrap_or(DivisionalChart::D1);
    project_longitude(chart, d1_lon)
}

/// Transform a D-1 longitude and return the full rashi position in the varga.
pub fn project_rashi_info(chart: DivisionalChart, d1_lon: f64) -> RashiInfo {
    rashi_from_longitude(project_longitude(chart, d1_lon))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::Rashi;

    #[test]
    fn rashi_element_all_12() {
        assert_eq!(rashi_element(0), RashiElement::Fire); // Mesha
        assert_eq!(rashi_element(1), RashiElement::Earth); // Vrishabha
        assert_eq!(rashi_element(2), RashiElement::Air); // Mithuna
        assert_eq!(rashi_element(3), RashiElement::Water); // Karka
        assert_eq!(rashi_element(4), RashiElement::Fire); // Simha
        assert_eq!(rashi_element(5), RashiElement::Earth); // Kanya
        assert_eq!(rashi_element(6), RashiElement::Air); // Tula
        assert_eq!(rashi_element(7), RashiElement::Water); // Vrischika
        assert_eq!(rashi_element(8), RashiElement::Fire); // Dhanu
        assert_eq!(rashi_element(9), RashiElement::Earth); // Makara
        assert_eq!(rashi_element(10), RashiElement::Air); // Kumbha
        assert_eq!(rashi_element(11), RashiElement::Water); // Meena
    }

    #[test]
    fn d1_identity() {
        for i in 0..12 {
            let lon = i as f64 * 30.0 + 15.0;
            let result = project_longitude(DivisionalChart::D1, lon);
            assert!((result - lon).abs() < 1e-10, "D1 identity failed for lon={lon}");
        }
    }

    #[test]
    fn d1_normalizes() {
        assert!((project_longitude(DivisionalChart::D1, -30.0) - 330.0).abs() < 1e-10);
    }

    #[test]
    fn d9_fire_rashi() {
        // Mesha (Fire) at 5.0: segment 1, fraction 0.5
        // target = (0+1) % 12 = Vrishabha, 30 + 0.5 * 3.333 = 31.6667
        let result = navamsha_longitude(5.0);
        assert!((result - (30.0 + NAVAMSHA_SPAN / 2.0)).abs() < 1e-9, "got {result}");
    }

    #[test]
    fn d9_earth_rashi() {
        // Vrishabha (Earth) at 45.5: 15.5 in rashi, segment 4, fraction 0.65
        // target = (9+4) % 12 = Vrishabha
        let result = navamsha_longitude(45.5);
        assert!((result - (30.0 + 0.65 * NAVAMSHA_SPAN)).abs() < 1e-9, "got {result}");
    }

    #[test]
    fn d9_air_rashi() {
        // Mithuna (Air) at 60.0 → Tula 0
        assert!((navamsha_longitude(60.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn d9_water_rashi() {
        // Karka (Water) at 90.0 → Karka 0
        assert!((navamsha_longitude(90.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn d9_last_segment_of_meena() {
        // Meena (Water) at 359.0: segment 8, target (3+8) % 12 = Meena
        let result = navamsha_longitude(359.0);
        assert_eq!(crate::rashi::zodiac_sign(result), Rashi::Meena);
    }

    #[test]
    fn d9_output_in_range() {
        let test_lons = [0.0, 15.0, 29.999, 45.5, 90.0, 180.0, 270.0, 359.999, -10.0, 720.5];
        for &lon in &test_lons {
            let result = navamsha_longitude(lon);
            assert!((0.0..360.0).contains(&result), "lon={lon}, result={result}");
        }
    }

    #[test]
    fn chart_codes() {
        assert_eq!(DivisionalChart::D1.code(), "D-1");
        assert_eq!(DivisionalChart::D9.code(), "D-9");
        assert_eq!(DivisionalChart::D9.divisions(), 9);
        assert_eq!(DivisionalChart::D9.to_string(), "D-9");
        assert_eq!(DivisionalChart::D9.name(), "Navamsha");
        assert_eq!(DivisionalChart::D1.description(), "D-1 (Birth Chart)");
        assert_eq!(DivisionalChart::from_divisions(9), Some(DivisionalChart::D9));
        assert_eq!(DivisionalChart::from_divisions(60), None);
    }

    #[test]
    fn parse_canonical_codes() {
        assert_eq!("D-1".parse::<DivisionalChart>(), Ok(DivisionalChart::D1));
        assert_eq!("D-9".parse::<DivisionalChart>(), Ok(DivisionalChart::D9));
    }

    #[test]
    fn parse_rejects_unknown() {
        for s in ["D-2", "D-", "", "navamsa", "D--9", "D9", "9", "d-9", " D-9 ", "+9", "D+9", "0009"] {
            assert_eq!(
                s.parse::<DivisionalChart>(),
                Err(ChartError::UnrecognizedChartId(s.to_string())),
                "{s:?}"
            );
        }
    }

    #[test]
    fn near_miss_ids_project_as_d1() {
        for id in ["D9", "9", "d-9", " D-9 ", "+9", "D+9", "0009"] {
            let projected = project_longitude_by_id(id, 45.5);
            assert!((projected - normalize_360(45.5)).abs() < 1e-12, "{id:?} -> {projected}");
        }
        assert!((project_longitude_by_id("D-9", 45.5) - navamsha_longitude(45.5)).abs() < 1e-12);
    }

    #[test]
    fn parse_or_default_reports_fallback() {
        let (chart, err) = DivisionalChart::parse_or_default("D-60");
        assert_eq!(chart, DivisionalChart::D1);
        assert_eq!(err, Some(ChartError::UnrecognizedChartId("D-60".into())));
    }

    #[test]
    fn strict_config_rejects_unknown() {
        assert!(ProjectionConfig::strict().resolve("D-3").is_err());
        assert_eq!(ProjectionConfig::default().resolve("D-3"), Ok(DivisionalChart::D1));
        assert_eq!(ProjectionConfig::strict().resolve("D-9"), Ok(DivisionalChart::D9));
    }

    #[test]
    fn unknown_id_projects_as_d1() {
        for lon in [0.0, 95.0, 359.5, -45.0] {
            assert_eq!(
                project_longitude_by_id("unknown", lon),
                project_longitude_by_id("D-1", lon)
            );
        }
    }

    #[test]
    fn project_rashi_info_uses_varga_sign() {
        let info = project_rashi_info(DivisionalChart::D9, 60.0);
        assert_eq!(info.rashi, Rashi::Tula);
    }
}
