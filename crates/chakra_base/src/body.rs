//! Celestial bodies as delivered by the ephemeris engine, and the derived
//! Ketu point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::util::normalize_360;

/// Engine names that stand for Rahu (the ascending lunar node).
pub const RAHU_NAMES: [&str; 2] = ["true Node", "mean Node"];

/// Name given to the derived descending node.
pub const KETU_NAME: &str = "Ketu";

/// A planet, the ascendant, a lunar node or a derived point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    /// Ecliptic longitude in degrees.
    #[serde(rename = "long")]
    pub longitude: f64,
    /// Display form of the longitude as supplied by the engine.
    #[serde(rename = "long_s", default)]
    pub longitude_display: String,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        longitude: f64,
        longitude_display: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            longitude,
            longitude_display: longitude_display.into(),
        }
    }

    /// Whether this body is a Rahu-equivalent lunar node.
    pub fn is_rahu(&self) -> bool {
        is_rahu_name(&self.name)
    }
}

/// Whether an engine body name denotes Rahu.
pub fn is_rahu_name(name: &str) -> bool {
    RAHU_NAMES.contains(&name)
}

/// Ketu as the point opposite Rahu.
///
/// The display string is the decimal longitude with two places, not the
/// engine's sexagesimal format.
pub fn derive_ketu(rahu: &CelestialBody) -> CelestialBody {
    let longitude = normalize_360(rahu.longitude + 180.0);
    CelestialBody {
        name: KETU_NAME.to_string(),
        longitude,
        longitude_display: format!("{longitude:.2}"),
    }
}

/// Derive Ketu from the first Rahu-equivalent body, if any.
///
/// Returns `None` when no lunar node is present; that is not an error.
pub fn find_ketu(bodies: &[CelestialBody]) -> Option<CelestialBody> {
    let ketu = bodies.iter().find(|b| b.is_rahu()).map(derive_ketu);
    if ketu.is_none() {
        debug!("no lunar node in body list; Ketu omitted");
    }
    ketu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ketu_opposite_true_node() {
        let rahu = CelestialBody::new("true Node", 10.0, "10°00'");
        let ketu = derive_ketu(&rahu);
        assert_eq!(ketu.name, "Ketu");
        assert!((ketu.longitude - 190.0).abs() < 1e-12);
        assert_eq!(ketu.longitude_display, "190.00");
    }

    #[test]
    fn ketu_wraps() {
        let rahu = CelestialBody::new("mean Node", 270.5, "");
        let ketu = derive_ketu(&rahu);
        assert!((ketu.longitude - 90.5).abs() < 1e-12);
    }

    #[test]
    fn find_ketu_uses_first_node() {
        let bodies = vec![
            CelestialBody::new("Sun", 1.0, ""),
            CelestialBody::new("mean Node", 20.0, ""),
            CelestialBody::new("true Node", 21.0, ""),
        ];
        let ketu = find_ketu(&bodies).unwrap();
        assert!((ketu.longitude - 200.0).abs() < 1e-12);
    }

    #[test]
    fn find_ketu_none_without_node() {
        let bodies = vec![CelestialBody::new("Sun", 1.0, "")];
        assert!(find_ketu(&bodies).is_none());
        assert!(find_ketu(&[]).is_none());
    }

    #[test]
    fn rahu_names() {
        assert!(is_rahu_name("true Node"));
        assert!(is_rahu_name("mean Node"));
        assert!(!is_rahu_name("Node"));
        assert!(!is_rahu_name("Ketu"));
    }
}
