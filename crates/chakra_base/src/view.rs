//! Assembled chart view: houses, occupying rashis and per-body details.
//!
//! This is everything a renderer needs for one divisional chart, with no
//! further lookups.

use crate::amsha::{DivisionalChart, project_longitude};
use crate::bhava::{HouseBuckets, group_by_house, whole_sign_house};
use crate::body::CelestialBody;
use crate::error::ChartError;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::payload::ChartData;
use crate::rashi::{Rashi, zodiac_sign};

/// Short symbols for engine body names.
const ABBREVIATIONS: [(&str, &str); 22] = [
    ("Sun", "Su"),
    ("Moon", "Mo"),
    ("Mercury", "Me"),
    ("Venus", "Ve"),
    ("Mars", "Ma"),
    ("Jupiter", "Ju"),
    ("Saturn", "Sa"),
    ("Uranus", "Ur"),
    ("Neptune", "Ne"),
    ("Pluto", "Pl"),
    ("mean Node", "Ra"),
    ("true Node", "Tr*"),
    ("Chiron", "Ch"),
    ("Pholus", "Ph"),
    ("Ceres", "Ce"),
    ("Pallas", "Pa"),
    ("Juno", "Jun"),
    ("Vesta", "Vs"),
    ("intp. Apogee", "Ap"),
    ("intp. Perigee", "Pe"),
    ("Asc", "La⁋"),
    ("Ketu", "Ke"),
];

/// Chart symbol for a body name; unknown names use their first two chars.
pub fn abbreviation(name: &str) -> &str {
    if let Some((_, abbrev)) = ABBREVIATIONS.iter().find(|(n, _)| *n == name) {
        return abbrev;
    }
    match name.char_indices().nth(2) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}

/// Cell of a 4x4 South-Indian grid holding one house (1-based row/col).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub house: u8,
    pub row: u8,
    pub col: u8,
}

/// Houses laid clockwise around the border of a 4x4 grid; the centre 2x2
/// block is free for chart details.
pub const GRID_LAYOUT: [GridCell; 12] = [
    GridCell { house: 12, row: 1, col: 1 },
    GridCell { house: 1, row: 1, col: 2 },
    GridCell { house: 2, row: 1, col: 3 },
    GridCell { house: 3, row: 1, col: 4 },
    GridCell { house: 4, row: 2, col: 4 },
    GridCell { house: 5, row: 3, col: 4 },
    GridCell { house: 6, row: 4, col: 4 },
    GridCell { house: 7, row: 4, col: 3 },
    GridCell { house: 8, row: 4, col: 2 },
    GridCell { house: 9, row: 4, col: 1 },
    GridCell { house: 10, row: 3, col: 1 },
    GridCell { house: 11, row: 2, col: 1 },
];

/// Per-body placement in a divisional chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDetail {
    pub body: CelestialBody,
    /// Longitude after projection into the chart.
    pub projected_longitude: f64,
    /// Rashi of the projected longitude.
    pub rashi: Rashi,
    pub house: u8,
    /// Nakshatra of the D-1 longitude.
    pub nakshatra: NakshatraInfo,
}

/// A house with the rashi it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseView<'a> {
    pub house: u8,
    pub rashi: Rashi,
    pub bodies: &'a [CelestialBody],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub chart: DivisionalChart,
    /// Projected ascendant longitude.
    pub ascendant_longitude: f64,
    pub ascendant_rashi: Rashi,
    /// Nakshatra of the D-1 ascendant.
    pub ascendant_nakshatra: NakshatraInfo,
    pub houses: HouseBuckets,
    /// Details in body-list order.
    pub details: Vec<BodyDetail>,
}

impl ChartView {
    /// Build the view of `data` in `chart`.
    pub fn build(data: &ChartData, chart: DivisionalChart) -> Result<ChartView, ChartError> {
        let asc_d1 = data.ascendant()?.longitude;
        let bodies = data.bodies()?;
        Ok(Self::from_bodies(&bodies, asc_d1, chart))
    }

    /// Build a view from an explicit body list and D-1 ascendant longitude.
    pub fn from_bodies(bodies: &[CelestialBody], asc_d1: f64, chart: DivisionalChart) -> ChartView {
        let asc = project_longitude(chart, asc_d1);
        let details = bodies
            .iter()
            .map(|body| {
                let projected = project_longitude(chart, body.longitude);
                BodyDetail {
                    body: body.clone(),
                    projected_longitude: projected,
                    rashi: zodiac_sign(projected),
                    house: whole_sign_house(projected, asc),
                    nakshatra: nakshatra_from_longitude(body.longitude),
                }
            })
            .collect();

        ChartView {
            chart,
            ascendant_longitude: asc,
            ascendant_rashi: zodiac_sign(asc),
            ascendant_nakshatra: nakshatra_from_longitude(asc_d1),
            houses: group_by_house(bodies, asc_d1, chart),
            details,
        }
    }

    /// Houses 1..=12 with their rashi and occupants.
    pub fn house_views(&self) -> impl Iterator<Item = HouseView<'_>> {
        self.houses.iter().map(|(house, bodies)| HouseView {
            house,
            rashi: self.ascendant_rashi.advance(house - 1),
            bodies,
        })
    }

    /// Details of the first body with the given name.
    pub fn detail(&self, name: &str) -> Option<&BodyDetail> {
        self.details.iter().find(|d| d.body.name == name)
    }
}
