//! Whole-sign house (bhava) assignment.
//!
//! The rashi holding the ascendant is house 1; each following rashi is the
//! next house. Only sign membership matters, never the degree within it.

use std::ops::Index;

use crate::amsha::{DivisionalChart, project_longitude};
use crate::body::CelestialBody;
use crate::util::{normalize_360, sign_index};

/// Whole-sign house (1..=12) of a body relative to the ascendant.
pub fn whole_sign_house(body_lon: f64, asc_lon: f64) -> u8 {
    let body_sign = sign_index(normalize_360(body_lon));
    let asc_sign = sign_index(normalize_360(asc_lon));
    (body_sign + 12 - asc_sign) % 12 + 1
}

/// Bodies grouped into the 12 whole-sign houses.
///
/// All 12 buckets always exist; each keeps the caller's input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseBuckets {
    buckets: [Vec<CelestialBody>; 12],
}

impl HouseBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies in a house, or `None` for a house outside 1..=12.
    pub fn get(&self, house: u8) -> Option<&[CelestialBody]> {
        let idx = usize::from(house).checked_sub(1)?;
        self.buckets.get(idx).map(Vec::as_slice)
    }

    /// Iterate `(house, bodies)` in house order 1..=12.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[CelestialBody])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (i as u8 + 1, b.as_slice()))
    }

    /// Total number of bodies across all houses.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, house: u8, body: CelestialBody) {
        self.buckets[usize::from(house - 1)].push(body);
    }
}

/// # Panics
/// Panics if `house` is not in 1..=12.
impl Index<u8> for HouseBuckets {
    type Output = [CelestialBody];

    fn index(&self, house: u8) -> &Self::Output {
        match self.get(house) {
            Some(b) => b,
            None => panic!("house {house} out of range 1..=12"),
        }
    }
}

/// Group bodies by whole-sign house in a divisional chart.
///
/// Both the bodies and the ascendant are projected through `chart` before
/// the house is computed.
pub fn group_by_house<'a, I>(bodies: I, asc_lon: f64, chart: DivisionalChart) -> HouseBuckets
where
    I: IntoIterator<Item = &'a CelestialBody>,
{
    let asc = project_longitude(chart, asc_lon);
    let mut houses = HouseBuckets::new();
    for body in bodies {
        let house = whole_sign_house(project_longitude(chart, body.longitude), asc);
        houses.push(house, body.clone());
    }
    houses
}
