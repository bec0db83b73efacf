//! Nakshatra (lunar mansion) computation, 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of 3 deg 20'
//! and a ruling graha taken from the repeating Vimshottari lord cycle
//! starting at Ketu.

use std::fmt::{Display, Formatter};

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Ruling graha of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NakshatraLord {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// The 9-lord cycle; nakshatra `i` is ruled by `LORD_CYCLE[i % 9]`.
pub const LORD_CYCLE: [NakshatraLord; 9] = [
    NakshatraLord::Ketu,
    NakshatraLord::Venus,
    NakshatraLord::Sun,
    NakshatraLord::Moon,
    NakshatraLord::Mars,
    NakshatraLord::Rahu,
    NakshatraLord::Jupiter,
    NakshatraLord::Saturn,
    NakshatraLord::Mercury,
];

impl NakshatraLord {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Venus => "Venus",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Rahu => "Rahu",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Mercury => "Mercury",
        }
    }
}

impl Display for NakshatraLord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha.
    pub const fn lord(self) -> NakshatraLord {
        LORD_CYCLE[(self.index() % 9) as usize]
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    pub lord: NakshatraLord,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Renders as `Ashwini (Pada 1, Lord Ketu)`.
impl Display for NakshatraInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Pada {}, Lord {})",
            self.nakshatra, self.pada, self.lord
        )
    }
}

/// Determine nakshatra, pada and lord from an ecliptic longitude.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as u8) % 27;
    let degrees_in_nakshatra = lon % NAKSHATRA_SPAN;
    // fraction < 1 in exact arithmetic; clamp guards the last-ulp case
    let pada = ((degrees_in_nakshatra / NAKSHATRA_SPAN * 4.0).floor() as u8).min(3) + 1;
    let nakshatra = ALL_NAKSHATRAS[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada,
        lord: nakshatra.lord(),
        degrees_in_nakshatra,
    }
}
