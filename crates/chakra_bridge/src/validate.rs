//! Birth-form field validation.
//!
//! Each `validate_*` function checks one raw form string. [`BirthForm::parse`]
//! runs all of them, collects every failure, and only then builds a
//! [`BirthInfo`].

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::birth::{BirthInfo, HouseSystem};
use crate::error::FormErrors;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex")
});

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)(?::([0-5]\d))?$").expect("valid time regex")
});

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Time,
    Timezone,
    Latitude,
    Longitude,
    LocationName,
    Altitude,
    HouseSystem,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Timezone => "timezone",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::LocationName => "location name",
            Self::Altitude => "altitude",
            Self::HouseSystem => "house system",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Finite decimal number, surrounding whitespace allowed.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `YYYY-MM-DD`.
pub fn validate_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

/// `HH:MM` or `HH:MM:SS`, 24-hour clock.
pub fn validate_time(time: &str) -> bool {
    TIME_RE.is_match(time)
}

/// Offset in minutes; any number, but not blank.
pub fn validate_timezone(timezone: &str) -> bool {
    parse_number(timezone).is_some()
}

pub fn validate_latitude(latitude: &str) -> bool {
    parse_number(latitude).is_some_and(|v| (-90.0..=90.0).contains(&v))
}

pub fn validate_longitude(longitude: &str) -> bool {
    parse_number(longitude).is_some_and(|v| (-180.0..=180.0).contains(&v))
}

pub fn validate_location_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Optional: blank is accepted.
pub fn validate_altitude(altitude: &str) -> bool {
    altitude.trim().is_empty() || parse_number(altitude).is_some()
}

/// `W` (whole sign) or `P` (Placidus).
pub fn validate_house_system(house_system: &str) -> bool {
    house_system.parse::<HouseSystem>().is_ok()
}

/// Raw form input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BirthForm {
    pub date: String,
    pub time: String,
    pub timezone: String,
    pub latitude: String,
    pub longitude: String,
    pub location_name: String,
    pub altitude: String,
    pub house_system: String,
}

impl BirthForm {
    /// Validate every field and build the birth record.
    ///
    /// The timezone is truncated to whole minutes. A date that matches the
    /// format but does not exist (e.g. `2023-02-30`) is rejected.
    pub fn parse(&self) -> Result<BirthInfo, FormErrors> {
        let mut errors = FormErrors::default();

        let date = DATE_RE.captures(&self.date).and_then(|c| {
            let year: i32 = c[1].parse().ok()?;
            let month: u32 = c[2].parse().ok()?;
            let day: u32 = c[3].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day).map(|_| (year, month, day))
        });
        if date.is_none() {
            let msg = if validate_date(&self.date) {
                "Date does not exist."
            } else {
                "Invalid date format. Expected: YYYY-MM-DD"
            };
            errors.push(Field::Date, msg);
        }

        let time = TIME_RE.captures(&self.time).and_then(|c| {
            let hour: u32 = c[1].parse().ok()?;
            let minute: u32 = c[2].parse().ok()?;
            let second: u32 = match c.get(3) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            };
            Some((hour, minute, second))
        });
        if time.is_none() {
            errors.push(Field::Time, "Invalid time format. Expected: HH:MM or HH:MM:SS");
        }

        let timezone = parse_number(&self.timezone);
        if timezone.is_none() {
            errors.push(Field::Timezone, "Invalid timezone value.");
        }
        if !validate_latitude(&self.latitude) {
            errors.push(Field::Latitude, "Latitude must be between -90 and 90.");
        }
        if !validate_longitude(&self.longitude) {
            errors.push(Field::Longitude, "Longitude must be between -180 and 180.");
        }
        if !validate_location_name(&self.location_name) {
            errors.push(Field::LocationName, "Location name is required.");
        }
        if !validate_altitude(&self.altitude) {
            errors.push(Field::Altitude, "Invalid altitude value.");
        }
        let house_system = self.house_system.parse::<HouseSystem>().ok();
        if house_system.is_none() {
            errors.push(Field::HouseSystem, "Invalid house system.");
        }

        match (date, time, timezone, house_system) {
            (Some((year, month, day)), Some((hour, minute, second)), Some(tz), Some(hs))
                if errors.is_empty() =>
            {
                Ok(BirthInfo {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                    second,
                    timezone_minutes: tz.trunc() as i32,
                    latitude: parse_number(&self.latitude).unwrap_or_default(),
                    longitude: parse_number(&self.longitude).unwrap_or_default(),
                    location_name: self.location_name.trim().to_string(),
                    altitude: parse_number(&self.altitude),
                    house_system: Some(hs),
                })
            }
            _ => Err(errors),
        }
    }
}
