//! Error types for chart projection and payload decoding.

use thiserror::Error;

/// Errors from chart projection and chart payload handling.
///
/// Projection itself is total; these variants describe conditions a
/// caller may want to surface (an unknown chart id) or malformed
/// engine payloads.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Divisional chart identifier not recognized.
    #[error("unrecognized divisional chart id: {0:?}")]
    UnrecognizedChartId(String),
    /// House number outside 1..=12.
    #[error("house number out of range: {0}")]
    InvalidHouse(u8),
    /// Chart payload has no ascendant entry (`ascmc[0]`).
    #[error("chart payload has no ascendant")]
    MissingAscendant,
    /// Chart payload JSON could not be decoded.
    #[error("invalid chart payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e.to_string())
    }
}
