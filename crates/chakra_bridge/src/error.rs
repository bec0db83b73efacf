//! Error types for the birth-data and engine boundary.

use chakra_base::ChartError;
use thiserror::Error;

use crate::validate::Field;

/// Failure signalled by the ephemeris engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineFailure {
    /// Engine could not be reached or loaded.
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    /// Engine ran and reported an error instead of a chart.
    #[error("engine reported failure: {0}")]
    Reported(String),
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("invalid birth data: {}", list_fields(.fields))]
pub struct FormErrors {
    pub fields: Vec<(Field, &'static str)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }

    pub(crate) fn push(&mut self, field: Field, msg: &'static str) {
        self.fields.push((field, msg));
    }
}

fn list_fields(fields: &[(Field, &'static str)]) -> String {
    fields
        .iter()
        .map(|(field, msg)| format!("{field}: {msg}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A house system code the engine does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown house system {0:?} (expected W or P)")]
pub struct UnknownHouseSystem(pub String);

/// Errors from turning birth data into a chart payload.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BridgeError {
    #[error(transparent)]
    Form(#[from] FormErrors),
    #[error(transparent)]
    Engine(#[from] EngineFailure),
    #[error(transparent)]
    Chart(#[from] ChartError),
}
