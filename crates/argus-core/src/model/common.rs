// ── Common types shared across the domain model ──

use serde::{Deserialize, Serialize};
use std::fmt;

/// Map position of a facility or unit.
///
/// Interpreted by the presentation layer (percent offsets on the board
/// map, or WGS84 when handed to the geocoder) -- the core only copies
/// them around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// A security-department code (e.g. `"Kentron"`).
///
/// Departments are operator-managed reference data, not a closed set,
/// so this is a string newtype rather than an enum. Display names live
/// on [`SecurityDepartment`](super::SecurityDepartment) records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Department {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Department {
    fn from(s: String) -> Self {
        Self(s)
    }
}
