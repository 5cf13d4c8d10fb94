// ── Monitored facility domain types ──

use serde::{Deserialize, Serialize};

use super::alarm_id::AlarmId;
use super::common::{Coordinates, Department};

/// Monitoring-link state of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Online,
    Offline,
}

/// A monitored site.
///
/// Read-only input to alarm creation (the alarm copies a snapshot of
/// these fields); mutated only through the reference-data CRUD and the
/// arm/disarm operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    /// Facility type code, matching a [`FacilityTypeDef`](super::FacilityTypeDef).
    pub facility_type: String,
    pub department: Department,
    pub address: String,
    pub coordinates: Coordinates,
    pub contact_person: String,
    pub phones: Vec<String>,
    pub is_armed: bool,
    pub connection_status: ConnectionStatus,
    pub active_alarm_id: Option<AlarmId>,
    /// Free-text guard schedule, e.g. `"24/7"` or `"Mon-Fri, 18:00 - 08:00"`.
    pub schedule: String,
    pub password: Option<String>,
    pub is_archived: bool,
}
