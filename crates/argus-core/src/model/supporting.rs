// ── Reference data and log record types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alarm::AlarmType;
use super::common::{Coordinates, Department};

/// A patrol car in the vehicle registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceVehicle {
    pub id: String,
    pub name: String,
    pub plate_number: String,
    pub brand: String,
    pub department: Department,
    pub is_archived: bool,
    pub gps_imei: Option<String>,
}

/// A security department (dispatch district).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityDepartment {
    pub id: String,
    pub name: String,
    pub address: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub coordinates: Coordinates,
    pub is_archived: bool,
}

/// A facility type definition (e.g. BANK, SCHOOL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityTypeDef {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// What a security-log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogAction {
    Arm,
    Disarm,
    AlarmGeneral,
    AlarmSilent,
    ConnectionLost,
    PowerLoss,
    LowBattery,
}

impl From<AlarmType> for LogAction {
    fn from(ty: AlarmType) -> Self {
        match ty {
            AlarmType::General => Self::AlarmGeneral,
            AlarmType::Silent => Self::AlarmSilent,
            AlarmType::PowerLoss => Self::PowerLoss,
            AlarmType::LowBattery => Self::LowBattery,
            AlarmType::ConnectionLost => Self::ConnectionLost,
        }
    }
}

/// One row of the facility security log (arm/disarm/signal events).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub department: Department,
    pub facility_name: String,
    pub facility_code: String,
    pub address: String,
    pub action: LogAction,
}

/// Direction/outcome of a call-center call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallType {
    IncomingAnswered,
    IncomingUnanswered,
    OutgoingAnswered,
    OutgoingUnanswered,
}

impl CallType {
    pub fn is_incoming(self) -> bool {
        matches!(self, Self::IncomingAnswered | Self::IncomingUnanswered)
    }
}

/// Whether a call is still on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallStatus {
    InProgress,
    Completed,
}

/// A standalone call-center record (distinct from the per-alarm
/// [`CallRecord`](super::CallRecord) history).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub duration_secs: u32,
    pub call_type: CallType,
    pub status: CallStatus,
    pub facility_code: Option<String>,
    pub facility_name: Option<String>,
    pub phone_number: String,
    pub department: Option<Department>,
    pub operator_name: String,
    pub recording_url: String,
}
