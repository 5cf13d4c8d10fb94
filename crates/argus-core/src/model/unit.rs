// ── Patrol unit domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alarm_id::AlarmId;
use super::common::{Coordinates, Department};

/// Coarse availability of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitStatus {
    Available,
    Busy,
    Offline,
}

/// What the unit is doing within its shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    OffDuty,
    OnDuty,
    Alarm,
    Break,
}

/// One member of a unit's crew roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub role: String,
    pub badge: String,
    pub phone: String,
    pub is_online: bool,
    pub last_login: DateTime<Utc>,
}

/// A patrol/response team.
///
/// `status`, `shift_status`, and `active_alarm_id` are side-effected by
/// the dispatcher on assign/unassign/finish; everything else is managed
/// through the reference-data CRUD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub board_number: String,
    pub plate_number: String,
    pub status: UnitStatus,
    pub shift_status: ShiftStatus,
    pub status_start_time: DateTime<Utc>,
    pub shift_start_time: DateTime<Utc>,
    pub shift_end_time: Option<DateTime<Utc>>,
    pub department: Department,
    pub coordinates: Coordinates,
    pub crew: Vec<CrewMember>,
    pub is_wifi_lost: bool,
    pub is_gps_lost: bool,
    pub active_alarm_id: Option<AlarmId>,
    pub vehicle_id: Option<String>,
}

impl Unit {
    /// Release the unit after its alarm is closed or unassigned.
    pub(crate) fn release(&mut self, now: DateTime<Utc>) {
        self.status = UnitStatus::Available;
        self.shift_status = ShiftStatus::OnDuty;
        self.status_start_time = now;
        self.active_alarm_id = None;
    }

    /// Put the unit on an alarm.
    pub(crate) fn engage(&mut self, alarm_id: AlarmId, now: DateTime<Utc>) {
        self.status = UnitStatus::Busy;
        self.shift_status = ShiftStatus::Alarm;
        self.status_start_time = now;
        self.active_alarm_id = Some(alarm_id);
    }
}
