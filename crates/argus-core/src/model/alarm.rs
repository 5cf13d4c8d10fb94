// ── Alarm domain types ──
//
// The central entity of the board. An Alarm carries a value-copied
// snapshot of its originating facility: the record must stay a faithful
// historical account even if the facility is edited later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::alarm_id::AlarmId;
use super::common::{Coordinates, Department};
use super::facility::Facility;

/// Lifecycle state of an alarm.
///
/// `Finished` and `FalseAlarm` are terminal: no operation mutates a
/// closed alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmStatus {
    Received,
    Active,
    Finished,
    FalseAlarm,
}

impl AlarmStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::FalseAlarm)
    }
}

/// Signal type of an alarm.
///
/// `General` and `Silent` are real alarms; the other three are
/// technical warnings. The distinction drives filtering, coloring, and
/// whether the feed generator emits an audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmType {
    General,
    Silent,
    PowerLoss,
    LowBattery,
    ConnectionLost,
}

impl AlarmType {
    /// `true` for the degraded-state signals (power loss, low battery,
    /// connection lost), `false` for real alarms.
    pub fn is_warning(self) -> bool {
        matches!(self, Self::PowerLoss | Self::LowBattery | Self::ConnectionLost)
    }

    /// Human-readable label used in generated descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "general alarm",
            Self::Silent => "silent alarm",
            Self::PowerLoss => "power loss",
            Self::LowBattery => "low battery",
            Self::ConnectionLost => "connection lost",
        }
    }
}

/// Why an alarm was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    FalseAlarm,
    Resolved,
    Test,
}

/// Kind of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitActionKind {
    Receive,
    Accept,
    Reject,
    Arrive,
    Finish,
    Info,
}

/// One entry in an alarm's unit timeline. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitAction {
    pub unit_name: String,
    pub action: String,
    pub kind: UnitActionKind,
    pub timestamp: DateTime<Utc>,
}

/// One operator call attached to an alarm. Newest first in
/// [`Alarm::call_history`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    pub id: String,
    pub operator_name: String,
    pub timestamp: DateTime<Utc>,
    pub phone_number: String,
    pub duration_secs: u32,
    pub recording_url: String,
}

/// An incident record raised against a monitored facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    pub id: AlarmId,
    pub is_seen: bool,
    pub status: AlarmStatus,
    /// Creation time. Immutable after the alarm is raised.
    pub timestamp: DateTime<Utc>,
    pub alarm_type: AlarmType,

    // Facility snapshot, copied by value at creation time.
    pub facility_code: String,
    pub facility_name: String,
    pub facility_type: String,
    pub address: String,
    pub department: Department,
    pub contact_person: String,
    pub contact_phones: Vec<String>,
    pub coordinates: Coordinates,
    pub facility_password: Option<String>,

    pub description: String,

    pub assigned_unit_id: Option<String>,
    pub unit_actions: Vec<UnitAction>,
    pub call_history: Vec<CallRecord>,
    /// Gate for closing an ACTIVE alarm: the assigned unit must report
    /// its work finished first.
    pub unit_finished_work: bool,
}

impl Alarm {
    /// Build a fresh RECEIVED alarm from a facility, copying the
    /// snapshot fields by value.
    pub fn raised_at(
        id: AlarmId,
        alarm_type: AlarmType,
        facility: &Facility,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            is_seen: false,
            status: AlarmStatus::Received,
            timestamp,
            alarm_type,
            facility_code: facility.id.clone(),
            facility_name: facility.name.clone(),
            facility_type: facility.facility_type.clone(),
            address: facility.address.clone(),
            department: facility.department.clone(),
            contact_person: facility.contact_person.clone(),
            contact_phones: facility.phones.clone(),
            coordinates: facility.coordinates,
            facility_password: facility.password.clone(),
            description: description.into(),
            assigned_unit_id: None,
            unit_actions: Vec::new(),
            call_history: Vec::new(),
            unit_finished_work: false,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.alarm_type.is_warning()
    }

    /// Whether `finish` would be accepted right now.
    ///
    /// A freshly received alarm is always finishable; an active one only
    /// after the assigned unit reports its work done; a closed one never.
    pub fn can_finish(&self) -> bool {
        match self.status {
            AlarmStatus::Received => true,
            AlarmStatus::Active => self.unit_finished_work,
            AlarmStatus::Finished | AlarmStatus::FalseAlarm => false,
        }
    }

    /// Timeline entries grouped by unit name, each group ordered by
    /// timestamp. The underlying `unit_actions` list itself is
    /// append-only and never reordered; this is a display projection.
    pub fn actions_grouped(&self) -> Vec<(String, Vec<&UnitAction>)> {
        let mut groups: Vec<(String, Vec<&UnitAction>)> = Vec::new();
        for action in &self.unit_actions {
            match groups.iter_mut().find(|(name, _)| *name == action.unit_name) {
                Some((_, entries)) => entries.push(action),
                None => groups.push((action.unit_name.clone(), vec![action])),
            }
        }
        for (_, entries) in &mut groups {
            entries.sort_by_key(|a| a.timestamp);
        }
        groups
    }
}
