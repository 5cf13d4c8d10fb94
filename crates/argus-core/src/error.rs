// ── Core error types ──
//
// User-facing errors from argus-core. Domain operations return these
// instead of mutating partially: a precondition failure leaves the
// store untouched, and "not found" is always an explicit error rather
// than a silent no-op.

use thiserror::Error;

use crate::model::AlarmId;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Not-found errors ─────────────────────────────────────────────
    #[error("Alarm not found: {id}")]
    AlarmNotFound { id: AlarmId },

    #[error("Unit not found: {id}")]
    UnitNotFound { id: String },

    #[error("Facility not found: {id}")]
    FacilityNotFound { id: String },

    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Precondition errors ──────────────────────────────────────────
    /// The alarm is FINISHED or FALSE_ALARM -- terminal states accept
    /// no further mutations.
    #[error("Alarm {id} is closed and can no longer be modified")]
    AlarmClosed { id: AlarmId },

    /// `finish` called while the alarm is ACTIVE and the assigned unit
    /// has not reported its work finished.
    #[error("Alarm {id} cannot be finished while the assigned unit is still working")]
    NotFinishable { id: AlarmId },

    /// An operation that requires an assigned unit found none.
    #[error("Alarm {id} has no assigned unit")]
    NoUnitAssigned { id: AlarmId },

    /// Assignment candidates are restricted to the alarm's department.
    #[error(
        "Unit {unit_id} belongs to department {unit_department}, \
         alarm belongs to {alarm_department}"
    )]
    WrongDepartment {
        unit_id: String,
        unit_department: String,
        alarm_department: String,
    },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Operation failed: {message}")]
    OperationFailed { message: String },
}
