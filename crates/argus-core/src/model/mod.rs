// ── Unified domain model ──
//
// Every type in this module is the canonical representation of a
// dispatch-board entity. They are plain data records: behavior lives in
// the dispatcher and the view layer, not here.

pub mod alarm;
pub mod alarm_id;
pub mod common;
pub mod facility;
pub mod supporting;
pub mod unit;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use argus_core::model::*` gives you everything.

// Core identity
pub use alarm_id::{AlarmId, AlarmIdAllocator};

// Common building blocks
pub use common::{Coordinates, Department};

// Alarm
pub use alarm::{
    Alarm, AlarmStatus, AlarmType, CallRecord, FinishReason, UnitAction, UnitActionKind,
};

// Unit
pub use unit::{CrewMember, ShiftStatus, Unit, UnitStatus};

// Facility
pub use facility::{ConnectionStatus, Facility};

// Reference data and logs
pub use supporting::{
    CallLog, CallStatus, CallType, FacilityTypeDef, LogAction, SecurityDepartment, SecurityLog,
    ServiceVehicle,
};
