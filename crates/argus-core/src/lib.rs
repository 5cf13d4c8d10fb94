//! Dispatch engine between the seeded data layer and UI consumers.
//!
//! This crate owns the business logic, domain model, and reactive data
//! infrastructure for the Argus security-operations board:
//!
//! - **[`Dispatcher`]** — Central facade managing the alarm lifecycle:
//!   [`start()`](Dispatcher::start) spawns the background feed generator,
//!   and the operation methods (`assign_unit`, `finish`, `record_call`, …)
//!   mutate alarms through the store while keeping unit and facility state
//!   consistent.
//!
//! - **[`DispatchStore`]** — Lock-free reactive storage built on
//!   `EntityCollection<T>` (`DashMap` + `tokio::sync::watch` channels),
//!   seeded from static fixtures. Also carries the reference-data CRUD
//!   (facilities, units, vehicles, departments, facility types).
//!
//! - **[`EntityStream<T>`]** — Subscription handle vended by the store.
//!   Exposes `current()` / `latest()` / `changed()` for reactive rendering.
//!
//! - **Feed generator** ([`feed`]) — A cancellable periodic task that
//!   synthesizes random alarms and broadcasts [`FeedEvent`]s, including an
//!   [`AlarmTone`] cue for audible types. Playing the tone is the
//!   presentation layer's job; this crate only describes it.
//!
//! - **View derivation** ([`view`]) — Pure filter/sort/paginate functions
//!   over store snapshots: the alarm feed with its tab/facet/date filters,
//!   header stats, and the call-log and security-log table views.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Alarm`, `Unit`,
//!   `Facility`, `CallRecord`, `SecurityLog`, …) with [`AlarmId`]
//!   allocation that stays unique under concurrent feed ticks.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod feed;
pub mod model;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use error::CoreError;
pub use feed::{AlarmTone, FeedEvent};
pub use store::DispatchStore;
pub use stream::EntityStream;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Alarm,
    AlarmId,
    AlarmStatus,
    AlarmType,
    CallLog,
    CallRecord,
    CallStatus,
    CallType,
    ConnectionStatus,
    Coordinates,
    CrewMember,
    Department,
    Facility,
    FacilityTypeDef,
    FinishReason,
    LogAction,
    SecurityDepartment,
    SecurityLog,
    ServiceVehicle,
    ShiftStatus,
    Unit,
    UnitAction,
    UnitActionKind,
    UnitStatus,
};
