// ── Central reactive data store ──
//
// Thread-safe, lock-free storage for all dispatch-board entities.
// Mutations are broadcast to subscribers via `watch` channels.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::EntityCollection;
use super::fixtures;
use crate::error::CoreError;
use crate::model::{
    Alarm, AlarmId, CallLog, Facility, FacilityTypeDef, SecurityDepartment, SecurityLog,
    ServiceVehicle, Unit,
};
use crate::stream::EntityStream;

/// Central reactive store for all dispatch-board entities.
///
/// Thread-safe and lock-free: all reads are wait-free, writes use
/// fine-grained per-shard locks within `DashMap`. Every mutation
/// republishes the affected collection's snapshot, so the feed task and
/// user-triggered operations can interleave freely.
pub struct DispatchStore {
    pub(crate) alarms: EntityCollection<Alarm>,
    pub(crate) units: EntityCollection<Unit>,
    pub(crate) facilities: EntityCollection<Facility>,
    pub(crate) vehicles: EntityCollection<ServiceVehicle>,
    pub(crate) departments: EntityCollection<SecurityDepartment>,
    pub(crate) facility_types: EntityCollection<FacilityTypeDef>,
    pub(crate) security_logs: EntityCollection<SecurityLog>,
    pub(crate) call_logs: EntityCollection<CallLog>,
    pub(crate) last_feed_tick: watch::Sender<Option<DateTime<Utc>>>,
}

impl DispatchStore {
    /// An empty store. Use [`seeded()`](Self::seeded) for the demo data set.
    pub fn new() -> Self {
        let (last_feed_tick, _) = watch::channel(None);

        Self {
            alarms: EntityCollection::new(),
            units: EntityCollection::new(),
            facilities: EntityCollection::new(),
            vehicles: EntityCollection::new(),
            departments: EntityCollection::new(),
            facility_types: EntityCollection::new(),
            security_logs: EntityCollection::new(),
            call_logs: EntityCollection::new(),
            last_feed_tick,
        }
    }

    /// A store pre-populated from the static fixtures.
    pub fn seeded() -> Self {
        let store = Self::new();
        for alarm in fixtures::alarms() {
            store.alarms.upsert(alarm.id.to_string(), alarm);
        }
        for unit in fixtures::units() {
            store.units.upsert(unit.id.clone(), unit);
        }
        for facility in fixtures::facilities() {
            store.facilities.upsert(facility.id.clone(), facility);
        }
        for vehicle in fixtures::vehicles() {
            store.vehicles.upsert(vehicle.id.clone(), vehicle);
        }
        for department in fixtures::departments() {
            store.departments.upsert(department.id.clone(), department);
        }
        for def in fixtures::facility_types() {
            store.facility_types.upsert(def.id.clone(), def);
        }
        for log in fixtures::security_logs() {
            store.security_logs.upsert(log.id.clone(), log);
        }
        for call in fixtures::call_logs() {
            store.call_logs.upsert(call.id.clone(), call);
        }
        store
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn alarms_snapshot(&self) -> Arc<Vec<Arc<Alarm>>> {
        self.alarms.snapshot()
    }

    pub fn units_snapshot(&self) -> Arc<Vec<Arc<Unit>>> {
        self.units.snapshot()
    }

    pub fn facilities_snapshot(&self) -> Arc<Vec<Arc<Facility>>> {
        self.facilities.snapshot()
    }

    pub fn vehicles_snapshot(&self) -> Arc<Vec<Arc<ServiceVehicle>>> {
        self.vehicles.snapshot()
    }

    pub fn departments_snapshot(&self) -> Arc<Vec<Arc<SecurityDepartment>>> {
        self.departments.snapshot()
    }

    pub fn facility_types_snapshot(&self) -> Arc<Vec<Arc<FacilityTypeDef>>> {
        self.facility_types.snapshot()
    }

    pub fn security_logs_snapshot(&self) -> Arc<Vec<Arc<SecurityLog>>> {
        self.security_logs.snapshot()
    }

    pub fn call_logs_snapshot(&self) -> Arc<Vec<Arc<CallLog>>> {
        self.call_logs.snapshot()
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn alarm(&self, id: &AlarmId) -> Option<Arc<Alarm>> {
        self.alarms.get(id.as_str())
    }

    pub fn unit(&self, id: &str) -> Option<Arc<Unit>> {
        self.units.get(id)
    }

    pub fn facility(&self, id: &str) -> Option<Arc<Facility>> {
        self.facilities.get(id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn alarm_count(&self) -> usize {
        self.alarms.len()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_alarms(&self) -> EntityStream<Alarm> {
        EntityStream::new(self.alarms.subscribe())
    }

    pub fn subscribe_units(&self) -> EntityStream<Unit> {
        EntityStream::new(self.units.subscribe())
    }

    pub fn subscribe_facilities(&self) -> EntityStream<Facility> {
        EntityStream::new(self.facilities.subscribe())
    }

    pub fn subscribe_vehicles(&self) -> EntityStream<ServiceVehicle> {
        EntityStream::new(self.vehicles.subscribe())
    }

    pub fn subscribe_departments(&self) -> EntityStream<SecurityDepartment> {
        EntityStream::new(self.departments.subscribe())
    }

    pub fn subscribe_facility_types(&self) -> EntityStream<FacilityTypeDef> {
        EntityStream::new(self.facility_types.subscribe())
    }

    pub fn subscribe_security_logs(&self) -> EntityStream<SecurityLog> {
        EntityStream::new(self.security_logs.subscribe())
    }

    pub fn subscribe_call_logs(&self) -> EntityStream<CallLog> {
        EntityStream::new(self.call_logs.subscribe())
    }

    // ── Reference-data CRUD ──────────────────────────────────────────
    //
    // The management pages insert, replace, archive, and delete records
    // wholesale; alarms are never CRUD'd — they only move through the
    // dispatcher.

    /// Insert or replace a facility.
    pub fn upsert_facility(&self, facility: Facility) -> bool {
        self.facilities.upsert(facility.id.clone(), facility)
    }

    /// Insert or replace a unit.
    pub fn upsert_unit(&self, unit: Unit) -> bool {
        self.units.upsert(unit.id.clone(), unit)
    }

    /// Insert or replace a vehicle.
    pub fn upsert_vehicle(&self, vehicle: ServiceVehicle) -> bool {
        self.vehicles.upsert(vehicle.id.clone(), vehicle)
    }

    /// Insert or replace a department.
    pub fn upsert_department(&self, department: SecurityDepartment) -> bool {
        self.departments.upsert(department.id.clone(), department)
    }

    /// Insert or replace a facility type definition.
    pub fn upsert_facility_type(&self, def: FacilityTypeDef) -> bool {
        self.facility_types.upsert(def.id.clone(), def)
    }

    /// Delete a unit.
    pub fn delete_unit(&self, id: &str) -> Result<(), CoreError> {
        self.units
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::UnitNotFound { id: id.to_owned() })
    }

    /// Delete a vehicle.
    pub fn delete_vehicle(&self, id: &str) -> Result<(), CoreError> {
        self.vehicles.remove(id).map(|_| ()).ok_or_else(|| {
            CoreError::NotFound {
                entity_type: "vehicle".into(),
                identifier: id.to_owned(),
            }
        })
    }

    /// Delete a facility type definition.
    ///
    /// Rejected while any facility still uses the type's code.
    pub fn delete_facility_type(&self, id: &str) -> Result<(), CoreError> {
        let Some(def) = self.facility_types.get(id) else {
            return Err(CoreError::NotFound {
                entity_type: "facility type".into(),
                identifier: id.to_owned(),
            });
        };

        let in_use = self
            .facilities_snapshot()
            .iter()
            .any(|f| f.facility_type == def.code);
        if in_use {
            return Err(CoreError::ValidationFailed {
                message: format!("facility type {} is still in use", def.code),
            });
        }

        self.facility_types.remove(id);
        Ok(())
    }

    /// Flip a vehicle's archived flag. Returns the new state.
    pub fn toggle_vehicle_archived(&self, id: &str) -> Result<bool, CoreError> {
        self.vehicles
            .update(id, |v| v.is_archived = !v.is_archived)
            .map(|v| v.is_archived)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "vehicle".into(),
                identifier: id.to_owned(),
            })
    }

    /// Flip a facility's archived flag. Returns the new state.
    pub fn toggle_facility_archived(&self, id: &str) -> Result<bool, CoreError> {
        self.facilities
            .update(id, |f| f.is_archived = !f.is_archived)
            .map(|f| f.is_archived)
            .ok_or_else(|| CoreError::FacilityNotFound { id: id.to_owned() })
    }

    /// Flip a department's archived flag. Returns the new state.
    pub fn toggle_department_archived(&self, id: &str) -> Result<bool, CoreError> {
        self.departments
            .update(id, |d| d.is_archived = !d.is_archived)
            .map(|d| d.is_archived)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "department".into(),
                identifier: id.to_owned(),
            })
    }

    /// Append a security-log row.
    pub fn append_security_log(&self, log: SecurityLog) {
        self.security_logs.upsert(log.id.clone(), log);
    }

    /// Append a call-center log row.
    pub fn append_call_log(&self, call: CallLog) {
        self.call_logs.upsert(call.id.clone(), call);
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_feed_tick(&self) -> Option<DateTime<Utc>> {
        *self.last_feed_tick.borrow()
    }

    pub fn subscribe_feed_tick(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.last_feed_tick.subscribe()
    }
}

impl Default for DispatchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::AlarmStatus;

    #[test]
    fn seeded_store_has_fixture_volumes() {
        let store = DispatchStore::seeded();
        assert_eq!(store.alarm_count(), 6);
        assert_eq!(store.unit_count(), 4);
        assert_eq!(store.facility_count(), 5);
        assert_eq!(store.vehicles_snapshot().len(), 5);
        assert_eq!(store.departments_snapshot().len(), 4);
        assert_eq!(store.facility_types_snapshot().len(), 9);
        assert_eq!(store.security_logs_snapshot().len(), 10);
        assert_eq!(store.call_logs_snapshot().len(), 8);
    }

    #[test]
    fn seeded_alarms_include_active_and_terminal() {
        let store = DispatchStore::seeded();
        let snap = store.alarms_snapshot();
        assert!(snap.iter().any(|a| a.status == AlarmStatus::Active));
        assert!(snap.iter().any(|a| a.status.is_terminal()));
    }

    #[test]
    fn delete_facility_type_in_use_is_rejected() {
        let store = DispatchStore::seeded();
        // "3" is SHOP, used by two fixture facilities.
        let err = store.delete_facility_type("3").unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));

        // "8" is PHARMACY, unused.
        store.delete_facility_type("8").unwrap();
        assert_eq!(store.facility_types_snapshot().len(), 8);
    }

    #[test]
    fn delete_missing_unit_is_explicit_error() {
        let store = DispatchStore::seeded();
        let err = store.delete_unit("U-999").unwrap_err();
        assert!(matches!(err, CoreError::UnitNotFound { .. }));
    }

    #[test]
    fn toggle_vehicle_archived_round_trips() {
        let store = DispatchStore::seeded();
        assert!(store.toggle_vehicle_archived("V-001").unwrap());
        assert!(!store.toggle_vehicle_archived("V-001").unwrap());
    }
}
