// ── Dispatcher facade ──
//
// Full lifecycle management for the alarm board. Owns the store, the id
// allocator, the RNG, and the feed broadcast channel; every mutation of
// an alarm flows through one of the operation methods below. Operations
// validate before they mutate: a rejected call leaves the store exactly
// as it was.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DispatchConfig;
use crate::error::CoreError;
use crate::feed::{self, FeedEvent};
use crate::model::{
    Alarm, AlarmId, AlarmIdAllocator, AlarmStatus, AlarmType, CallRecord, Facility, FinishReason,
    LogAction, SecurityLog, UnitAction, UnitActionKind,
};
use crate::store::DispatchStore;

const FEED_CHANNEL_SIZE: usize = 256;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<DispatcherInner>`. Construct with
/// [`new()`](Self::new) (seeded fixtures) or
/// [`with_store()`](Self::with_store), call [`start()`](Self::start) to
/// spawn the background feed generator, and drive the board through the
/// operation methods.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    config: DispatchConfig,
    store: Arc<DispatchStore>,
    ids: AlarmIdAllocator,
    rng: Mutex<StdRng>,
    feed_tx: broadcast::Sender<FeedEvent>,
    cancel: CancellationToken,
    task_handles: Mutex<Vec<JoinHandle<()>>>,
}

impl Dispatcher {
    /// A dispatcher over a store seeded from the static fixtures.
    pub fn new(config: DispatchConfig) -> Self {
        Self::with_store(config, Arc::new(DispatchStore::seeded()))
    }

    /// A dispatcher over a caller-provided store.
    pub fn with_store(config: DispatchConfig, store: Arc<DispatchStore>) -> Self {
        let (feed_tx, _) = broadcast::channel(FEED_CHANNEL_SIZE);
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let ids = AlarmIdAllocator::for_current_year(config.next_alarm_counter);

        Self {
            inner: Arc::new(DispatcherInner {
                config,
                store,
                ids,
                rng: Mutex::new(rng),
                feed_tx,
                cancel: CancellationToken::new(),
                task_handles: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Access the dispatcher configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.inner.config
    }

    /// Access the underlying store.
    pub fn store(&self) -> &Arc<DispatchStore> {
        &self.inner.store
    }

    /// Subscribe to the feed broadcast stream.
    pub fn subscribe_feed(&self) -> broadcast::Receiver<FeedEvent> {
        self.inner.feed_tx.subscribe()
    }

    pub(crate) fn rng(&self) -> MutexGuard<'_, StdRng> {
        match self.inner.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_handles(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        match self.inner.task_handles.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // ── Background lifecycle ─────────────────────────────────────────

    /// Spawn the background feed generator (no-op when the interval is 0).
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let interval_secs = self.inner.config.feed_interval_secs;
        if interval_secs == 0 {
            debug!("feed generator disabled");
            return;
        }

        let dispatcher = self.clone();
        let cancel = self.inner.cancel.clone();
        let period = Duration::from_secs(interval_secs);
        self.lock_handles()
            .push(tokio::spawn(feed::feed_task(dispatcher, period, cancel)));
        info!(interval_secs, "feed generator started");
    }

    /// Cancel background tasks and wait for them to drain.
    pub async fn shutdown(&self) {
        self.inner.cancel.cancel();
        let handles: Vec<JoinHandle<()>> = self.lock_handles().drain(..).collect();
        for handle in handles {
            let _ = handle.await;
        }
        debug!("dispatcher shut down");
    }

    // ── Alarm creation ───────────────────────────────────────────────

    /// Raise a new alarm against a facility, snapshotting its fields by
    /// value. Used by the feed generator and for manually reported
    /// incidents.
    pub fn raise_alarm(
        &self,
        facility_id: &str,
        alarm_type: AlarmType,
        description: impl Into<String>,
    ) -> Result<Arc<Alarm>, CoreError> {
        let store = &self.inner.store;
        let facility = store
            .facility(facility_id)
            .ok_or_else(|| CoreError::FacilityNotFound {
                id: facility_id.to_owned(),
            })?;

        let id = self.inner.ids.next();
        let now = Utc::now();
        let alarm = Alarm::raised_at(id.clone(), alarm_type, &facility, now, description);
        let alarm = Arc::new(alarm);

        store.alarms.upsert(id.to_string(), Alarm::clone(&alarm));
        store
            .facilities
            .update(facility_id, |f| f.active_alarm_id = Some(id.clone()));
        store.append_security_log(SecurityLog {
            id: format!("L-{}", Uuid::new_v4()),
            timestamp: now,
            department: facility.department.clone(),
            facility_name: facility.name.clone(),
            facility_code: facility.id.clone(),
            address: facility.address.clone(),
            action: LogAction::from(alarm_type),
        });

        let tone = (!alarm_type.is_warning()).then(|| self.inner.config.tone);
        let _ = self.inner.feed_tx.send(FeedEvent::AlarmRaised {
            alarm: Arc::clone(&alarm),
            tone,
        });

        info!(alarm = %alarm.id, facility = %facility_id, ?alarm_type, "alarm raised");
        Ok(alarm)
    }

    // ── Lifecycle operations ─────────────────────────────────────────

    /// Attach a unit to an alarm, transitioning it to ACTIVE.
    ///
    /// Candidates are restricted to the alarm's department (or the unit
    /// already assigned). The unit goes BUSY/ALARM with a back-reference
    /// to this alarm; a displaced unit is released.
    pub fn assign_unit(&self, alarm_id: &AlarmId, unit_id: &str) -> Result<Arc<Alarm>, CoreError> {
        let store = &self.inner.store;
        let unit = store.unit(unit_id).ok_or_else(|| CoreError::UnitNotFound {
            id: unit_id.to_owned(),
        })?;

        let now = Utc::now();
        let mut displaced: Option<String> = None;
        let updated = store
            .alarms
            .try_update(alarm_id.as_str(), |a| {
                if a.status.is_terminal() {
                    return Err(CoreError::AlarmClosed { id: a.id.clone() });
                }
                if unit.department != a.department
                    && a.assigned_unit_id.as_deref() != Some(unit_id)
                {
                    return Err(CoreError::WrongDepartment {
                        unit_id: unit_id.to_owned(),
                        unit_department: unit.department.to_string(),
                        alarm_department: a.department.to_string(),
                    });
                }

                displaced = a.assigned_unit_id.take().filter(|prev| prev != unit_id);
                a.assigned_unit_id = Some(unit_id.to_owned());
                a.status = AlarmStatus::Active;
                a.unit_actions.push(UnitAction {
                    unit_name: unit.name.clone(),
                    action: "attached to the call".into(),
                    kind: UnitActionKind::Accept,
                    timestamp: now,
                });
                Ok(())
            })?
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })?;

        if let Some(prev) = displaced {
            store.units.update(&prev, |u| u.release(now));
        }
        store
            .units
            .update(unit_id, |u| u.engage(alarm_id.clone(), now));

        info!(alarm = %alarm_id, unit = %unit_id, "unit assigned");
        Ok(updated)
    }

    /// Detach the assigned unit, reverting the alarm to RECEIVED and
    /// releasing the unit.
    pub fn unassign_unit(&self, alarm_id: &AlarmId) -> Result<Arc<Alarm>, CoreError> {
        let store = &self.inner.store;
        let now = Utc::now();
        let mut released: Option<String> = None;

        let updated = store
            .alarms
            .try_update(alarm_id.as_str(), |a| {
                if a.status.is_terminal() {
                    return Err(CoreError::AlarmClosed { id: a.id.clone() });
                }
                let Some(unit_id) = a.assigned_unit_id.take() else {
                    return Err(CoreError::NoUnitAssigned { id: a.id.clone() });
                };

                let unit_name = store
                    .unit(&unit_id)
                    .map_or_else(|| unit_id.clone(), |u| u.name.clone());
                a.status = AlarmStatus::Received;
                a.unit_actions.push(UnitAction {
                    unit_name,
                    action: format!("detached from alarm ({})", a.id),
                    kind: UnitActionKind::Info,
                    timestamp: now,
                });
                released = Some(unit_id);
                Ok(())
            })?
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })?;

        if let Some(unit_id) = released {
            store.units.update(&unit_id, |u| u.release(now));
            info!(alarm = %alarm_id, unit = %unit_id, "unit unassigned");
        }
        Ok(updated)
    }

    /// Close an alarm.
    ///
    /// Accepted for a RECEIVED alarm, or an ACTIVE one whose unit has
    /// reported its work finished. `FalseAlarm` is only a legal reason
    /// for real alarms — warnings resolve, they are never "false".
    pub fn finish(
        &self,
        alarm_id: &AlarmId,
        reason: FinishReason,
    ) -> Result<Arc<Alarm>, CoreError> {
        let store = &self.inner.store;
        let now = Utc::now();
        let mut assigned: Option<String> = None;

        let updated = store
            .alarms
            .try_update(alarm_id.as_str(), |a| {
                if a.status.is_terminal() {
                    return Err(CoreError::AlarmClosed { id: a.id.clone() });
                }
                if !a.can_finish() {
                    return Err(CoreError::NotFinishable { id: a.id.clone() });
                }
                if reason == FinishReason::FalseAlarm && a.alarm_type.is_warning() {
                    return Err(CoreError::ValidationFailed {
                        message: format!(
                            "warning {} cannot be closed as a false alarm",
                            a.id
                        ),
                    });
                }

                a.status = match reason {
                    FinishReason::FalseAlarm => AlarmStatus::FalseAlarm,
                    FinishReason::Resolved | FinishReason::Test => AlarmStatus::Finished,
                };
                // Keep `assigned_unit_id` on the record — the alarm is a
                // historical account of who handled it.
                assigned = a.assigned_unit_id.clone();
                Ok(())
            })?
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })?;

        if let Some(unit_id) = assigned {
            store.units.update(&unit_id, |u| u.release(now));
        }
        store.facilities.update(&updated.facility_code, |f| {
            if f.active_alarm_id.as_ref() == Some(alarm_id) {
                f.active_alarm_id = None;
            }
        });

        info!(alarm = %alarm_id, ?reason, status = ?updated.status, "alarm finished");
        Ok(updated)
    }

    /// Mark an alarm as seen by the dispatcher. Idempotent.
    pub fn mark_seen(&self, alarm_id: &AlarmId) -> Result<Arc<Alarm>, CoreError> {
        self.inner
            .store
            .alarms
            .update(alarm_id.as_str(), |a| a.is_seen = true)
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })
    }

    /// Record an operator call on an alarm, newest first.
    ///
    /// The demo duration policy draws 15 s–2 min from the dispatcher's
    /// seedable RNG.
    pub fn record_call(
        &self,
        alarm_id: &AlarmId,
        phone_number: &str,
    ) -> Result<Arc<Alarm>, CoreError> {
        let record = CallRecord {
            id: format!("CALL-{}", Uuid::new_v4()),
            operator_name: self.inner.config.operator_name.clone(),
            timestamp: Utc::now(),
            phone_number: phone_number.to_owned(),
            duration_secs: self.demo_call_duration_secs(),
            recording_url: "#".into(),
        };

        self.inner
            .store
            .alarms
            .update(alarm_id.as_str(), |a| a.call_history.insert(0, record))
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })
    }

    /// The assigned unit reports its field work done, unlocking
    /// [`finish`](Self::finish) for an ACTIVE alarm. Idempotent once set.
    pub fn report_unit_finished(&self, alarm_id: &AlarmId) -> Result<Arc<Alarm>, CoreError> {
        let store = &self.inner.store;
        let now = Utc::now();

        store
            .alarms
            .try_update(alarm_id.as_str(), |a| {
                if a.status.is_terminal() {
                    return Err(CoreError::AlarmClosed { id: a.id.clone() });
                }
                let Some(unit_id) = a.assigned_unit_id.clone() else {
                    return Err(CoreError::NoUnitAssigned { id: a.id.clone() });
                };
                if a.unit_finished_work {
                    return Ok(());
                }

                let unit_name = store
                    .unit(&unit_id)
                    .map_or_else(|| unit_id.clone(), |u| u.name.clone());
                a.unit_finished_work = true;
                a.unit_actions.push(UnitAction {
                    unit_name,
                    action: "finished the call".into(),
                    kind: UnitActionKind::Finish,
                    timestamp: now,
                });
                Ok(())
            })?
            .ok_or_else(|| CoreError::AlarmNotFound {
                id: alarm_id.clone(),
            })
    }

    /// Arm or disarm a facility, logging the change. Idempotent: setting
    /// the current state appends nothing.
    pub fn set_armed(&self, facility_id: &str, armed: bool) -> Result<Arc<Facility>, CoreError> {
        let store = &self.inner.store;
        let mut changed = false;

        let updated = store
            .facilities
            .update(facility_id, |f| {
                changed = f.is_armed != armed;
                f.is_armed = armed;
            })
            .ok_or_else(|| CoreError::FacilityNotFound {
                id: facility_id.to_owned(),
            })?;

        if changed {
            store.append_security_log(SecurityLog {
                id: format!("L-{}", Uuid::new_v4()),
                timestamp: Utc::now(),
                department: updated.department.clone(),
                facility_name: updated.name.clone(),
                facility_code: updated.id.clone(),
                address: updated.address.clone(),
                action: if armed { LogAction::Arm } else { LogAction::Disarm },
            });
            info!(facility = %facility_id, armed, "facility arm state changed");
        }
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ShiftStatus, UnitStatus};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(DispatchConfig {
            rng_seed: Some(42),
            ..DispatchConfig::default()
        })
    }

    fn fixture_id(counter: u64) -> AlarmId {
        AlarmId::new(crate::store::fixtures::FIXTURE_YEAR, counter)
    }

    // 2025-123 is a seeded RECEIVED general alarm in Kentron.
    const RECEIVED_GENERAL: u64 = 123;
    // 2025-126 is a seeded RECEIVED power-loss warning in Kentron.
    const RECEIVED_WARNING: u64 = 126;
    // 2025-124 is ACTIVE with U-104 assigned and work reported finished.
    const ACTIVE_FINISHABLE: u64 = 124;
    // 2025-120 is FINISHED.
    const TERMINAL: u64 = 120;

    #[test]
    fn assign_transitions_received_to_active_and_engages_unit() {
        let d = dispatcher();
        let id = fixture_id(RECEIVED_GENERAL);

        let alarm = d.assign_unit(&id, "U-101").unwrap();
        assert_eq!(alarm.status, AlarmStatus::Active);
        assert_eq!(alarm.assigned_unit_id.as_deref(), Some("U-101"));
        assert_eq!(alarm.unit_actions.last().unwrap().kind, UnitActionKind::Accept);

        let unit = d.store().unit("U-101").unwrap();
        assert_eq!(unit.status, UnitStatus::Busy);
        assert_eq!(unit.shift_status, ShiftStatus::Alarm);
        assert_eq!(unit.active_alarm_id, Some(id));
    }

    #[test]
    fn assign_rejects_department_mismatch() {
        let d = dispatcher();
        // U-103 is Nor Nork; 2025-123 is Kentron.
        let err = d.assign_unit(&fixture_id(RECEIVED_GENERAL), "U-103").unwrap_err();
        assert!(matches!(err, CoreError::WrongDepartment { .. }));

        let alarm = d.store().alarm(&fixture_id(RECEIVED_GENERAL)).unwrap();
        assert_eq!(alarm.status, AlarmStatus::Received, "rejection must not mutate");
    }

    #[test]
    fn assign_missing_ids_are_explicit_errors() {
        let d = dispatcher();
        assert!(matches!(
            d.assign_unit(&AlarmId::from("2099-1"), "U-101"),
            Err(CoreError::AlarmNotFound { .. })
        ));
        assert!(matches!(
            d.assign_unit(&fixture_id(RECEIVED_GENERAL), "U-999"),
            Err(CoreError::UnitNotFound { .. })
        ));
    }

    #[test]
    fn reassign_releases_displaced_unit() {
        let d = dispatcher();
        let id = fixture_id(ACTIVE_FINISHABLE); // currently U-104

        d.assign_unit(&id, "U-101").unwrap();

        let displaced = d.store().unit("U-104").unwrap();
        assert_eq!(displaced.status, UnitStatus::Available);
        assert_eq!(displaced.active_alarm_id, None);
        let current = d.store().unit("U-101").unwrap();
        assert_eq!(current.active_alarm_id, Some(id));
    }

    #[test]
    fn unassign_reverts_to_received_and_releases_unit() {
        let d = dispatcher();
        let id = fixture_id(RECEIVED_GENERAL);
        d.assign_unit(&id, "U-101").unwrap();

        let alarm = d.unassign_unit(&id).unwrap();
        assert_eq!(alarm.status, AlarmStatus::Received);
        assert_eq!(alarm.assigned_unit_id, None);
        assert_eq!(alarm.unit_actions.last().unwrap().kind, UnitActionKind::Info);

        let unit = d.store().unit("U-101").unwrap();
        assert_eq!(unit.status, UnitStatus::Available);
        assert_eq!(unit.shift_status, ShiftStatus::OnDuty);
    }

    #[test]
    fn unassign_without_assignment_is_rejected() {
        let d = dispatcher();
        let err = d.unassign_unit(&fixture_id(RECEIVED_GENERAL)).unwrap_err();
        assert!(matches!(err, CoreError::NoUnitAssigned { .. }));
    }

    #[test]
    fn finish_gate_follows_the_spec_scenario() {
        let d = dispatcher();

        // A freshly RECEIVED alarm is finishable.
        let done = d.finish(&fixture_id(RECEIVED_GENERAL), FinishReason::Resolved).unwrap();
        assert_eq!(done.status, AlarmStatus::Finished);

        // Assigning another RECEIVED alarm makes it ACTIVE; now the gate holds.
        let id = fixture_id(127);
        d.assign_unit(&id, "U-101").unwrap();
        let err = d.finish(&id, FinishReason::Resolved).unwrap_err();
        assert!(matches!(err, CoreError::NotFinishable { .. }));

        // Once the unit reports finished, the close is accepted.
        d.report_unit_finished(&id).unwrap();
        let done = d.finish(&id, FinishReason::Resolved).unwrap();
        assert_eq!(done.status, AlarmStatus::Finished);
    }

    #[test]
    fn finish_false_alarm_maps_status_and_rejects_warnings() {
        let d = dispatcher();

        let done = d
            .finish(&fixture_id(RECEIVED_GENERAL), FinishReason::FalseAlarm)
            .unwrap();
        assert_eq!(done.status, AlarmStatus::FalseAlarm);

        let err = d
            .finish(&fixture_id(RECEIVED_WARNING), FinishReason::FalseAlarm)
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationFailed { .. }));

        // The warning still resolves normally.
        let done = d
            .finish(&fixture_id(RECEIVED_WARNING), FinishReason::Resolved)
            .unwrap();
        assert_eq!(done.status, AlarmStatus::Finished);
    }

    #[test]
    fn finish_releases_unit_and_clears_facility_backref() {
        let d = dispatcher();
        let id = fixture_id(ACTIVE_FINISHABLE);

        let done = d.finish(&id, FinishReason::Resolved).unwrap();
        // The record keeps who handled it.
        assert_eq!(done.assigned_unit_id.as_deref(), Some("U-104"));

        let unit = d.store().unit("U-104").unwrap();
        assert_eq!(unit.status, UnitStatus::Available);
        assert_eq!(unit.active_alarm_id, None);

        let facility = d.store().facility("OBJ-055").unwrap();
        assert_eq!(facility.active_alarm_id, None);
    }

    #[test]
    fn terminal_alarms_reject_every_mutation() {
        let d = dispatcher();
        let id = fixture_id(TERMINAL);

        assert!(matches!(
            d.assign_unit(&id, "U-102"),
            Err(CoreError::AlarmClosed { .. })
        ));
        assert!(matches!(
            d.unassign_unit(&id),
            Err(CoreError::AlarmClosed { .. })
        ));
        assert!(matches!(
            d.finish(&id, FinishReason::Resolved),
            Err(CoreError::AlarmClosed { .. })
        ));
        assert!(matches!(
            d.report_unit_finished(&id),
            Err(CoreError::AlarmClosed { .. })
        ));
    }

    #[test]
    fn mark_seen_is_idempotent() {
        let d = dispatcher();
        let id = fixture_id(RECEIVED_GENERAL);

        assert!(d.mark_seen(&id).unwrap().is_seen);
        assert!(d.mark_seen(&id).unwrap().is_seen);
        assert!(matches!(
            d.mark_seen(&AlarmId::from("2099-1")),
            Err(CoreError::AlarmNotFound { .. })
        ));
    }

    #[test]
    fn record_call_prepends_newest_first() {
        let d = dispatcher();
        let id = fixture_id(RECEIVED_GENERAL);

        d.record_call(&id, "091-11-22-33").unwrap();
        let alarm = d.record_call(&id, "010-55-44-33").unwrap();

        assert_eq!(alarm.call_history.len(), 2);
        assert_eq!(alarm.call_history[0].phone_number, "010-55-44-33");
        assert_eq!(alarm.call_history[1].phone_number, "091-11-22-33");
        assert_eq!(alarm.call_history[0].operator_name, "Operator A. A.");
        for call in &alarm.call_history {
            assert!((15..120).contains(&call.duration_secs));
        }
    }

    #[test]
    fn record_call_durations_are_deterministic_under_a_seed() {
        let durations = |seed: u64| -> Vec<u32> {
            let d = Dispatcher::new(DispatchConfig {
                rng_seed: Some(seed),
                ..DispatchConfig::default()
            });
            let id = fixture_id(RECEIVED_GENERAL);
            (0..5)
                .map(|_| d.record_call(&id, "000").unwrap().call_history[0].duration_secs)
                .collect()
        };
        assert_eq!(durations(9), durations(9));
    }

    #[test]
    fn report_unit_finished_is_idempotent_and_needs_assignment() {
        let d = dispatcher();
        let id = fixture_id(RECEIVED_GENERAL);

        assert!(matches!(
            d.report_unit_finished(&id),
            Err(CoreError::NoUnitAssigned { .. })
        ));

        d.assign_unit(&id, "U-101").unwrap();
        let first = d.report_unit_finished(&id).unwrap();
        let again = d.report_unit_finished(&id).unwrap();
        assert!(again.unit_finished_work);
        assert_eq!(first.unit_actions.len(), again.unit_actions.len());
    }

    #[test]
    fn set_armed_logs_only_transitions() {
        let d = dispatcher();
        let logs_before = d.store().security_logs_snapshot().len();

        // OBJ-099 is seeded disarmed.
        let f = d.set_armed("OBJ-099", true).unwrap();
        assert!(f.is_armed);
        assert_eq!(d.store().security_logs_snapshot().len(), logs_before + 1);

        // Same state again: no new log row.
        d.set_armed("OBJ-099", true).unwrap();
        assert_eq!(d.store().security_logs_snapshot().len(), logs_before + 1);
    }

    #[test]
    fn raise_alarm_snapshot_survives_facility_edits() {
        let d = dispatcher();
        let alarm = d.raise_alarm("OBJ-001", AlarmType::General, "manual report").unwrap();
        let original_address = alarm.address.clone();

        // Edit the facility after the fact.
        let mut edited = crate::model::Facility::clone(&d.store().facility("OBJ-001").unwrap());
        edited.address = "relocated".into();
        d.store().upsert_facility(edited);

        let stored = d.store().alarm(&alarm.id).unwrap();
        assert_eq!(stored.address, original_address, "snapshot must not follow the facility");
    }

    #[tokio::test]
    async fn start_and_shutdown_drain_the_feed_task() {
        let d = Dispatcher::new(DispatchConfig {
            feed_interval_secs: 3600,
            rng_seed: Some(1),
            ..DispatchConfig::default()
        });
        d.start();
        d.shutdown().await;
    }
}
