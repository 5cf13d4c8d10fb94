// ── Runtime dispatch configuration ──
//
// Describes *how* the dispatcher runs: feed cadence, operator identity,
// audible-cue parameters. Carries tuning only and never touches disk —
// the config crate builds a `DispatchConfig` and hands it in.

use crate::feed::AlarmTone;
use crate::store::fixtures;

/// Configuration for a [`Dispatcher`](crate::Dispatcher) instance.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Operator name stamped onto call records.
    pub operator_name: String,
    /// Seconds between synthetic feed ticks. 0 = generator disabled.
    pub feed_interval_secs: u64,
    /// Audible-cue parameters broadcast with non-warning alarms.
    pub tone: AlarmTone,
    /// Fixed RNG seed for deterministic tests. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    /// First counter value for alarm id allocation. Must be above every
    /// seeded alarm id so ids are never reused.
    pub next_alarm_counter: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            operator_name: "Operator A. A.".into(),
            feed_interval_secs: 300,
            tone: AlarmTone::default(),
            rng_seed: None,
            next_alarm_counter: fixtures::NEXT_ALARM_COUNTER,
        }
    }
}
