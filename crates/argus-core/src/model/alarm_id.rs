// ── Alarm identity ──
//
// Alarm ids are strings of the form "<year>-<counter>". The counter is
// a process-wide atomic: it is the single source of truth for id
// allocation and is never derived from collection length, so concurrent
// feed ticks can never hand out the same id.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

// ── AlarmId ─────────────────────────────────────────────────────────

/// Canonical alarm identifier, e.g. `"2025-128"`.
///
/// Within a session the counter only grows and the year prefix is
/// stable, so lexicographic string order matches allocation order for
/// ids of equal digit count. The feed sort relies on exactly that
/// (see `view::alarms`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmId(String);

impl AlarmId {
    /// Format an id from its parts.
    pub fn new(year: i32, counter: u64) -> Self {
        Self(format!("{year}-{counter}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split back into `(year, counter)`, if the id is well-formed.
    ///
    /// Fixture and test ids always are; ids from outside callers may
    /// not be, hence the `Option`.
    pub fn parts(&self) -> Option<(i32, u64)> {
        let (year, counter) = self.0.split_once('-')?;
        Some((year.parse().ok()?, counter.parse().ok()?))
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlarmId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for AlarmId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for AlarmId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── AlarmIdAllocator ────────────────────────────────────────────────

/// Process-wide monotonic id allocator.
///
/// `next()` is wait-free and never reuses a value, regardless of how
/// many tasks allocate concurrently.
#[derive(Debug)]
pub struct AlarmIdAllocator {
    year: i32,
    counter: AtomicU64,
}

impl AlarmIdAllocator {
    /// Allocator whose first id will be `"<year>-<next_counter>"`.
    pub fn starting_at(year: i32, next_counter: u64) -> Self {
        Self {
            year,
            counter: AtomicU64::new(next_counter),
        }
    }

    /// Allocator for the current year.
    pub fn for_current_year(next_counter: u64) -> Self {
        Self::starting_at(Utc::now().year(), next_counter)
    }

    /// Allocate the next id.
    pub fn next(&self) -> AlarmId {
        let counter = self.counter.fetch_add(1, Ordering::Relaxed);
        AlarmId::new(self.year, counter)
    }

    /// The counter value the next call to [`next()`](Self::next) will use.
    pub fn peek(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn id_formats_year_dash_counter() {
        assert_eq!(AlarmId::new(2025, 128).as_str(), "2025-128");
    }

    #[test]
    fn parts_round_trip() {
        let id = AlarmId::new(2025, 7);
        assert_eq!(id.parts(), Some((2025, 7)));
    }

    #[test]
    fn parts_rejects_malformed() {
        let id = AlarmId::from("garbage");
        assert_eq!(id.parts(), None);
    }

    #[test]
    fn allocation_is_strictly_increasing_and_unique() {
        let alloc = AlarmIdAllocator::starting_at(2025, 1);
        let ids: Vec<AlarmId> = (0..50).map(|_| alloc.next()).collect();

        let counters: Vec<u64> = ids.iter().map(|id| id.parts().unwrap().1).collect();
        assert!(
            counters.windows(2).all(|w| w[0] < w[1]),
            "numeric suffixes must be strictly increasing"
        );
        let unique: std::collections::HashSet<u64> = counters.iter().copied().collect();
        assert_eq!(unique.len(), 50, "ids must be pairwise distinct");
    }

    #[test]
    fn concurrent_allocation_never_collides() {
        let alloc = Arc::new(AlarmIdAllocator::starting_at(2025, 0));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let alloc = Arc::clone(&alloc);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| alloc.next()).collect::<Vec<_>>()
            }));
        }

        let mut all: Vec<AlarmId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        let before = all.len();
        all.dedup();
        assert_eq!(all.len(), before);
    }
}
