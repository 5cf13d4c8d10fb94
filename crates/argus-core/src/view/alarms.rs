// ── Alarm feed view ──
//
// The incident table: tab partition, multi-select facets, date range,
// id-descending sort, and fixed-size pages, plus the header stat cards.

use std::sync::Arc;

use chrono::NaiveDate;

use super::{page_count, page_slice};
use crate::model::{Alarm, AlarmStatus, AlarmType, Department};

/// Default page size of the alarm table.
pub const ALARM_PAGE_SIZE: usize = 9;

/// Top-level partition of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncidentTab {
    #[default]
    All,
    /// Real alarms only (GENERAL, SILENT).
    Alarm,
    /// Technical warnings only (POWER_LOSS, LOW_BATTERY, CONNECTION_LOST).
    Warning,
}

impl IncidentTab {
    fn admits(self, alarm: &Alarm) -> bool {
        match self {
            Self::All => true,
            Self::Alarm => !alarm.is_warning(),
            Self::Warning => alarm.is_warning(),
        }
    }
}

/// Filter and pagination inputs for the alarm table.
///
/// Every empty facet and unset date is a pass-through. Callers reset
/// `page` to 1 whenever any other input changes.
#[derive(Debug, Clone)]
pub struct AlarmQuery {
    pub tab: IncidentTab,
    /// Inclusive, from start of day.
    pub date_start: Option<NaiveDate>,
    /// Inclusive, through end of day (23:59:59.999).
    pub date_end: Option<NaiveDate>,
    pub departments: Vec<Department>,
    pub types: Vec<AlarmType>,
    pub statuses: Vec<AlarmStatus>,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for AlarmQuery {
    fn default() -> Self {
        Self {
            tab: IncidentTab::All,
            date_start: None,
            date_end: None,
            departments: Vec::new(),
            types: Vec::new(),
            statuses: Vec::new(),
            page: 1,
            page_size: ALARM_PAGE_SIZE,
        }
    }
}

impl AlarmQuery {
    /// All filter clauses AND-ed together.
    pub fn matches(&self, alarm: &Alarm) -> bool {
        if !self.tab.admits(alarm) {
            return false;
        }
        if !self.departments.is_empty() && !self.departments.contains(&alarm.department) {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&alarm.alarm_type) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&alarm.status) {
            return false;
        }

        let day = alarm.timestamp.date_naive();
        if self.date_start.is_some_and(|start| day < start) {
            return false;
        }
        if self.date_end.is_some_and(|end| day > end) {
            return false;
        }
        true
    }

    /// Whether any facet or date is narrowing the feed (tab excluded).
    pub fn has_active_filters(&self) -> bool {
        self.date_start.is_some()
            || self.date_end.is_some()
            || !self.departments.is_empty()
            || !self.types.is_empty()
            || !self.statuses.is_empty()
    }
}

/// One derived page of the alarm table.
#[derive(Debug, Clone)]
pub struct AlarmPage {
    pub items: Vec<Arc<Alarm>>,
    /// Filtered (pre-slice) count.
    pub total: usize,
    pub page_count: usize,
}

/// Derive the visible page from a snapshot.
pub fn derive_alarm_page(alarms: &[Arc<Alarm>], query: &AlarmQuery) -> AlarmPage {
    let mut filtered: Vec<Arc<Alarm>> = alarms
        .iter()
        .filter(|a| query.matches(a))
        .map(Arc::clone)
        .collect();

    // Sort strictly by id, descending, comparing the id *strings* —
    // parity with the board this replaces. Lexicographic order only
    // matches allocation order while the counter keeps its digit count;
    // "2025-99" sorts above "2025-101". Switching to
    // `AlarmId::parts()` tuples would change visible ordering.
    filtered.sort_by(|a, b| b.id.as_str().cmp(a.id.as_str()));

    let total = filtered.len();
    AlarmPage {
        items: page_slice(&filtered, query.page, query.page_size),
        total,
        page_count: page_count(total, query.page_size),
    }
}

/// Header stat cards.
///
/// `total`/`received`/`active`/`unseen` cover the tab-filtered list
/// (facets are not applied); the `total_*` trio is tab-independent and
/// counts open (RECEIVED or ACTIVE) records only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub total: usize,
    pub received: usize,
    pub active: usize,
    pub unseen: usize,
    pub total_all: usize,
    pub total_alarms: usize,
    pub total_warnings: usize,
}

pub fn derive_feed_stats(alarms: &[Arc<Alarm>], tab: IncidentTab) -> FeedStats {
    let open = |a: &Alarm| matches!(a.status, AlarmStatus::Received | AlarmStatus::Active);
    let in_tab: Vec<&Arc<Alarm>> = alarms.iter().filter(|a| tab.admits(a)).collect();

    FeedStats {
        total: in_tab.len(),
        received: in_tab
            .iter()
            .filter(|a| a.status == AlarmStatus::Received)
            .count(),
        active: in_tab
            .iter()
            .filter(|a| a.status == AlarmStatus::Active)
            .count(),
        unseen: in_tab.iter().filter(|a| !a.is_seen).count(),
        total_all: alarms.iter().filter(|a| open(a)).count(),
        total_alarms: alarms
            .iter()
            .filter(|a| !a.is_warning() && open(a))
            .count(),
        total_warnings: alarms
            .iter()
            .filter(|a| a.is_warning() && open(a))
            .count(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{AlarmId, Coordinates};
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn alarm(
        id: &str,
        alarm_type: AlarmType,
        status: AlarmStatus,
        department: &str,
        timestamp: DateTime<Utc>,
    ) -> Arc<Alarm> {
        Arc::new(Alarm {
            id: AlarmId::from(id),
            is_seen: false,
            status,
            timestamp,
            alarm_type,
            facility_code: "OBJ-1".into(),
            facility_name: "Facility".into(),
            facility_type: "SHOP".into(),
            address: "1 Main St".into(),
            department: Department::from(department),
            contact_person: "Contact".into(),
            contact_phones: vec!["000".into()],
            coordinates: Coordinates { x: 0.0, y: 0.0 },
            facility_password: None,
            description: String::new(),
            assigned_unit_id: None,
            unit_actions: Vec::new(),
            call_history: Vec::new(),
            unit_finished_work: false,
        })
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn sort_is_lexicographic_descending_not_chronological() {
        let t = at(2025, 1, 1, 0, 0, 0);
        let snapshot = vec![
            alarm("2025-101", AlarmType::General, AlarmStatus::Received, "Kentron", t),
            alarm("2025-99", AlarmType::General, AlarmStatus::Received, "Kentron", t),
            alarm("2025-100", AlarmType::General, AlarmStatus::Received, "Kentron", t),
        ];

        let page = derive_alarm_page(&snapshot, &AlarmQuery::default());
        let ids: Vec<&str> = page.items.iter().map(|a| a.id.as_str()).collect();
        // String compare puts "9" after "1", so 99 outranks both 100 and 101.
        assert_eq!(ids, vec!["2025-99", "2025-101", "2025-100"]);
    }

    #[test]
    fn tab_partitions_by_warning_classification() {
        let t = at(2025, 1, 1, 0, 0, 0);
        let snapshot = vec![
            alarm("2025-1", AlarmType::General, AlarmStatus::Received, "Kentron", t),
            alarm("2025-2", AlarmType::PowerLoss, AlarmStatus::Received, "Kentron", t),
            alarm("2025-3", AlarmType::Silent, AlarmStatus::Received, "Kentron", t),
        ];

        let q = |tab| AlarmQuery { tab, ..AlarmQuery::default() };
        assert_eq!(derive_alarm_page(&snapshot, &q(IncidentTab::All)).total, 3);
        assert_eq!(derive_alarm_page(&snapshot, &q(IncidentTab::Alarm)).total, 2);
        assert_eq!(derive_alarm_page(&snapshot, &q(IncidentTab::Warning)).total, 1);
    }

    #[test]
    fn date_end_includes_through_end_of_day() {
        let inside = alarm(
            "2025-1",
            AlarmType::General,
            AlarmStatus::Received,
            "Kentron",
            at(2025, 1, 10, 23, 59, 59) + chrono::Duration::milliseconds(999),
        );
        let outside = alarm(
            "2025-2",
            AlarmType::General,
            AlarmStatus::Received,
            "Kentron",
            at(2025, 1, 11, 0, 0, 0),
        );

        let query = AlarmQuery {
            date_end: NaiveDate::from_ymd_opt(2025, 1, 10),
            ..AlarmQuery::default()
        };
        assert!(query.matches(&inside));
        assert!(!query.matches(&outside));
    }

    #[test]
    fn date_start_is_inclusive_from_start_of_day() {
        let query = AlarmQuery {
            date_start: NaiveDate::from_ymd_opt(2025, 1, 10),
            ..AlarmQuery::default()
        };
        let on_start = alarm(
            "2025-1",
            AlarmType::General,
            AlarmStatus::Received,
            "Kentron",
            at(2025, 1, 10, 0, 0, 0),
        );
        let before = alarm(
            "2025-2",
            AlarmType::General,
            AlarmStatus::Received,
            "Kentron",
            at(2025, 1, 9, 23, 59, 59),
        );
        assert!(query.matches(&on_start));
        assert!(!query.matches(&before));
    }

    #[test]
    fn facets_are_idempotent_and_commutative() {
        let t = at(2025, 3, 5, 12, 0, 0);
        let snapshot: Vec<Arc<Alarm>> = (0..30)
            .map(|i| {
                let types = [
                    AlarmType::General,
                    AlarmType::Silent,
                    AlarmType::PowerLoss,
                    AlarmType::LowBattery,
                    AlarmType::ConnectionLost,
                ];
                let statuses = [
                    AlarmStatus::Received,
                    AlarmStatus::Active,
                    AlarmStatus::Finished,
                ];
                let departments = ["Kentron", "Arabkir", "Nor Nork"];
                alarm(
                    &format!("2025-{i}"),
                    types[i % types.len()],
                    statuses[i % statuses.len()],
                    departments[i % departments.len()],
                    t,
                )
            })
            .collect();

        let faceted = AlarmQuery {
            departments: vec![Department::from("Kentron"), Department::from("Arabkir")],
            types: vec![AlarmType::General, AlarmType::PowerLoss],
            statuses: vec![AlarmStatus::Received],
            ..AlarmQuery::default()
        };

        let ids = |alarms: &[&Arc<Alarm>]| -> Vec<String> {
            alarms.iter().map(|a| a.id.to_string()).collect()
        };

        let once: Vec<&Arc<Alarm>> = snapshot.iter().filter(|a| faceted.matches(a)).collect();
        // Applying the same predicate again changes nothing.
        let twice: Vec<&Arc<Alarm>> = once
            .iter()
            .filter(|a| faceted.matches(a))
            .copied()
            .collect();
        assert_eq!(ids(&once), ids(&twice));

        // AND is commutative: single-facet predicates composed in any
        // order agree with the combined query.
        let dept_only = AlarmQuery {
            departments: faceted.departments.clone(),
            ..AlarmQuery::default()
        };
        let type_only = AlarmQuery {
            types: faceted.types.clone(),
            ..AlarmQuery::default()
        };
        let status_only = AlarmQuery {
            statuses: faceted.statuses.clone(),
            ..AlarmQuery::default()
        };

        let composed_a: Vec<&Arc<Alarm>> = snapshot
            .iter()
            .filter(|a| dept_only.matches(a) && type_only.matches(a) && status_only.matches(a))
            .collect();
        let composed_b: Vec<&Arc<Alarm>> = snapshot
            .iter()
            .filter(|a| status_only.matches(a) && dept_only.matches(a) && type_only.matches(a))
            .collect();
        assert_eq!(ids(&once), ids(&composed_a));
        assert_eq!(ids(&composed_a), ids(&composed_b));
    }

    #[test]
    fn pagination_round_trip_reproduces_the_filtered_set() {
        let t = at(2025, 2, 2, 2, 0, 0);
        let snapshot: Vec<Arc<Alarm>> = (1..=23)
            .map(|i| {
                alarm(
                    &format!("2025-{i}"),
                    AlarmType::General,
                    AlarmStatus::Received,
                    "Kentron",
                    t,
                )
            })
            .collect();

        let full = derive_alarm_page(
            &snapshot,
            &AlarmQuery {
                page_size: 100,
                ..AlarmQuery::default()
            },
        );

        let query = AlarmQuery::default();
        let first = derive_alarm_page(&snapshot, &query);
        assert_eq!(first.total, 23);
        assert_eq!(first.page_count, 3);

        let mut concatenated = Vec::new();
        for page in 1..=first.page_count {
            let p = derive_alarm_page(&snapshot, &AlarmQuery { page, ..query.clone() });
            concatenated.extend(p.items);
        }

        let all_ids: Vec<&str> = full.items.iter().map(|a| a.id.as_str()).collect();
        let paged_ids: Vec<&str> = concatenated.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(all_ids, paged_ids, "no duplicates, no omissions, same order");
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page = derive_alarm_page(&[], &AlarmQuery::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn stats_follow_tab_and_open_statuses() {
        let t = at(2025, 1, 1, 0, 0, 0);
        let mut seen = alarm("2025-4", AlarmType::Silent, AlarmStatus::Active, "Kentron", t);
        Arc::make_mut(&mut seen).is_seen = true;
        let snapshot = vec![
            alarm("2025-1", AlarmType::General, AlarmStatus::Received, "Kentron", t),
            alarm("2025-2", AlarmType::PowerLoss, AlarmStatus::Received, "Kentron", t),
            alarm("2025-3", AlarmType::LowBattery, AlarmStatus::Finished, "Kentron", t),
            seen,
        ];

        let stats = derive_feed_stats(&snapshot, IncidentTab::All);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.received, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.unseen, 3);
        assert_eq!(stats.total_all, 3); // finished row excluded
        assert_eq!(stats.total_alarms, 2);
        assert_eq!(stats.total_warnings, 1);

        let stats = derive_feed_stats(&snapshot, IncidentTab::Warning);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.received, 1);
        // The tab-independent totals do not move with the tab.
        assert_eq!(stats.total_all, 3);
    }
}
