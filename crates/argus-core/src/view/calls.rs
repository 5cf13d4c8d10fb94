// ── Call-center log view ──

use std::sync::Arc;

use chrono::NaiveDate;

use super::{page_count, page_slice};
use crate::model::{CallLog, CallType, Department};

/// Default page size of the calls table.
pub const CALL_PAGE_SIZE: usize = 10;

/// Filter and pagination inputs for the calls table.
#[derive(Debug, Clone)]
pub struct CallLogQuery {
    /// Case-insensitive substring over phone number, facility name and
    /// code, and operator name.
    pub search: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub departments: Vec<Department>,
    pub types: Vec<CallType>,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for CallLogQuery {
    fn default() -> Self {
        Self {
            search: None,
            date_start: None,
            date_end: None,
            departments: Vec::new(),
            types: Vec::new(),
            page: 1,
            page_size: CALL_PAGE_SIZE,
        }
    }
}

impl CallLogQuery {
    pub fn matches(&self, call: &CallLog) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                let hit = call.phone_number.to_lowercase().contains(&term)
                    || call
                        .facility_name
                        .as_ref()
                        .is_some_and(|n| n.to_lowercase().contains(&term))
                    || call
                        .facility_code
                        .as_ref()
                        .is_some_and(|c| c.to_lowercase().contains(&term))
                    || call.operator_name.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        // A department facet excludes calls with no facility attached.
        if !self.departments.is_empty() {
            match call.department {
                Some(ref dept) if self.departments.contains(dept) => {}
                _ => return false,
            }
        }
        if !self.types.is_empty() && !self.types.contains(&call.call_type) {
            return false;
        }

        let day = call.timestamp.date_naive();
        if self.date_start.is_some_and(|start| day < start) {
            return false;
        }
        if self.date_end.is_some_and(|end| day > end) {
            return false;
        }
        true
    }
}

/// One derived page of the calls table.
#[derive(Debug, Clone)]
pub struct CallPage {
    pub items: Vec<Arc<CallLog>>,
    pub total: usize,
    pub page_count: usize,
}

/// Derive the visible page, newest call first.
pub fn derive_call_page(calls: &[Arc<CallLog>], query: &CallLogQuery) -> CallPage {
    let mut filtered: Vec<Arc<CallLog>> = calls
        .iter()
        .filter(|c| query.matches(c))
        .map(Arc::clone)
        .collect();
    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));

    let total = filtered.len();
    CallPage {
        items: page_slice(&filtered, query.page, query.page_size),
        total,
        page_count: page_count(total, query.page_size),
    }
}

/// Header counters of the calls page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallStats {
    pub total: usize,
    pub incoming: usize,
    pub outgoing: usize,
}

pub fn derive_call_stats(calls: &[Arc<CallLog>]) -> CallStats {
    let incoming = calls.iter().filter(|c| c.call_type.is_incoming()).count();
    CallStats {
        total: calls.len(),
        incoming,
        outgoing: calls.len() - incoming,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::CallStatus;
    use chrono::{TimeZone, Utc};

    fn call(id: &str, mins_after_epoch: i64, call_type: CallType, dept: Option<&str>) -> Arc<CallLog> {
        Arc::new(CallLog {
            id: id.into(),
            timestamp: Utc.timestamp_opt(mins_after_epoch * 60, 0).unwrap(),
            duration_secs: 30,
            call_type,
            status: CallStatus::Completed,
            facility_code: dept.map(|_| "OBJ-1".into()),
            facility_name: dept.map(|_| "Gold Market".into()),
            phone_number: "094-00-11-22".into(),
            department: dept.map(Department::from),
            operator_name: "Armen Avagyan".into(),
            recording_url: "#".into(),
        })
    }

    #[test]
    fn sorted_newest_first_and_paged() {
        let calls: Vec<Arc<CallLog>> = (0..25)
            .map(|i| call(&format!("CL-{i}"), i, CallType::IncomingAnswered, Some("Kentron")))
            .collect();

        let page = derive_call_page(&calls, &CallLogQuery::default());
        assert_eq!(page.total, 25);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id, "CL-24");
    }

    #[test]
    fn search_hits_phone_facility_and_operator() {
        let calls = vec![call("CL-1", 0, CallType::IncomingAnswered, Some("Kentron"))];

        for term in ["094-00", "gold", "OBJ-1", "avagyan"] {
            let q = CallLogQuery {
                search: Some(term.into()),
                ..CallLogQuery::default()
            };
            assert_eq!(derive_call_page(&calls, &q).total, 1, "term {term:?}");
        }

        let q = CallLogQuery {
            search: Some("no-match".into()),
            ..CallLogQuery::default()
        };
        assert_eq!(derive_call_page(&calls, &q).total, 0);
    }

    #[test]
    fn department_facet_excludes_unattributed_calls() {
        let calls = vec![
            call("CL-1", 0, CallType::IncomingAnswered, Some("Kentron")),
            call("CL-2", 1, CallType::IncomingAnswered, None),
        ];

        let q = CallLogQuery {
            departments: vec![Department::from("Kentron")],
            ..CallLogQuery::default()
        };
        let page = derive_call_page(&calls, &q);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "CL-1");
    }

    #[test]
    fn stats_split_by_direction() {
        let calls = vec![
            call("CL-1", 0, CallType::IncomingAnswered, None),
            call("CL-2", 1, CallType::IncomingUnanswered, None),
            call("CL-3", 2, CallType::OutgoingAnswered, None),
        ];
        let stats = derive_call_stats(&calls);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.incoming, 2);
        assert_eq!(stats.outgoing, 1);
    }
}
