// ── Security log view ──

use std::sync::Arc;

use chrono::NaiveDate;

use super::{page_count, page_slice};
use crate::model::{Department, LogAction, SecurityLog};

/// Default page size of the security-log table.
pub const LOG_PAGE_SIZE: usize = 10;

/// Filter and pagination inputs for the security-log table.
#[derive(Debug, Clone)]
pub struct SecurityLogQuery {
    /// Case-insensitive substring over facility name, code, and address.
    pub search: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub departments: Vec<Department>,
    pub actions: Vec<LogAction>,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for SecurityLogQuery {
    fn default() -> Self {
        Self {
            search: None,
            date_start: None,
            date_end: None,
            departments: Vec::new(),
            actions: Vec::new(),
            page: 1,
            page_size: LOG_PAGE_SIZE,
        }
    }
}

impl SecurityLogQuery {
    pub fn matches(&self, log: &SecurityLog) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                let hit = log.facility_name.to_lowercase().contains(&term)
                    || log.facility_code.to_lowercase().contains(&term)
                    || log.address.to_lowercase().contains(&term);
                if !hit {
                    return false;
                }
            }
        }

        if !self.departments.is_empty() && !self.departments.contains(&log.department) {
            return false;
        }
        if !self.actions.is_empty() && !self.actions.contains(&log.action) {
            return false;
        }

        let day = log.timestamp.date_naive();
        if self.date_start.is_some_and(|start| day < start) {
            return false;
        }
        if self.date_end.is_some_and(|end| day > end) {
            return false;
        }
        true
    }
}

/// One derived page of the security-log table.
#[derive(Debug, Clone)]
pub struct SecurityLogPage {
    pub items: Vec<Arc<SecurityLog>>,
    pub total: usize,
    pub page_count: usize,
}

/// Derive the visible page, newest entry first.
pub fn derive_log_page(logs: &[Arc<SecurityLog>], query: &SecurityLogQuery) -> SecurityLogPage {
    let mut filtered: Vec<Arc<SecurityLog>> = logs
        .iter()
        .filter(|l| query.matches(l))
        .map(Arc::clone)
        .collect();
    filtered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));

    let total = filtered.len();
    SecurityLogPage {
        items: page_slice(&filtered, query.page, query.page_size),
        total,
        page_count: page_count(total, query.page_size),
    }
}
