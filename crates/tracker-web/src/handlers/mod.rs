//! HTTP request handlers

pub mod api;
pub mod extract;
pub mod pages;

use serde::Deserialize;
use tracker_core::{DashboardSession, SortKey, Tab, utils::truncate_chars};
use tracing::warn;
use validator::Validate;

/// Longest search query kept, in characters
pub const MAX_QUERY_CHARS: u64 = 100;

/// View state carried in the query string
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ViewQuery {
    /// Tab to show
    pub tab: Option<String>,

    /// Player search text
    #[validate(length(max = MAX_QUERY_CHARS))]
    pub q: Option<String>,

    /// Selected sort key
    pub sort: Option<String>,
}

impl ViewQuery {
    /// Apply the query to `session`, ignoring values it cannot use
    ///
    /// Unknown tabs or sort keys leave the session default in place and are
    /// logged; overlong queries are cut to [`MAX_QUERY_CHARS`].
    pub fn apply_lenient(&self, session: &mut DashboardSession) {
        if let Some(raw) = self.tab.as_deref().filter(|raw| !raw.is_empty()) {
            match raw.parse::<Tab>().and_then(|tab| session.select_tab(tab)) {
                Ok(()) => {}
                Err(e) => warn!(tab = raw, "Ignoring tab selection: {}", e),
            }
        }

        if let Some(query) = self.q.as_deref() {
            let max = usize::try_from(MAX_QUERY_CHARS).unwrap_or(usize::MAX);
            session.set_search_query(truncate_chars(query.trim(), max));
        }

        if let Some(raw) = self.sort.as_deref().filter(|raw| !raw.is_empty()) {
            match raw.parse::<SortKey>() {
                Ok(key) => session.set_sort_key(key),
                Err(e) => warn!(sort = raw, "Ignoring sort selection: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracker_core::TabLayout;

    fn query(tab: Option<&str>, q: Option<&str>, sort: Option<&str>) -> ViewQuery {
        ViewQuery {
            tab: tab.map(str::to_string),
            q: q.map(str::to_string),
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_query_keeps_defaults() {
        let mut session = DashboardSession::default();
        ViewQuery::default().apply_lenient(&mut session);

        assert_eq!(session, DashboardSession::default());
    }

    #[test]
    fn test_applies_all_fields() {
        let mut session = DashboardSession::default();
        query(Some("players"), Some("  pix  "), Some("status")).apply_lenient(&mut session);

        assert_eq!(session.active_tab(), Tab::Players);
        assert_eq!(session.search_query(), "pix");
        assert_eq!(session.sort_key(), SortKey::Status);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let mut session = DashboardSession::default();
        query(Some("settings"), None, Some("size")).apply_lenient(&mut session);

        assert_eq!(session.active_tab(), Tab::Dashboard);
        assert_eq!(session.sort_key(), SortKey::Username);
    }

    #[test]
    fn test_camera_ignored_without_camera_layout() {
        let mut session = DashboardSession::new(TabLayout::Standard);
        query(Some("camera"), None, None).apply_lenient(&mut session);

        assert_eq!(session.active_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_long_query_is_truncated() {
        let mut session = DashboardSession::default();
        let long = "x".repeat(150);
        query(None, Some(&long), None).apply_lenient(&mut session);

        assert_eq!(session.search_query().len(), 100);
    }

    #[test]
    fn test_validation_rejects_long_query() {
        let long = "x".repeat(101);
        assert!(query(None, Some(&long), None).validate().is_err());
        assert!(query(None, Some("ok"), None).validate().is_ok());
    }
}
