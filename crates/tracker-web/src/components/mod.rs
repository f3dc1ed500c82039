//! Reusable UI components shared by the dashboard panels

pub mod badges;
pub mod cards;
pub mod tab_bar;

pub use badges::{PulseBadge, StatusBadge};
pub use cards::{KeyValueRow, SectionCard, StatCard, StatTile};
pub use tab_bar::TabBar;

use tracker_core::{SortKey, Tab};

/// Link to the page with the given view state
///
/// Empty queries and default sort keys are left out so links stay short.
#[must_use]
pub fn page_href(tab: Tab, query: &str, sort: SortKey) -> String {
    let mut href = format!("/?tab={}", tab.as_str());
    if !query.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(query));
    }
    if sort != SortKey::default() {
        href.push_str("&sort=");
        href.push_str(sort.as_str());
    }
    href
}
