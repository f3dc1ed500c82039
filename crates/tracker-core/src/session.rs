//! Per-session view state: active tab, search query and sort key

use crate::{
    dataset::Dataset,
    view_model::{PlayerListView, SortKey, build_player_view},
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A dashboard tab
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Summary cards and statistics
    #[default]
    Dashboard,
    /// Searchable player list
    Players,
    /// Camera placeholder
    Camera,
    /// Encoded activity log
    Activity,
}

impl Tab {
    /// Query-string value for this tab
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Players => "players",
            Self::Camera => "camera",
            Self::Activity => "activity",
        }
    }

    /// Label shown on the tab button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Players => "Players",
            Self::Camera => "Camera",
            Self::Activity => "Activity",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "players" => Ok(Self::Players),
            "camera" => Ok(Self::Camera),
            "activity" => Ok(Self::Activity),
            other => Err(crate::Error::UnknownTab {
                tab: other.to_string(),
            }),
        }
    }
}

/// The set of tabs a deployment offers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TabLayout {
    /// Dashboard, players and activity
    Standard,
    /// Dashboard, players, camera and activity
    #[default]
    WithCamera,
}

impl TabLayout {
    /// Tabs in display order
    #[must_use]
    pub const fn tabs(self) -> &'static [Tab] {
        match self {
            Self::Standard => &[Tab::Dashboard, Tab::Players, Tab::Activity],
            Self::WithCamera => &[Tab::Dashboard, Tab::Players, Tab::Camera, Tab::Activity],
        }
    }

    /// Whether `tab` is offered by this layout
    #[must_use]
    pub fn contains(self, tab: Tab) -> bool {
        self.tabs().contains(&tab)
    }
}

/// View state owned by one dashboard session
///
/// Every request builds its own session, so there is no state shared between
/// viewers. Setters apply immediately; nothing is derived until
/// [`DashboardSession::player_view`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSession {
    layout: TabLayout,
    active_tab: Tab,
    search_query: String,
    sort_key: SortKey,
}

impl DashboardSession {
    /// Start a session on the dashboard tab with an empty query
    #[must_use]
    pub fn new(layout: TabLayout) -> Self {
        Self {
            layout,
            active_tab: Tab::Dashboard,
            search_query: String::new(),
            sort_key: SortKey::default(),
        }
    }

    /// Tab layout this session was created with
    #[must_use]
    pub const fn layout(&self) -> TabLayout {
        self.layout
    }

    /// Currently visible tab
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Current search query
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Currently selected sort key
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Switch to `tab`
    ///
    /// Selecting the active tab is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownTab`] if the layout does not offer `tab`;
    /// the active tab is left unchanged.
    pub fn select_tab(&mut self, tab: Tab) -> crate::Result<()> {
        if !self.layout.contains(tab) {
            return Err(crate::Error::UnknownTab {
                tab: tab.to_string(),
            });
        }

        if self.active_tab != tab {
            debug!(from = %self.active_tab, to = %tab, "Switching tab");
            self.active_tab = tab;
        }
        Ok(())
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Record a sort selection
    pub const fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Filtered player list for the current query and sort key
    #[must_use]
    pub fn player_view<'a>(&self, dataset: &'a Dataset) -> PlayerListView<'a> {
        build_player_view(&dataset.players, &self.search_query, self.sort_key)
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(TabLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_initial_state() {
        let session = DashboardSession::default();

        assert_eq!(session.active_tab(), Tab::Dashboard);
        assert_eq!(session.search_query(), "");
        assert_eq!(session.sort_key(), SortKey::Username);
        assert_eq!(session.layout(), TabLayout::WithCamera);
    }

    #[rstest]
    #[case(Tab::Dashboard)]
    #[case(Tab::Players)]
    #[case(Tab::Camera)]
    #[case(Tab::Activity)]
    fn test_select_tab_is_idempotent(#[case] tab: Tab) {
        let mut session = DashboardSession::new(TabLayout::WithCamera);

        session.select_tab(tab).unwrap();
        let once = session.clone();
        session.select_tab(tab).unwrap();

        assert_eq!(session, once);
        assert_eq!(session.active_tab(), tab);
    }

    #[test]
    fn test_select_tab_moves_directly() {
        let mut session = DashboardSession::new(TabLayout::Standard);

        session.select_tab(Tab::Activity).unwrap();
        assert_eq!(session.active_tab(), Tab::Activity);

        session.select_tab(Tab::Dashboard).unwrap();
        assert_eq!(session.active_tab(), Tab::Dashboard);
    }

    #[test]
    fn test_camera_rejected_in_standard_layout() {
        let mut session = DashboardSession::new(TabLayout::Standard);
        session.select_tab(Tab::Players).unwrap();

        let result = session.select_tab(Tab::Camera);

        assert!(matches!(result, Err(crate::Error::UnknownTab { .. })));
        assert_eq!(session.active_tab(), Tab::Players);
    }

    #[test]
    fn test_layout_tab_order() {
        assert_eq!(
            TabLayout::Standard.tabs(),
            &[Tab::Dashboard, Tab::Players, Tab::Activity]
        );
        assert_eq!(
            TabLayout::WithCamera.tabs(),
            &[Tab::Dashboard, Tab::Players, Tab::Camera, Tab::Activity]
        );
    }

    #[test]
    fn test_tab_parsing() {
        assert_eq!("Players".parse::<Tab>().unwrap(), Tab::Players);
        assert_eq!(" camera ".parse::<Tab>().unwrap(), Tab::Camera);
        assert!(matches!(
            "settings".parse::<Tab>(),
            Err(crate::Error::UnknownTab { tab }) if tab == "settings"
        ));
    }

    #[test]
    fn test_setters_and_player_view() {
        let dataset = Dataset::demo();
        let mut session = DashboardSession::default();

        session.set_search_query("PIXEL");
        session.set_sort_key(SortKey::LastSeen);

        let view = session.player_view(&dataset);
        assert_eq!(view.query, "PIXEL");
        assert_eq!(view.sort_key, SortKey::LastSeen);
        assert_eq!(view.len(), 1);

        session.set_search_query("no such player");
        assert!(session.player_view(&dataset).is_empty());
    }
}
