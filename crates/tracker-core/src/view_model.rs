//! Player list view model: search filter and sort selection

use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Column the player list can be sorted by
///
/// The selection is recorded and reported back to the page so the matching
/// control is highlighted. It does not reorder results; players stay in
/// dataset order whatever key is selected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Display name
    #[default]
    Username,
    /// Online/offline status
    Status,
    /// Last seen descriptor
    LastSeen,
}

impl SortKey {
    /// All keys in the order their controls are shown
    pub const ALL: [Self; 3] = [Self::Username, Self::Status, Self::LastSeen];

    /// Query-string value for this key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Status => "status",
            Self::LastSeen => "last_seen",
        }
    }

    /// Label of the sort control
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Status => "Status",
            Self::LastSeen => "Last Seen",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "username" | "name" => Ok(Self::Username),
            "status" => Ok(Self::Status),
            "last_seen" | "lastseen" | "recency" => Ok(Self::LastSeen),
            other => Err(crate::Error::Validation {
                field: "sort".to_string(),
                message: format!("unknown sort key '{other}'"),
            }),
        }
    }
}

/// Result of applying a query and sort selection to a player collection
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerListView<'a> {
    /// Query that produced this view
    pub query: String,
    /// Selected sort key
    pub sort_key: SortKey,
    /// Matching players in dataset order
    pub players: Vec<&'a Player>,
}

impl PlayerListView<'_> {
    /// Number of matching players
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Keep players whose username contains `query`, ignoring case
///
/// An empty query keeps everything. Order is preserved.
#[must_use]
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    let needle = query.to_lowercase();
    players
        .iter()
        .filter(|player| player.username.to_lowercase().contains(&needle))
        .collect()
}

/// Build the list view for `query` and `sort_key`
#[must_use]
pub fn build_player_view<'a>(
    players: &'a [Player],
    query: &str,
    sort_key: SortKey,
) -> PlayerListView<'a> {
    let players = filter_players(players, query);
    tracing::debug!(
        query,
        sort = %sort_key,
        matched = players.len(),
        "Built player list view"
    );

    PlayerListView {
        query: query.to_string(),
        sort_key,
        players,
    }
}
