//! Core data types for the player activity dashboard

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Player identifier type
pub type PlayerId = String;

/// Presence state of a player
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Currently in a game
    Online,
    /// Not connected
    #[default]
    Offline,
}

impl PlayerStatus {
    /// Whether the status counts towards "online now"
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// A tracked player record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier within a dataset
    #[validate(length(min = 1, max = 64))]
    pub id: PlayerId,

    /// Display name, matched by the search filter
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    /// Presence state
    #[serde(default)]
    pub status: PlayerStatus,

    /// Free-text "last seen" descriptor, e.g. `3 hours ago`
    pub last_seen: String,

    /// Free-text duration of the current session
    #[serde(default)]
    pub game_time: String,

    /// Free-text label of the current or last location
    #[serde(default)]
    pub location: String,

    /// Free-text account age
    #[serde(default)]
    pub account_age: String,

    /// Aggregate number of games played
    #[serde(default)]
    pub total_games: u32,

    /// Favorite games, most favored first
    #[serde(default)]
    pub favorite_games: Vec<String>,

    /// Free-text average playtime
    #[serde(default)]
    pub average_playtime: String,

    /// Number of friends
    #[serde(default)]
    pub friends_count: u32,
}

impl Player {
    /// Rating out of five for the favorite game at `position`
    ///
    /// The first favorite rates 4, each following one a point less, bottoming out at 0.
    #[must_use]
    pub fn favorite_rating(position: usize) -> u32 {
        4u32.saturating_sub(u32::try_from(position).unwrap_or(u32::MAX))
    }
}

/// Headline statistics shown on the dashboard tab
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStatistics {
    /// Account level
    pub level: u32,
    /// Preformatted currency spent label, e.g. `2.4K`
    pub currency_spent: String,
    /// Badge count
    pub badges: u32,
    /// Achievement count
    pub achievements: u32,
}

/// Direction of an activity event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Player joined a game
    Join,
    /// Player left a game or went offline
    Leave,
}

/// One entry of the recent activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Relative time label, e.g. `3h ago`
    pub time: String,
    /// Human readable description
    pub action: String,
    /// Join or leave
    pub kind: ActivityKind,
}

/// Time spent in a single game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStat {
    /// Game name
    pub game: String,
    /// Hours played
    pub hours: u32,
    /// Share of the bar to fill
    pub percentage: u8,
}

impl GameStat {
    /// Bar width in percent, never above 100
    #[must_use]
    pub fn bar_width(&self) -> u8 {
        self.percentage.min(100)
    }
}

/// Item counts from the player's inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySummary {
    /// Clothing items
    pub clothing_items: u32,
    /// Accessories
    pub accessories: u32,
    /// Game passes
    pub game_passes: u32,
    /// Limited items
    pub limited_items: u32,
}

/// Static content of the camera placeholder
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraNotice {
    /// Name shown as the camera target
    pub target: String,
    /// Last known game
    pub last_game: String,
    /// Presence shown next to the feed
    pub status: PlayerStatus,
    /// Free-text last seen descriptor
    pub last_seen: String,
}

/// Aggregate counters for the summary cards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCounts {
    /// Number of players in the dataset
    pub total_players: usize,
    /// Players whose status is online
    pub online_now: usize,
    /// Tracked session count
    pub tracked_sessions: u32,
}
