//! The static data a dashboard renders
//!
//! A dataset is built once at start-up, either from the built-in demo
//! literals or from a JSON file, and is read-only afterwards.

use crate::types::{
    ActivityEvent, ActivityKind, CameraNotice, GameStat, InventorySummary, Player,
    PlayerStatistics, PlayerStatus, SummaryCounts,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tracing::{debug, info};
use validator::Validate;

/// Everything shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    /// Tracked players, in display order
    pub players: Vec<Player>,

    /// Tracked session count
    #[serde(default)]
    pub tracked_sessions: u32,

    /// Headline statistics
    #[serde(default)]
    pub statistics: PlayerStatistics,

    /// Recent activity feed, newest first
    #[serde(default)]
    pub recent_activity: Vec<ActivityEvent>,

    /// Most played games
    #[serde(default)]
    pub top_games: Vec<GameStat>,

    /// Inventory counts
    #[serde(default)]
    pub inventory: InventorySummary,

    /// Camera placeholder content
    #[serde(default)]
    pub camera: CameraNotice,
}

impl Dataset {
    /// Built-in demo data
    #[must_use]
    pub fn demo() -> Self {
        let favorite_games = ["frozen soul (dg)", "Block tales", "Grace", "BIAST"];

        Self {
            players: vec![Player {
                id: "1".to_string(),
                username: "pixel_pilot".to_string(),
                status: PlayerStatus::Offline,
                last_seen: "3 hours ago".to_string(),
                game_time: "0m".to_string(),
                location: "frozen soul (dg)".to_string(),
                account_age: "6 years 4 months".to_string(),
                total_games: 156,
                favorite_games: favorite_games.iter().map(ToString::to_string).collect(),
                average_playtime: "3h 24m/day".to_string(),
                friends_count: 0,
            }],
            tracked_sessions: 47,
            statistics: PlayerStatistics {
                level: 127,
                currency_spent: "2.4K".to_string(),
                badges: 89,
                achievements: 156,
            },
            recent_activity: vec![
                event("3h ago", "pixel_pilot went offline", ActivityKind::Leave),
                event("3h ago", "pixel_pilot left frozen soul (dg)", ActivityKind::Leave),
                event("5h ago", "pixel_pilot joined frozen soul (dg)", ActivityKind::Join),
                event("8h ago", "pixel_pilot left Block tales", ActivityKind::Leave),
                event("9h ago", "pixel_pilot joined Block tales", ActivityKind::Join),
            ],
            top_games: vec![
                game("frozen soul (dg)", 124, 85),
                game("Block tales", 89, 61),
                game("Grace", 67, 46),
                game("BIAST", 43, 29),
            ],
            inventory: InventorySummary {
                clothing_items: 234,
                accessories: 89,
                game_passes: 12,
                limited_items: 7,
            },
            camera: CameraNotice {
                target: "pixel_pilot".to_string(),
                last_game: "frozen soul (dg)".to_string(),
                status: PlayerStatus::Offline,
                last_seen: "3 hours ago".to_string(),
            },
        }
    }

    /// Parse and validate a dataset from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the dataset fails validation.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Read, parse and validate a dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid dataset.
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        debug!(path = %path.display(), "Reading dataset");
        let contents = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            players = dataset.players.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Load the file at `path` when given, the demo data otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is given and cannot be loaded.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        path.map_or_else(|| Ok(Self::demo()), Self::from_json_file)
    }

    /// Check per-player field constraints and identifier uniqueness
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first invalid player, or a dataset
    /// error naming a duplicated identifier.
    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            player.validate()?;
            if !seen.insert(player.id.as_str()) {
                return Err(crate::Error::Dataset(format!(
                    "duplicate player id '{}'",
                    player.id
                )));
            }
        }
        Ok(())
    }

    /// Counters for the summary cards
    #[must_use]
    pub fn summary(&self) -> SummaryCounts {
        SummaryCounts {
            total_players: self.players.len(),
            online_now: self
                .players
                .iter()
                .filter(|player| player.status.is_online())
                .count(),
            tracked_sessions: self.tracked_sessions,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::demo()
    }
}

fn event(time: &str, action: &str, kind: ActivityKind) -> ActivityEvent {
    ActivityEvent {
        time: time.to_string(),
        action: action.to_string(),
        kind,
    }
}

fn game(name: &str, hours: u32, percentage: u8) -> GameStat {
    GameStat {
        game: name.to_string(),
        hours,
        percentage,
    }
}
