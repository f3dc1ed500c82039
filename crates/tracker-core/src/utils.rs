//! Small formatting helpers shared by the renderers

use crate::types::GameStat;
use chrono::{DateTime, TimeZone};

/// Hours of each top game joined with `+`, e.g. `124+89+67+43`
///
/// The page shows the expression itself rather than its sum.
#[must_use]
pub fn games_played_expression(games: &[GameStat]) -> String {
    games
        .iter()
        .map(|game| game.hours.to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Keep at most `max` characters of `text`
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => text.split_at(index).0,
        None => text,
    }
}

/// Wall-clock time as shown in the camera overlay
#[must_use]
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn stat(game: &str, hours: u32) -> GameStat {
        GameStat {
            game: game.to_string(),
            hours,
            percentage: 0,
        }
    }

    #[test]
    fn test_games_played_expression() {
        let games = vec![
            stat("frozen soul (dg)", 124),
            stat("Block tales", 89),
            stat("Grace", 67),
            stat("BIAST", 43),
        ];
        assert_eq!(games_played_expression(&games), "124+89+67+43");
        assert_eq!(games_played_expression(&games[..1]), "124");
        assert_eq!(games_played_expression(&[]), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 0), "");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_format_clock() {
        let time = Utc.with_ymd_and_hms(2024, 3, 15, 14, 25, 30).unwrap();
        assert_eq!(format_clock(&time), "14:25:30");
    }
}
