//! Integration tests walking a dashboard session through a realistic visit

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pretty_assertions::assert_eq;
use tracker_core::{
    Config, DashboardSession, Dataset, Error, SortKey, Tab, TabLayout, encode, filter_players,
};

fn roster() -> Dataset {
    Dataset::from_json_str(
        r#"{
            "players": [
                {"id": "1", "username": "Zephyr", "status": "online", "last_seen": "now"},
                {"id": "2", "username": "alpha_fox", "last_seen": "2 days ago"},
                {"id": "3", "username": "ZEPHYR_two", "last_seen": "1 hour ago"}
            ],
            "tracked_sessions": 12
        }"#,
    )
    .unwrap()
}

#[test]
fn test_visit_players_tab_and_search() {
    let dataset = roster();
    let mut session = DashboardSession::new(Config::default().dashboard.tab_layout);

    assert_eq!(session.active_tab(), Tab::Dashboard);
    session.select_tab(Tab::Players).unwrap();
    session.set_search_query("zephyr");

    let view = session.player_view(&dataset);
    let names: Vec<_> = view.players.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["Zephyr", "ZEPHYR_two"]);
}

#[test]
fn test_sort_selection_keeps_dataset_order() {
    let dataset = roster();
    let mut session = DashboardSession::default();

    for key in SortKey::ALL {
        session.set_sort_key(key);
        let view = session.player_view(&dataset);
        let ids: Vec<_> = view.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(view.sort_key, key);
    }
}

#[test]
fn test_standard_layout_rejects_camera() {
    let mut session = DashboardSession::new(TabLayout::Standard);
    session.select_tab(Tab::Activity).unwrap();

    let result = session.select_tab(Tab::Camera);
    assert!(matches!(result, Err(Error::UnknownTab { .. })));
    assert_eq!(session.active_tab(), Tab::Activity);
}

#[test]
fn test_filter_without_session() {
    let dataset = roster();
    assert_eq!(filter_players(&dataset.players, "").len(), 3);
    assert_eq!(filter_players(&dataset.players, "FOX")[0].id, "2");
    assert!(filter_players(&dataset.players, "nobody").is_empty());
}

#[test]
fn test_activity_message_is_encoded() {
    let config = Config::default();
    assert_eq!(
        encode(&config.dashboard.activity_message),
        "bmm evf jo ujnf- boesf"
    );
}

#[test]
fn test_sample_dataset_file_loads() {
    let dataset = Dataset::from_json_str(include_str!("../../../demos/players.json")).unwrap();
    let summary = dataset.summary();

    assert_eq!(summary.total_players, 2);
    assert_eq!(summary.online_now, 1);
    assert_eq!(summary.tracked_sessions, 47);
}
