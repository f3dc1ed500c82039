//! Dashboard tab: summary cards, statistics, recent activity and top games

use crate::components::{PulseBadge, SectionCard, StatCard, StatTile};
use leptos::prelude::*;
use tracker_core::{
    Dataset,
    types::{ActivityEvent, ActivityKind, GameStat},
};

/// Dashboard overview panel
#[component]
pub fn DashboardPanel(
    /// Data to summarize
    dataset: Dataset,
) -> impl IntoView {
    let summary = dataset.summary();
    let Dataset {
        statistics,
        recent_activity,
        top_games,
        ..
    } = dataset;

    view! {
        <div class="banner">
            <div>
                <p class="bold">"Monitoring Active"</p>
                <p class="muted small">"Player activity overview"</p>
            </div>
            <PulseBadge text="LIVE" />
        </div>
        <div class="grid grid-3">
            <StatCard
                label="Total Players"
                value={summary.total_players.to_string()}
                tint="tint-primary"
            />
            <StatCard label="Online Now" value={summary.online_now.to_string()} tint="tint-red" />
            <StatCard
                label="Tracked Sessions"
                value={summary.tracked_sessions.to_string()}
                tint="tint-purple"
            />
        </div>
        <SectionCard title="Player Statistics">
            <div class="grid grid-4">
                <StatTile label="Level" value={statistics.level.to_string()} />
                <StatTile label="Robux Spent" value={statistics.currency_spent.clone()} />
                <StatTile label="Badges" value={statistics.badges.to_string()} />
                <StatTile label="Achievements" value={statistics.achievements.to_string()} />
            </div>
        </SectionCard>
        <div class="grid grid-2">
            <SectionCard title="Recent Activity">
                <ActivityFeed events={recent_activity} />
            </SectionCard>
            <SectionCard title="Top Games Played">
                <TopGames games={top_games} />
            </SectionCard>
        </div>
    }
}

/// Join and leave events, newest first
#[component]
fn ActivityFeed(events: Vec<ActivityEvent>) -> impl IntoView {
    if events.is_empty() {
        return view! { <p class="muted">"No recent activity"</p> }.into_any();
    }

    view! {
        <div class="list">
            {events
                .into_iter()
                .map(|event| {
                    let dot = match event.kind {
                        ActivityKind::Join => "dot dot-join",
                        ActivityKind::Leave => "dot dot-leave",
                    };
                    view! {
                        <div class="row activity-row">
                            <span>
                                <span class={dot}></span>
                                {event.action}
                            </span>
                            <span class="muted small">{event.time}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Hours per game with a proportional bar
#[component]
fn TopGames(games: Vec<GameStat>) -> impl IntoView {
    view! {
        <div class="list">
            {games
                .into_iter()
                .map(|game| {
                    let width = format!("width: {}%", game.bar_width());
                    view! {
                        <div class="game-row">
                            <div class="row">
                                <span class="bold">{game.game}</span>
                                <span class="muted">{format!("{}h", game.hours)}</span>
                            </div>
                            <div class="bar">
                                <div class="bar-fill" style={width}></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
