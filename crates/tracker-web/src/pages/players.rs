//! Players tab: search form, sort controls and player cards

use crate::components::{KeyValueRow, SectionCard, StatusBadge, page_href};
use leptos::prelude::*;
use tracker_core::{
    DashboardSession, Dataset, Player, SortKey, Tab,
    types::{GameStat, InventorySummary},
    utils::games_played_expression,
};

/// Player list panel for the session's query and sort key
#[component]
pub fn PlayersPanel(
    /// Players and the shared counters shown on each card
    dataset: Dataset,
    /// View state holding the query and sort key
    session: DashboardSession,
) -> impl IntoView {
    let query = session.search_query().to_string();
    let sort = session.sort_key();
    let games_played = games_played(&dataset.top_games);

    let view = session.player_view(&dataset);
    let cards = if view.is_empty() {
        view! {
            <div class="card empty">
                <p class="muted">"No players match your search"</p>
            </div>
        }
        .into_any()
    } else {
        view.players
            .into_iter()
            .map(|player| {
                view! {
                    <PlayerCard
                        player={player.clone()}
                        games_played={games_played.clone()}
                        tracked_sessions={dataset.tracked_sessions}
                        inventory={dataset.inventory.clone()}
                    />
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="toolbar">
            <SearchForm query={query.clone()} sort={sort} />
            <SortControls query={query} selected={sort} />
        </div>
        <div class="player-list">{cards}</div>
    }
}

/// GET form resubmitting the page with a new query
#[component]
fn SearchForm(query: String, sort: SortKey) -> impl IntoView {
    view! {
        <form class="search" method="get" action="/">
            <input type="hidden" name="tab" value="players" />
            <input type="hidden" name="sort" value={sort.as_str()} />
            <input type="search" name="q" value={query} placeholder="Search players..." />
        </form>
    }
}

fn sort_class(key: SortKey, selected: SortKey) -> &'static str {
    if key == selected { "btn btn-active" } else { "btn" }
}

/// One link per sort key; the selected key is highlighted
#[component]
fn SortControls(query: String, selected: SortKey) -> impl IntoView {
    view! {
        <div class="sort-controls">
            {SortKey::ALL
                .iter()
                .map(|&key| {
                    view! {
                        <a class={sort_class(key, selected)} href={page_href(Tab::Players, &query, key)}>
                            {key.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn PlayerCard(
    player: Player,
    games_played: String,
    tracked_sessions: u32,
    inventory: InventorySummary,
) -> impl IntoView {
    let Player {
        id,
        username,
        status,
        last_seen,
        location,
        account_age,
        favorite_games,
        average_playtime,
        friends_count,
        ..
    } = player;

    view! {
        <div class="player" id={format!("player-{id}")}>
            <section class="card player-card">
                <div class="row">
                    <div class="player-identity">
                        <div class="avatar"></div>
                        <div>
                            <h3>
                                <span>{username}</span>
                                <StatusBadge status={status} />
                            </h3>
                            <p class="muted small">{format!("Last seen: {last_seen}")}</p>
                            <p class="muted small">{format!("Account age: {account_age}")}</p>
                        </div>
                    </div>
                    <div class="align-right">
                        <p class="small">{average_playtime}</p>
                        <p class="muted small">{location}</p>
                    </div>
                </div>
                <div class="grid grid-3 player-counters">
                    <div>
                        <p class="counter mono">{games_played}</p>
                        <p class="muted small">"Games Played (calc)"</p>
                    </div>
                    <div>
                        <p class="counter">{friends_count.to_string()}</p>
                        <p class="muted small">"Friends"</p>
                    </div>
                    <div>
                        <p class="counter">{tracked_sessions.to_string()}</p>
                        <p class="muted small">"Sessions"</p>
                    </div>
                </div>
            </section>
            <div class="grid grid-2">
                <SectionCard title="Favorite Games">
                    <FavoriteGames games={favorite_games} />
                </SectionCard>
                <SectionCard title="ROBLOX Inventory">
                    <InventoryRows inventory={inventory} />
                </SectionCard>
            </div>
        </div>
    }
}

fn games_played(top_games: &[GameStat]) -> String {
    let expression = games_played_expression(top_games);
    if expression.is_empty() {
        "0".to_string()
    } else {
        expression
    }
}

#[component]
fn FavoriteGames(games: Vec<String>) -> impl IntoView {
    if games.is_empty() {
        return view! { <p class="muted">"No favorites yet"</p> }.into_any();
    }

    view! {
        <div class="list">
            {games
                .into_iter()
                .enumerate()
                .map(|(position, game)| {
                    let rating = format!("\u{2b50} {}/5", Player::favorite_rating(position));
                    view! {
                        <div class="row tile">
                            <span class="bold">{game}</span>
                            <span class="badge badge-outline">{rating}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

#[component]
fn InventoryRows(inventory: InventorySummary) -> impl IntoView {
    view! {
        <KeyValueRow label="Clothing Items" value={inventory.clothing_items.to_string()} />
        <KeyValueRow label="Accessories" value={inventory.accessories.to_string()} />
        <KeyValueRow label="Game Passes" value={inventory.game_passes.to_string()} />
        <KeyValueRow label="Limited Items" value={inventory.limited_items.to_string()} />
    }
}
