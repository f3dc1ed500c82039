//! Benchmarks for tracker-core hot paths

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tracker_core::{DashboardSession, Dataset, Player, SortKey, Tab, encode, filter_players};

/// Benchmark the character-shift encoder on short and long inputs
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let inputs = [
        ("short", "all due in time, andre".to_string()),
        ("spaced", "a b c d e f g h i j k l m".repeat(8)),
        ("unicode", "héllo wörld ünïcode ✓ ".repeat(8)),
    ];

    for (name, input) in &inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), input, |b, input| {
            b.iter(|| encode(black_box(input)));
        });
    }

    group.finish();
}

fn roster(size: usize) -> Vec<Player> {
    let template = Dataset::demo().players.into_iter().next();
    (0..size)
        .filter_map(|i| {
            template.clone().map(|mut player| {
                player.id = i.to_string();
                player.username = format!("player_{i:05}");
                player
            })
        })
        .collect()
}

/// Benchmark case-insensitive filtering over growing rosters
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_players");

    for size in [10_usize, 100, 1_000] {
        let players = roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("match_some", size), &players, |b, players| {
            b.iter(|| filter_players(black_box(players), black_box("PLAYER_000")));
        });
        group.bench_with_input(BenchmarkId::new("empty_query", size), &players, |b, players| {
            b.iter(|| filter_players(black_box(players), black_box("")));
        });
    }

    group.finish();
}

/// Benchmark a full session round: select, search, sort, derive view
fn bench_session(c: &mut Criterion) {
    let dataset = Dataset {
        players: roster(100),
        ..Dataset::demo()
    };

    c.bench_function("session_player_view", |b| {
        b.iter(|| {
            let mut session = DashboardSession::default();
            let _ = session.select_tab(Tab::Players);
            session.set_search_query("player_00");
            session.set_sort_key(SortKey::LastSeen);
            session.player_view(black_box(&dataset)).len()
        });
    });
}

criterion_group!(benches, bench_encode, bench_filter, bench_session);
criterion_main!(benches);
