use campus_cup_backend::tournament::leaderboard::{compute_leaderboard, LeaderboardKind};

mod common;
use common::{player, stats};

#[test]
fn scorers_rank_by_goals_then_assists_then_name() {
    let poacher = player("Pia Poacher", None);
    let playmaker = player("Mika Playmaker", None);
    let finisher = player("Ana Finisher", None);

    let players = vec![poacher.clone(), playmaker.clone(), finisher.clone()];
    let all_stats = vec![
        stats(&poacher, 7, 0),
        stats(&playmaker, 5, 9),
        stats(&finisher, 7, 2),
    ];

    let board = compute_leaderboard(&players, &all_stats, LeaderboardKind::Scorers, 10);
    let ids: Vec<_> = board.iter().map(|e| e.player_id).collect();
    // Finisher beats Poacher on assists despite equal goals
    assert_eq!(ids, vec![finisher.id, poacher.id, playmaker.id]);
}

#[test]
fn assisters_rank_by_assists_then_goals() {
    let a = player("Alba", None);
    let b = player("Bosco", None);

    let players = vec![a.clone(), b.clone()];
    let all_stats = vec![stats(&a, 4, 6), stats(&b, 1, 6)];

    let board = compute_leaderboard(&players, &all_stats, LeaderboardKind::Assisters, 10);
    assert_eq!(board[0].player_id, a.id);
    assert_eq!(board[1].player_id, b.id);
}

#[test]
fn players_without_stats_rows_count_as_zero() {
    let tracked = player("Tracked", None);
    let untracked = player("Untracked", None);

    let players = vec![tracked.clone(), untracked.clone()];
    let all_stats = vec![stats(&tracked, 1, 0)];

    let board = compute_leaderboard(&players, &all_stats, LeaderboardKind::Scorers, 10);
    assert_eq!(board.len(), 2);
    assert_eq!(board[1].player_id, untracked.id);
    assert_eq!(board[1].goals, 0);
    assert_eq!(board[1].assists, 0);
}

#[test]
fn identical_stats_rank_alphabetically_by_display_name() {
    let zelda = player("Zelda Quick", None);
    // Display name overrides the full name for ranking
    let aliased = player("Quentin Zimmer", Some("Aaron Z."));

    let players = vec![zelda.clone(), aliased.clone()];
    let all_stats = vec![stats(&zelda, 3, 3), stats(&aliased, 3, 3)];

    let board = compute_leaderboard(&players, &all_stats, LeaderboardKind::Scorers, 10);
    assert_eq!(board[0].player_id, aliased.id);
    assert_eq!(board[0].name, "Aaron Z.");
    assert_eq!(board[1].player_id, zelda.id);
}

#[test]
fn leaderboard_truncates_to_limit() {
    let players: Vec<_> = (0..25).map(|i| player(&format!("Player {i:02}"), None)).collect();
    let all_stats: Vec<_> = players
        .iter()
        .enumerate()
        .map(|(i, p)| stats(p, i as i32, 0))
        .collect();

    let board = compute_leaderboard(&players, &all_stats, LeaderboardKind::Scorers, 10);
    assert_eq!(board.len(), 10);
    assert_eq!(board[0].goals, 24);
    assert_eq!(board[9].goals, 15);
}
