//! Top-scorer and top-assister leaderboards over player stat snapshots.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::player::{Player, PlayerStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardKind {
    Scorers,
    Assisters,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub player_id: Uuid,
    pub name: String,
    pub goals: i32,
    pub assists: i32,
    pub matches_played: i32,
    pub motm: i32,
}

/// Rank all players by the requested stat and truncate to `limit`.
///
/// Players without a stats row rank as all-zero rather than being dropped.
/// Ties resolve on the secondary stat and then the presentation name, so the
/// ranking is a strict total order.
pub fn compute_leaderboard(
    players: &[Player],
    stats: &[PlayerStats],
    kind: LeaderboardKind,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let by_player: HashMap<Uuid, &PlayerStats> =
        stats.iter().map(|s| (s.player_id, s)).collect();

    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .map(|p| {
            let s = by_player.get(&p.id);
            LeaderboardEntry {
                player_id: p.id,
                name: p.presentation_name().to_string(),
                goals: s.map(|s| s.goals).unwrap_or(0),
                assists: s.map(|s| s.assists).unwrap_or(0),
                matches_played: s.map(|s| s.matches_played).unwrap_or(0),
                motm: s.map(|s| s.motm).unwrap_or(0),
            }
        })
        .collect();

    match kind {
        LeaderboardKind::Scorers => entries.sort_by(|a, b| {
            b.goals
                .cmp(&a.goals)
                .then(b.assists.cmp(&a.assists))
                .then(a.name.cmp(&b.name))
        }),
        LeaderboardKind::Assisters => entries.sort_by(|a, b| {
            b.assists
                .cmp(&a.assists)
                .then(b.goals.cmp(&a.goals))
                .then(a.name.cmp(&b.name))
        }),
    }

    entries.truncate(limit);
    entries
}
