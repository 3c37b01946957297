//! Prediction scoring: 3 points for the exact score, 1 for the right
//! outcome, 0 otherwise. Only finished matches with both scores recorded are
//! settled.

use std::cmp::Ordering;
use std::collections::HashMap;

use uuid::Uuid;

use crate::models::prediction::PredictionLeaderboardEntry;

pub const POINTS_EXACT: u32 = 3;
pub const POINTS_OUTCOME: u32 = 1;

pub fn prediction_points(
    home_pred: i32,
    away_pred: i32,
    home_score: i32,
    away_score: i32,
) -> u32 {
    if home_pred == home_score && away_pred == away_score {
        return POINTS_EXACT;
    }
    let predicted = (home_pred - away_pred).signum();
    let actual = (home_score - away_score).signum();
    if predicted == actual {
        POINTS_OUTCOME
    } else {
        0
    }
}

/// A prediction joined against its finished match.
#[derive(Debug, Clone)]
pub struct SettledPrediction {
    pub user_id: Uuid,
    pub username: String,
    pub home_pred: i32,
    pub away_pred: i32,
    pub home_score: i32,
    pub away_score: i32,
}

impl SettledPrediction {
    pub fn points(&self) -> u32 {
        prediction_points(self.home_pred, self.away_pred, self.home_score, self.away_score)
    }
}

/// Total points per fan over all settled predictions, ranked points
/// descending with username breaking ties.
pub fn tally_leaderboard(settled: &[SettledPrediction]) -> Vec<PredictionLeaderboardEntry> {
    let mut totals: HashMap<Uuid, PredictionLeaderboardEntry> = HashMap::new();

    for s in settled {
        let entry = totals
            .entry(s.user_id)
            .or_insert_with(|| PredictionLeaderboardEntry {
                user_id: s.user_id,
                username: s.username.clone(),
                points: 0,
                predictions_scored: 0,
            });
        entry.points += s.points();
        entry.predictions_scored += 1;
    }

    let mut entries: Vec<PredictionLeaderboardEntry> = totals.into_values().collect();
    entries.sort_by(|a, b| match b.points.cmp(&a.points) {
        Ordering::Equal => a.username.cmp(&b.username),
        other => other,
    });
    entries
}
