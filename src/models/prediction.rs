// src/models/prediction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One immutable score guess per fan per match.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Prediction {
    pub id: Uuid,
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub home_pred: i32,
    pub away_pred: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitPredictionRequest {
    pub match_id: Uuid,
    pub home_pred: i32,
    pub away_pred: i32,
}

#[derive(Debug, Serialize)]
pub struct MyPredictionEntry {
    pub prediction: Prediction,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub finished: bool,
    /// Present only once the match has finished with both scores recorded.
    pub points: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PredictionLeaderboardEntry {
    pub user_id: Uuid,
    pub username: String,
    pub points: u32,
    pub predictions_scored: u32,
}
