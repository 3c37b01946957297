// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStage {
    Group,
    Knockout,
}

impl MatchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStage::Group => "group",
            MatchStage::Knockout => "knockout",
        }
    }
}

impl From<String> for MatchStage {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "knockout" => MatchStage::Knockout,
            _ => MatchStage::Group,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Finished => "finished",
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "finished" => MatchStatus::Finished,
            _ => MatchStatus::Scheduled,
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub stage: MatchStage,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub start_time: Option<DateTime<Utc>>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub knockout_round: Option<String>,
    pub knockout_order: Option<i32>,
    pub knockout_label: Option<String>,
    pub motm_player_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct GoalEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub scoring_team_id: Uuid,
    pub scorer_player_id: Uuid,
    pub assist_player_id: Option<Uuid>,
    pub minute: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub stage: MatchStage,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub start_time: Option<DateTime<Utc>>,
    pub knockout_round: Option<String>,
    pub knockout_order: Option<i32>,
    pub knockout_label: Option<String>,
}

/// Partial update; absent fields are left untouched. Last write wins.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct UpdateMatchRequest {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: Option<MatchStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub motm_player_id: Option<Uuid>,
    pub knockout_round: Option<String>,
    pub knockout_order: Option<i32>,
    pub knockout_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateGoalRequest {
    pub scoring_team_id: Uuid,
    pub scorer_player_id: Uuid,
    pub assist_player_id: Option<Uuid>,
    pub minute: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MatchWithTeams {
    pub fixture: Match,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Debug, Serialize)]
pub struct GoalWithNames {
    pub goal: GoalEvent,
    pub scoring_team_name: String,
    pub scorer_name: String,
    pub assist_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse {
    pub fixture: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub goals: Vec<GoalWithNames>,
}

#[derive(Debug, Deserialize)]
pub struct MatchQueryParams {
    pub stage: Option<MatchStage>,
    pub group_id: Option<Uuid>,
}
