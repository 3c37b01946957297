// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One group per team; re-assignment replaces the row.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct TeamGroupAssignment {
    pub team_id: Uuid,
    pub group_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// `group_id: None` clears the team's assignment.
#[derive(Debug, Deserialize)]
pub struct AssignTeamGroupRequest {
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct TeamWithGroup {
    pub id: Uuid,
    pub name: String,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GroupWithTeams {
    pub id: Uuid,
    pub name: String,
    pub teams: Vec<Team>,
}
