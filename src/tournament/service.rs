use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::matches::{Match, MatchWithTeams};
use crate::models::player::{Player, PlayerStats};
use crate::models::team::{Group, Team, TeamGroupAssignment};
use crate::tournament::knockout::{group_knockout_rounds, KnockoutRound};
use crate::tournament::leaderboard::{compute_leaderboard, LeaderboardEntry, LeaderboardKind};
use crate::tournament::standings::{compute_group_tables, GroupTable};

#[derive(Debug, Serialize)]
pub struct KnockoutRoundView {
    pub label: String,
    pub matches: Vec<MatchWithTeams>,
}

/// Fetches the full current row sets and hands them to the pure engines.
/// Every call is a complete recompute over a fresh snapshot; nothing is
/// cached between requests.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn group_tables(&self) -> Result<Vec<GroupTable>, sqlx::Error> {
        let groups = sqlx::query_as::<_, Group>("SELECT * FROM groups ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        let assignments =
            sqlx::query_as::<_, TeamGroupAssignment>("SELECT * FROM team_group_assignments")
                .fetch_all(&self.pool)
                .await?;
        let teams = sqlx::query_as::<_, Team>("SELECT * FROM teams")
            .fetch_all(&self.pool)
            .await?;
        let matches = sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE stage = 'group'")
            .fetch_all(&self.pool)
            .await?;

        Ok(compute_group_tables(&groups, &assignments, &teams, &matches))
    }

    pub async fn knockout_rounds(&self) -> Result<Vec<KnockoutRoundView>, sqlx::Error> {
        let matches = sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE stage = 'knockout'")
            .fetch_all(&self.pool)
            .await?;
        let team_names = self.team_names().await?;

        let rounds = group_knockout_rounds(&matches);
        Ok(rounds
            .into_iter()
            .map(|KnockoutRound { label, matches }| KnockoutRoundView {
                label,
                matches: matches
                    .into_iter()
                    .map(|m| with_team_names(m, &team_names))
                    .collect(),
            })
            .collect())
    }

    pub async fn leaderboard(
        &self,
        kind: LeaderboardKind,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let players = sqlx::query_as::<_, Player>("SELECT * FROM players")
            .fetch_all(&self.pool)
            .await?;
        let stats = sqlx::query_as::<_, PlayerStats>("SELECT * FROM player_stats")
            .fetch_all(&self.pool)
            .await?;

        Ok(compute_leaderboard(&players, &stats, kind, limit))
    }

    async fn team_names(&self) -> Result<HashMap<Uuid, String>, sqlx::Error> {
        let teams = sqlx::query_as::<_, Team>("SELECT * FROM teams")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
    }
}

fn with_team_names(m: Match, team_names: &HashMap<Uuid, String>) -> MatchWithTeams {
    let home_team_name = team_names
        .get(&m.home_team_id)
        .cloned()
        .unwrap_or_else(|| m.home_team_id.to_string());
    let away_team_name = team_names
        .get(&m.away_team_id)
        .cloned()
        .unwrap_or_else(|| m.away_team_id.to_string());
    MatchWithTeams {
        fixture: m,
        home_team_name,
        away_team_name,
    }
}
