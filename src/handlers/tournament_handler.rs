use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::matches::{
    GoalEvent, GoalWithNames, Match, MatchDetailResponse, MatchQueryParams, MatchWithTeams,
};
use crate::models::player::{Player, PlayerStats, PlayerWithDetails, PositionGroup};
use crate::models::team::{Group, GroupWithTeams, Team, TeamWithGroup};
use crate::tournament::leaderboard::LeaderboardKind;
use crate::tournament::service::StandingsService;

#[derive(serde::Deserialize)]
pub struct LeaderboardQuery {
    pub kind: Option<LeaderboardKind>,
    pub limit: Option<usize>,
}

/// Group tables, recomputed from the current snapshot on every call
#[tracing::instrument(name = "Get group standings", skip(pool))]
pub async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = StandingsService::new(pool.get_ref().clone());

    match service.group_tables().await {
        Ok(tables) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tables
        }))),
        Err(e) => {
            tracing::error!("Failed to compute group standings: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to compute standings"
            })))
        }
    }
}

/// Knockout bracket grouped by round
#[tracing::instrument(name = "Get knockout rounds", skip(pool))]
pub async fn get_knockout(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = StandingsService::new(pool.get_ref().clone());

    match service.knockout_rounds().await {
        Ok(rounds) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": rounds
        }))),
        Err(e) => {
            tracing::error!("Failed to compute knockout rounds: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to compute knockout rounds"
            })))
        }
    }
}

/// Top scorers or assisters
#[tracing::instrument(name = "Get leaderboard", skip(query, pool))]
pub async fn get_leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let kind = query.kind.unwrap_or(LeaderboardKind::Scorers);
    let limit = query.limit.unwrap_or(10).min(100);
    let service = StandingsService::new(pool.get_ref().clone());

    match service.leaderboard(kind, limit).await {
        Ok(entries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entries
        }))),
        Err(e) => {
            tracing::error!("Failed to compute leaderboard: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to compute leaderboard"
            })))
        }
    }
}

#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let rows = sqlx::query(
        r#"
        SELECT t.id, t.name, t.created_at, tga.group_id, g.name AS group_name
        FROM teams t
        LEFT JOIN team_group_assignments tga ON t.id = tga.team_id
        LEFT JOIN groups g ON tga.group_id = g.id
        ORDER BY t.name
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting teams: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let teams: Vec<TeamWithGroup> = rows
        .into_iter()
        .map(|row| TeamWithGroup {
            id: row.get("id"),
            name: row.get("name"),
            group_id: row.get("group_id"),
            group_name: row.get("group_name"),
            created_at: row.get("created_at"),
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": teams
    })))
}

#[tracing::instrument(name = "List groups", skip(pool))]
pub async fn get_groups(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let groups = sqlx::query_as::<_, Group>("SELECT * FROM groups ORDER BY name")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting groups: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let assigned = sqlx::query(
        r#"
        SELECT tga.group_id, t.id, t.name, t.created_at
        FROM team_group_assignments tga
        JOIN teams t ON tga.team_id = t.id
        ORDER BY t.name
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting group assignments: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let data: Vec<GroupWithTeams> = groups
        .into_iter()
        .map(|g| {
            let teams = assigned
                .iter()
                .filter(|row| row.get::<Uuid, _>("group_id") == g.id)
                .map(|row| Team {
                    id: row.get("id"),
                    name: row.get("name"),
                    created_at: row.get("created_at"),
                })
                .collect();
            GroupWithTeams {
                id: g.id,
                name: g.name,
                teams,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": data
    })))
}

#[tracing::instrument(name = "List players", skip(pool))]
pub async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let players = sqlx::query_as::<_, Player>("SELECT * FROM players")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting players: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let stats = sqlx::query_as::<_, PlayerStats>("SELECT * FROM player_stats")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting player stats: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let memberships = sqlx::query(
        r#"
        SELECT tp.player_id, tp.team_id, t.name AS team_name
        FROM team_players tp
        JOIN teams t ON tp.team_id = t.id
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting team players: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let mut data: Vec<PlayerWithDetails> = players
        .into_iter()
        .map(|player| {
            let membership = memberships
                .iter()
                .find(|row| row.get::<Uuid, _>("player_id") == player.id);
            let position_group =
                PositionGroup::from_text(player.position.as_deref().unwrap_or(""));
            PlayerWithDetails {
                team_id: membership.map(|row| row.get("team_id")),
                team_name: membership.map(|row| row.get("team_name")),
                stats: stats.iter().find(|s| s.player_id == player.id).cloned(),
                position_group,
                player,
            }
        })
        .collect();

    // Roster order: GK first, forwards last, name breaking ties
    data.sort_by(|a, b| {
        a.position_group
            .sort_rank()
            .cmp(&b.position_group.sort_rank())
            .then_with(|| a.player.presentation_name().cmp(b.player.presentation_name()))
    });

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": data
    })))
}

#[tracing::instrument(name = "List matches", skip(query, pool))]
pub async fn get_matches(
    query: web::Query<MatchQueryParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let mut sql = "SELECT * FROM matches WHERE 1=1".to_string();
    if let Some(stage) = query.stage {
        sql.push_str(&format!(" AND stage = '{}'", stage.as_str()));
    }
    if let Some(group_id) = query.group_id {
        sql.push_str(&format!(" AND group_id = '{}'", group_id));
    }
    sql.push_str(" ORDER BY start_time ASC NULLS LAST, created_at ASC");

    let matches = sqlx::query_as::<_, Match>(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting matches: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let teams = sqlx::query_as::<_, Team>("SELECT * FROM teams")
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting teams: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;
    let names: std::collections::HashMap<Uuid, String> =
        teams.into_iter().map(|t| (t.id, t.name)).collect();

    let data: Vec<MatchWithTeams> = matches
        .into_iter()
        .map(|m| {
            let home_team_name = names
                .get(&m.home_team_id)
                .cloned()
                .unwrap_or_else(|| m.home_team_id.to_string());
            let away_team_name = names
                .get(&m.away_team_id)
                .cloned()
                .unwrap_or_else(|| m.away_team_id.to_string());
            MatchWithTeams {
                fixture: m,
                home_team_name,
                away_team_name,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": data,
        "total_count": data.len()
    })))
}

#[tracing::instrument(name = "Get match detail", skip(pool), fields(match_id = %match_id))]
pub async fn get_match_detail(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let fixture = sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting match: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let Some(fixture) = fixture else {
        return Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Match not found"
        })));
    };

    let team_rows = sqlx::query("SELECT id, name FROM teams WHERE id = $1 OR id = $2")
        .bind(fixture.home_team_id)
        .bind(fixture.away_team_id)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting match teams: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;
    let team_name = |id: Uuid| {
        team_rows
            .iter()
            .find(|row| row.get::<Uuid, _>("id") == id)
            .map(|row| row.get::<String, _>("name"))
            .unwrap_or_else(|| id.to_string())
    };

    // Goals read in match-report order: known minutes first, then by entry time
    let goal_rows = sqlx::query(
        r#"
        SELECT
            ge.id, ge.match_id, ge.scoring_team_id, ge.scorer_player_id,
            ge.assist_player_id, ge.minute, ge.created_at,
            t.name AS scoring_team_name,
            COALESCE(sp.display_name, sp.full_name) AS scorer_name,
            COALESCE(ap.display_name, ap.full_name) AS assist_name
        FROM goal_events ge
        JOIN teams t ON ge.scoring_team_id = t.id
        JOIN players sp ON ge.scorer_player_id = sp.id
        LEFT JOIN players ap ON ge.assist_player_id = ap.id
        WHERE ge.match_id = $1
        ORDER BY ge.minute ASC NULLS LAST, ge.created_at ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting goal events: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let goals: Vec<GoalWithNames> = goal_rows
        .into_iter()
        .map(|row| GoalWithNames {
            goal: GoalEvent {
                id: row.get("id"),
                match_id: row.get("match_id"),
                scoring_team_id: row.get("scoring_team_id"),
                scorer_player_id: row.get("scorer_player_id"),
                assist_player_id: row.get("assist_player_id"),
                minute: row.get("minute"),
                created_at: row.get("created_at"),
            },
            scoring_team_name: row.get("scoring_team_name"),
            scorer_name: row.get("scorer_name"),
            assist_name: row.get("assist_name"),
        })
        .collect();

    let response = MatchDetailResponse {
        home_team_name: team_name(fixture.home_team_id),
        away_team_name: team_name(fixture.away_team_id),
        fixture,
        goals,
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": response
    })))
}
