use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::admin::user_handler::ApiResponse;
use crate::models::player::{AddTeamPlayerRequest, CreatePlayerRequest, UpdatePlayerStatsRequest};
use crate::tournament::validation::TournamentValidator;

// POST /admin/players - Create a roster entry with its stats row
pub async fn create_player(
    pool: web::Data<PgPool>,
    body: web::Json<CreatePlayerRequest>,
) -> Result<HttpResponse> {
    let validator = TournamentValidator::new();
    let full_name = match validator.validate_and_sanitize_name(&body.full_name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let player_id = Uuid::new_v4();
    let now = Utc::now();

    // Player and stats row are created together so the leaderboards never
    // see a player without counters.
    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Failed to start transaction: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to start database transaction"
            })));
        }
    };

    let player_result = sqlx::query(
        r#"
        INSERT INTO players (id, full_name, display_name, university, position, linked_user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(player_id)
    .bind(&full_name)
    .bind(&body.display_name)
    .bind(&body.university)
    .bind(&body.position)
    .bind(body.linked_user_id)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await;

    if let Err(e) = player_result {
        tracing::error!("Database error creating player: {}", e);
        let _ = tx.rollback().await;
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "That login account is already linked to another player"
                })));
            }
        }
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to create player"
        })));
    }

    let (matches_played, goals, assists, motm) = match &body.stats {
        Some(stats) => (
            stats.matches_played.max(0),
            stats.goals.max(0),
            stats.assists.max(0),
            stats.motm.max(0),
        ),
        None => (0, 0, 0, 0),
    };

    let stats_result = sqlx::query(
        r#"
        INSERT INTO player_stats (player_id, matches_played, goals, assists, motm, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(player_id)
    .bind(matches_played)
    .bind(goals)
    .bind(assists)
    .bind(motm)
    .bind(now)
    .execute(&mut *tx)
    .await;

    if let Err(e) = stats_result {
        tracing::error!("Database error creating player stats: {}", e);
        let _ = tx.rollback().await;
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to create player stats"
        })));
    }

    if let Err(e) = tx.commit().await {
        tracing::error!("Failed to commit transaction: {}", e);
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to commit player creation"
        })));
    }

    let response = ApiResponse {
        data: serde_json::json!({
            "id": player_id,
            "full_name": full_name,
            "display_name": body.display_name,
        }),
        success: true,
        message: Some("Player created successfully".to_string()),
    };

    Ok(HttpResponse::Created().json(response))
}

// DELETE /admin/players/{id} - Delete a roster entry
// Stats, roster assignment and goal references cascade away with it.
pub async fn delete_player(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({"id": player_id}),
                    success: true,
                    message: Some("Player deleted successfully".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Player not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting player: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete player"
            })))
        }
    }
}

// PATCH /admin/players/{id}/stats - Update the admin-edited counters
pub async fn update_player_stats(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePlayerStatsRequest>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    if body.matches_played.is_none()
        && body.goals.is_none()
        && body.assists.is_none()
        && body.motm.is_none()
    {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No fields to update"
        })));
    }

    if [body.matches_played, body.goals, body.assists, body.motm]
        .iter()
        .flatten()
        .any(|v| *v < 0)
    {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Stat counters cannot be negative"
        })));
    }

    // Upsert so players created before the stats table existed still get a row
    let result = sqlx::query(
        r#"
        INSERT INTO player_stats (player_id, matches_played, goals, assists, motm, updated_at)
        VALUES ($1, COALESCE($2, 0), COALESCE($3, 0), COALESCE($4, 0), COALESCE($5, 0), $6)
        ON CONFLICT (player_id) DO UPDATE SET
            matches_played = COALESCE($2, player_stats.matches_played),
            goals = COALESCE($3, player_stats.goals),
            assists = COALESCE($4, player_stats.assists),
            motm = COALESCE($5, player_stats.motm),
            updated_at = $6
        "#,
    )
    .bind(player_id)
    .bind(body.matches_played)
    .bind(body.goals)
    .bind(body.assists)
    .bind(body.motm)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"player_id": player_id}),
                success: true,
                message: Some("Player stats updated successfully".to_string()),
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            tracing::error!("Database error updating player stats: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update player stats"
            })))
        }
    }
}

// POST /admin/teams/{id}/players - Put a player on a team
// A player is on at most one team; adding to a new team replaces the old
// assignment in a single statement.
pub async fn add_team_player(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<AddTeamPlayerRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let result = sqlx::query(
        r#"
        INSERT INTO team_players (player_id, team_id, added_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (player_id) DO UPDATE SET team_id = $2, added_at = $3
        "#,
    )
    .bind(body.player_id)
    .bind(team_id)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"team_id": team_id, "player_id": body.player_id}),
                success: true,
                message: Some("Player added to team".to_string()),
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            tracing::error!("Database error adding team player: {}", e);
            // Foreign key failures mean an unknown team or player id
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Failed to add player to team"
            })))
        }
    }
}

// DELETE /admin/teams/{team_id}/players/{player_id} - Remove from roster
pub async fn remove_team_player(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (team_id, player_id) = path.into_inner();

    let result = sqlx::query("DELETE FROM team_players WHERE team_id = $1 AND player_id = $2")
        .bind(team_id)
        .bind(player_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({}),
                    success: true,
                    message: Some("Player removed from team".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Player is not on this team"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error removing team player: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to remove player from team"
            })))
        }
    }
}
