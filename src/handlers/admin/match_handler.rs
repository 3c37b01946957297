use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::handlers::admin::user_handler::ApiResponse;
use crate::models::matches::{CreateGoalRequest, CreateMatchRequest, MatchStage, UpdateMatchRequest};
use crate::tournament::validation::TournamentValidator;

// POST /admin/matches - Schedule a match
pub async fn create_match(
    pool: web::Data<PgPool>,
    body: web::Json<CreateMatchRequest>,
) -> Result<HttpResponse> {
    let validator = TournamentValidator::new();
    if let Err(e) = validator.validate_create_match(&body) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })));
    }

    let match_id = Uuid::new_v4();
    let now = Utc::now();

    // Knockout metadata only applies to knockout fixtures; the in-round
    // order is 1-based.
    let (group_id, knockout_round, knockout_order, knockout_label) = match body.stage {
        MatchStage::Group => (body.group_id, None, None, None),
        MatchStage::Knockout => (
            None,
            body.knockout_round.clone(),
            Some(validator.coerce_knockout_order(body.knockout_order)),
            body.knockout_label.clone(),
        ),
    };

    let result = sqlx::query(
        r#"
        INSERT INTO matches (
            id, stage, group_id, home_team_id, away_team_id, start_time, status,
            home_score, away_score, knockout_round, knockout_order, knockout_label,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, 'scheduled', 0, 0, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(match_id)
    .bind(body.stage.as_str())
    .bind(group_id)
    .bind(body.home_team_id)
    .bind(body.away_team_id)
    .bind(body.start_time)
    .bind(knockout_round)
    .bind(knockout_order)
    .bind(knockout_label)
    .bind(now)
    .bind(now)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            tracing::info!("Match {} created", match_id);
            let response = ApiResponse {
                data: serde_json::json!({"id": match_id}),
                success: true,
                message: Some("Match created successfully".to_string()),
            };
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            tracing::error!("Database error creating match: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to create match"
            })))
        }
    }
}

// PATCH /admin/matches/{id} - Partial update; last write wins
pub async fn update_match(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateMatchRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let validator = TournamentValidator::new();

    if body.home_score.is_some() || body.away_score.is_some() {
        if let Err(e) = validator.validate_scores(
            body.home_score.unwrap_or(0),
            body.away_score.unwrap_or(0),
        ) {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    }

    let fixture = sqlx::query("SELECT home_team_id, away_team_id FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching match: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let Some(fixture) = fixture else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Match not found"
        })));
    };

    // Man of the match has to come from one of the two rosters
    if let Some(motm_player_id) = body.motm_player_id {
        let home_team_id: Uuid = fixture.get("home_team_id");
        let away_team_id: Uuid = fixture.get("away_team_id");
        let on_roster: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM team_players WHERE player_id = $1 AND (team_id = $2 OR team_id = $3)",
        )
        .bind(motm_player_id)
        .bind(home_team_id)
        .bind(away_team_id)
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error checking man of the match: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

        if on_roster.0 == 0 {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Man of the match must play for one of the two teams"
            })));
        }
    }

    let knockout_order = body
        .knockout_order
        .map(|order| validator.coerce_knockout_order(Some(order)));

    let result = sqlx::query(
        r#"
        UPDATE matches SET
            home_score = COALESCE($1, home_score),
            away_score = COALESCE($2, away_score),
            status = COALESCE($3, status),
            start_time = COALESCE($4, start_time),
            motm_player_id = COALESCE($5, motm_player_id),
            knockout_round = COALESCE($6, knockout_round),
            knockout_order = COALESCE($7, knockout_order),
            knockout_label = COALESCE($8, knockout_label),
            updated_at = $9
        WHERE id = $10
        "#,
    )
    .bind(body.home_score)
    .bind(body.away_score)
    .bind(body.status.map(|s| s.as_str()))
    .bind(body.start_time)
    .bind(body.motm_player_id)
    .bind(&body.knockout_round)
    .bind(knockout_order)
    .bind(&body.knockout_label)
    .bind(Utc::now())
    .bind(match_id)
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"id": match_id}),
                success: true,
                message: Some("Match updated successfully".to_string()),
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            tracing::error!("Database error updating match: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update match"
            })))
        }
    }
}

// DELETE /admin/matches/{id} - Delete a match and its goal events as one unit
pub async fn delete_match(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Failed to start transaction: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to start database transaction"
            })));
        }
    };

    let goals_result = sqlx::query("DELETE FROM goal_events WHERE match_id = $1")
        .bind(match_id)
        .execute(&mut *tx)
        .await;

    if let Err(e) = goals_result {
        tracing::error!("Database error deleting goal events: {}", e);
        let _ = tx.rollback().await;
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to delete goal events"
        })));
    }

    let match_result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(&mut *tx)
        .await;

    let rows_affected = match match_result {
        Ok(result) => result.rows_affected(),
        Err(e) => {
            tracing::error!("Database error deleting match: {}", e);
            let _ = tx.rollback().await;
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete match"
            })));
        }
    };

    if rows_affected == 0 {
        let _ = tx.rollback().await;
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Match not found"
        })));
    }

    if let Err(e) = tx.commit().await {
        tracing::error!("Failed to commit transaction: {}", e);
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to commit match deletion"
        })));
    }

    let response = ApiResponse {
        data: serde_json::json!({"id": match_id}),
        success: true,
        message: Some("Match and its goal events deleted".to_string()),
    };
    Ok(HttpResponse::Ok().json(response))
}

// POST /admin/matches/{id}/goals - Record a goal event
pub async fn add_goal(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<CreateGoalRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    let fixture = sqlx::query("SELECT home_team_id, away_team_id FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching match: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let Some(fixture) = fixture else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Match not found"
        })));
    };

    let validator = TournamentValidator::new();
    if let Err(e) = validator.validate_goal(
        &body,
        fixture.get("home_team_id"),
        fixture.get("away_team_id"),
    ) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })));
    }

    let goal_id = Uuid::new_v4();
    let result = sqlx::query(
        r#"
        INSERT INTO goal_events (id, match_id, scoring_team_id, scorer_player_id, assist_player_id, minute, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(goal_id)
    .bind(match_id)
    .bind(body.scoring_team_id)
    .bind(body.scorer_player_id)
    .bind(body.assist_player_id)
    .bind(body.minute)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"id": goal_id, "match_id": match_id}),
                success: true,
                message: Some("Goal recorded".to_string()),
            };
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            tracing::error!("Database error recording goal: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to record goal"
            })))
        }
    }
}

// DELETE /admin/goals/{id} - Remove a goal event
pub async fn delete_goal(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let goal_id = path.into_inner();

    let result = sqlx::query("DELETE FROM goal_events WHERE id = $1")
        .bind(goal_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({"id": goal_id}),
                    success: true,
                    message: Some("Goal deleted".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Goal not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting goal: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete goal"
            })))
        }
    }
}
