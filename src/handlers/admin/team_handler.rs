use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::handlers::admin::user_handler::ApiResponse;
use crate::models::team::{AssignTeamGroupRequest, CreateGroupRequest, CreateTeamRequest};
use crate::tournament::validation::TournamentValidator;

// GET /admin/teams - List teams with their group and roster size
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let rows = sqlx::query(
        r#"
        SELECT
            t.id,
            t.name,
            t.created_at,
            tga.group_id,
            g.name AS group_name,
            COUNT(tp.player_id) AS player_count
        FROM teams t
        LEFT JOIN team_group_assignments tga ON t.id = tga.team_id
        LEFT JOIN groups g ON tga.group_id = g.id
        LEFT JOIN team_players tp ON t.id = tp.team_id
        GROUP BY t.id, t.name, t.created_at, tga.group_id, g.name
        ORDER BY t.name
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting teams: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let teams: Vec<serde_json::Value> = rows
        .into_iter()
        .map(|row| {
            serde_json::json!({
                "id": row.get::<Uuid, _>("id"),
                "name": row.get::<String, _>("name"),
                "group_id": row.get::<Option<Uuid>, _>("group_id"),
                "group_name": row.get::<Option<String>, _>("group_name"),
                "player_count": row.get::<i64, _>("player_count"),
                "created_at": row.get::<chrono::DateTime<Utc>, _>("created_at"),
            })
        })
        .collect();

    let response = ApiResponse {
        data: teams,
        success: true,
        message: None,
    };

    Ok(HttpResponse::Ok().json(response))
}

// POST /admin/teams - Create new team
pub async fn create_team(
    pool: web::Data<PgPool>,
    body: web::Json<CreateTeamRequest>,
) -> Result<HttpResponse> {
    let validator = TournamentValidator::new();
    let name = match validator.validate_and_sanitize_name(&body.name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let team_id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query("INSERT INTO teams (id, name, created_at) VALUES ($1, $2, $3)")
        .bind(team_id)
        .bind(&name)
        .bind(now)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"id": team_id, "name": name, "created_at": now}),
                success: true,
                message: Some("Team created successfully".to_string()),
            };
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                        "error": "A team with this name already exists"
                    })));
                }
            }
            tracing::error!("Database error creating team: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to create team"
            })))
        }
    }
}

// DELETE /admin/teams/{id} - Delete team
// Group assignment and roster rows go with it via cascading constraints.
pub async fn delete_team(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({"id": team_id}),
                    success: true,
                    message: Some("Team deleted successfully".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Team not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting team: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete team"
            })))
        }
    }
}

// PUT /admin/teams/{id}/group - Assign the team to a group (or clear it)
// Upsert by team id: a team is in at most one group.
pub async fn assign_team_group(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<AssignTeamGroupRequest>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    let team_exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error checking team: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if team_exists.is_none() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Team not found"
        })));
    }

    let result = match body.group_id {
        Some(group_id) => {
            sqlx::query(
                r#"
                INSERT INTO team_group_assignments (team_id, group_id, assigned_at)
                VALUES ($1, $2, $3)
                ON CONFLICT (team_id) DO UPDATE SET group_id = $2, assigned_at = $3
                "#,
            )
            .bind(team_id)
            .bind(group_id)
            .bind(Utc::now())
            .execute(pool.get_ref())
            .await
        }
        None => {
            sqlx::query("DELETE FROM team_group_assignments WHERE team_id = $1")
                .bind(team_id)
                .execute(pool.get_ref())
                .await
        }
    };

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"team_id": team_id, "group_id": body.group_id}),
                success: true,
                message: Some("Team group assignment updated".to_string()),
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            tracing::error!("Database error assigning team to group: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update team group assignment"
            })))
        }
    }
}

// POST /admin/groups - Create new group
pub async fn create_group(
    pool: web::Data<PgPool>,
    body: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse> {
    let validator = TournamentValidator::new();
    let name = match validator.validate_and_sanitize_name(&body.name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let group_id = Uuid::new_v4();
    let now = Utc::now();

    let result = sqlx::query("INSERT INTO groups (id, name, created_at) VALUES ($1, $2, $3)")
        .bind(group_id)
        .bind(&name)
        .bind(now)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(_) => {
            let response = ApiResponse {
                data: serde_json::json!({"id": group_id, "name": name, "created_at": now}),
                success: true,
                message: Some("Group created successfully".to_string()),
            };
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                        "error": "A group with this name already exists"
                    })));
                }
            }
            tracing::error!("Database error creating group: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to create group"
            })))
        }
    }
}

// DELETE /admin/groups/{id} - Delete group
pub async fn delete_group(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let group_id = path.into_inner();

    let result = sqlx::query("DELETE FROM groups WHERE id = $1")
        .bind(group_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({"id": group_id}),
                    success: true,
                    message: Some("Group deleted successfully".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Group not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting group: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete group"
            })))
        }
    }
}
