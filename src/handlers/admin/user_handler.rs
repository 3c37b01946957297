use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::user::UserStatus;

#[derive(Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

#[derive(Serialize)]
pub struct PaginationInfo {
    pub page: i32,
    pub limit: i32,
    pub total: i64,
    pub total_pages: i32,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct UserQueryParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserStatusRequest {
    pub status: String,
}

// GET /admin/users - List users with pagination and filtering
pub async fn get_users(
    pool: web::Data<PgPool>,
    query: web::Query<UserQueryParams>,
) -> Result<HttpResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).min(100);
    let offset = (page - 1) * limit;

    let mut sql = r#"
        SELECT id, username, email, full_name, phone, university, role, status, created_at
        FROM users
        WHERE 1=1
    "#
    .to_string();

    let mut count_sql = r#"
        SELECT COUNT(*)
        FROM users
        WHERE 1=1
    "#
    .to_string();

    // Add search filter
    if let Some(search) = &query.search {
        if !search.is_empty() {
            let escaped = search.replace('\'', "''");
            let filter = format!(
                " AND (username ILIKE '%{}%' OR email ILIKE '%{}%')",
                escaped, escaped
            );
            sql.push_str(&filter);
            count_sql.push_str(&filter);
        }
    }

    // Add status filter
    if let Some(status) = &query.status {
        if !status.is_empty() {
            let filter = format!(" AND status = '{}'", status.replace('\'', "''"));
            sql.push_str(&filter);
            count_sql.push_str(&filter);
        }
    }

    sql.push_str(&format!(
        " ORDER BY created_at DESC LIMIT {} OFFSET {}",
        limit, offset
    ));

    // Get total count
    let total_count: (i64,) = sqlx::query_as(&count_sql)
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting user count: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    // Get users
    let rows = sqlx::query(&sql)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting users: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let users: Vec<AdminUserResponse> = rows
        .into_iter()
        .map(|row| AdminUserResponse {
            id: row.get("id"),
            username: row.get("username"),
            email: row.get("email"),
            full_name: row.get("full_name"),
            phone: row.get("phone"),
            university: row.get("university"),
            role: row.get("role"),
            status: row.get("status"),
            created_at: row.get("created_at"),
        })
        .collect();

    let total_pages = ((total_count.0 as f64) / (limit as f64)).ceil() as i32;

    let response = PaginatedResponse {
        data: users,
        pagination: PaginationInfo {
            page,
            limit,
            total: total_count.0,
            total_pages,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

// PATCH /admin/users/{id}/status - Approve or reject an account
pub async fn update_user_status(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUserStatusRequest>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    let status = match body.status.to_lowercase().as_str() {
        "pending" => UserStatus::Pending,
        "active" => UserStatus::Active,
        "rejected" => UserStatus::Rejected,
        other => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Unknown status: {}", other)
            })));
        }
    };

    let result = sqlx::query("UPDATE users SET status = $1, updated_at = $2 WHERE id = $3")
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                tracing::info!("User {} status set to {}", user_id, status);
                let response = ApiResponse {
                    data: serde_json::json!({"id": user_id, "status": status.as_str()}),
                    success: true,
                    message: Some("User status updated successfully".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "User not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error updating user status: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update user status"
            })))
        }
    }
}
