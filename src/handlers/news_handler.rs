use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use sqlx::{PgPool, Row};

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::news::{
    NewsMediaType, NewsPost, NewsPostWithAuthor, NewsQueryParams, UnreadCountResponse,
};

/// Reverse-chronological feed, paginated
#[tracing::instrument(name = "Get news feed", skip(query, pool))]
pub async fn get_news_feed(
    query: web::Query<NewsQueryParams>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).min(100);
    let offset = (page - 1) * limit;

    let rows = sqlx::query(
        r#"
        SELECT
            n.id, n.author_id, n.title, n.body, n.media_type, n.media_url, n.created_at,
            u.username AS author_name
        FROM news_posts n
        JOIN users u ON n.author_id = u.id
        ORDER BY n.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool.get_ref())
    .await;

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Database error fetching news feed: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    let posts: Vec<NewsPostWithAuthor> = rows
        .into_iter()
        .map(|row| NewsPostWithAuthor {
            post: NewsPost {
                id: row.get("id"),
                author_id: row.get("author_id"),
                title: row.get("title"),
                body: row.get("body"),
                media_type: NewsMediaType::from(row.get::<String, _>("media_type")),
                media_url: row.get("media_url"),
                created_at: row.get("created_at"),
            },
            author_name: row.get("author_name"),
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "success": true,
        "data": posts,
        "page": page,
        "limit": limit
    }))
}

/// Posts newer than the caller's last-seen timestamp. A caller who has never
/// opened the feed counts everything as unread.
#[tracing::instrument(name = "Get unread news count", skip(pool, claims), fields(username = %claims.username))]
pub async fn get_unread_count(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
    };

    let result = sqlx::query(
        r#"
        SELECT
            u.last_news_seen_at,
            (SELECT COUNT(*) FROM news_posts n
             WHERE u.last_news_seen_at IS NULL OR n.created_at > u.last_news_seen_at) AS unread
        FROM users u
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool.get_ref())
    .await;

    match result {
        Ok(Some(row)) => HttpResponse::Ok().json(ApiResponse::success(
            "Unread count computed",
            UnreadCountResponse {
                unread: row.get("unread"),
                last_seen_at: row.get("last_news_seen_at"),
            },
        )),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found")),
        Err(e) => {
            tracing::error!("Database error counting unread news: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

/// Stamp the caller's last-seen marker so the unread badge clears
#[tracing::instrument(name = "Mark news seen", skip(pool, claims), fields(username = %claims.username))]
pub async fn mark_news_seen(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
    };

    let result = sqlx::query("UPDATE users SET last_news_seen_at = $1, updated_at = $1 WHERE id = $2")
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(outcome) if outcome.rows_affected() > 0 => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("News marked as seen"))
        }
        Ok(_) => HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found")),
        Err(e) => {
            tracing::error!("Database error marking news seen: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}
