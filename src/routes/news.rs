// src/routes/news.rs
use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::news_handler;
use crate::middleware::auth::Claims;
use crate::models::news::NewsQueryParams;

/// Reverse-chronological feed
#[get("")]
async fn get_news_feed(
    query: web::Query<NewsQueryParams>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    news_handler::get_news_feed(query, pool).await
}

/// Unread badge count for the caller
#[get("/unread_count")]
async fn get_unread_count(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    news_handler::get_unread_count(pool, claims).await
}

/// Reset the caller's unread badge
#[post("/seen")]
async fn mark_news_seen(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    news_handler::mark_news_seen(pool, claims).await
}
