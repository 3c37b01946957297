// src/routes/tournament.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::tournament_handler;
use crate::handlers::tournament_handler::LeaderboardQuery;
use crate::models::matches::MatchQueryParams;

/// Group tables for the group stage
#[get("/standings")]
async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_standings(pool).await
}

/// Knockout matches grouped and ordered by round
#[get("/knockout")]
async fn get_knockout(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_knockout(pool).await
}

/// Top scorers / top assisters
#[get("/leaderboard")]
async fn get_leaderboard(
    query: web::Query<LeaderboardQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tournament_handler::get_leaderboard(query, pool).await
}

#[get("/teams")]
async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_teams(pool).await
}

#[get("/groups")]
async fn get_groups(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_groups(pool).await
}

#[get("/players")]
async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::get_players(pool).await
}

/// Schedule, optionally filtered by stage and group
#[get("/matches")]
async fn get_matches(
    query: web::Query<MatchQueryParams>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tournament_handler::get_matches(query, pool).await
}

/// One match with its goal events
#[get("/matches/{match_id}")]
async fn get_match_detail(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    tournament_handler::get_match_detail(match_id, pool).await
}
