// src/routes/predictions.rs
use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::handlers::prediction_handler;
use crate::middleware::auth::Claims;
use crate::models::prediction::SubmitPredictionRequest;

/// Submit a one-time score guess for an upcoming match
#[post("")]
async fn submit_prediction(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    body: web::Json<SubmitPredictionRequest>,
) -> HttpResponse {
    prediction_handler::submit_prediction(pool, claims, body).await
}

/// The caller's predictions with points for settled matches
#[get("/mine")]
async fn my_predictions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    prediction_handler::my_predictions(pool, claims).await
}

/// Prediction game leaderboard
#[get("/leaderboard")]
async fn prediction_leaderboard(pool: web::Data<PgPool>) -> HttpResponse {
    prediction_handler::prediction_leaderboard(pool).await
}
