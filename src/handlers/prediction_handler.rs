use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::matches::MatchStatus;
use crate::models::prediction::{MyPredictionEntry, Prediction, SubmitPredictionRequest};
use crate::models::user::{UserRole, UserStatus};
use crate::tournament::predictions::{prediction_points, tally_leaderboard, SettledPrediction};

/// Submit a score guess for an upcoming match. One per fan per match,
/// immutable once created.
#[tracing::instrument(
    name = "Submit prediction",
    skip(pool, claims, body),
    fields(username = %claims.username, match_id = %body.match_id)
)]
pub async fn submit_prediction(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    body: web::Json<SubmitPredictionRequest>,
) -> HttpResponse {
    // Admins and players can browse predictions but only fans play the game
    if claims.role != UserRole::Fan {
        return HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "Only fans can submit predictions",
        ));
    }
    if claims.status != UserStatus::Active {
        return HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "Your account has not been approved yet",
        ));
    }

    let Some(user_id) = claims.user_id() else {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
    };

    if body.home_pred < 0 || body.away_pred < 0 {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Predicted scores cannot be negative",
        ));
    }

    let match_row = match sqlx::query("SELECT status FROM matches WHERE id = $1")
        .bind(body.match_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(row)) => row,
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"));
        }
        Err(e) => {
            tracing::error!("Database error fetching match: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    if MatchStatus::from(match_row.get::<String, _>("status")) == MatchStatus::Finished {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Predictions are closed for finished matches",
        ));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO predictions (id, match_id, user_id, home_pred, away_pred, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(body.match_id)
    .bind(user_id)
    .bind(body.home_pred)
    .bind(body.away_pred)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            tracing::info!("Prediction recorded for {}", claims.username);
            HttpResponse::Created().json(ApiResponse::<()>::success_message(
                "Prediction recorded",
            ))
        }
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return HttpResponse::Conflict().json(ApiResponse::<()>::error(
                        "You already predicted this match",
                    ));
                }
            }
            tracing::error!("Failed to insert prediction: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}

/// The caller's predictions with points for settled matches
#[tracing::instrument(name = "Get my predictions", skip(pool, claims), fields(username = %claims.username))]
pub async fn my_predictions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let Some(user_id) = claims.user_id() else {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
    };

    let rows = sqlx::query(
        r#"
        SELECT
            p.id, p.match_id, p.user_id, p.home_pred, p.away_pred, p.created_at,
            m.status, m.home_score, m.away_score,
            ht.name AS home_team_name, aw.name AS away_team_name
        FROM predictions p
        JOIN matches m ON p.match_id = m.id
        JOIN teams ht ON m.home_team_id = ht.id
        JOIN teams aw ON m.away_team_id = aw.id
        WHERE p.user_id = $1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool.get_ref())
    .await;

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Database error fetching predictions: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    let entries: Vec<MyPredictionEntry> = rows
        .into_iter()
        .map(|row| {
            let prediction = Prediction {
                id: row.get("id"),
                match_id: row.get("match_id"),
                user_id: row.get("user_id"),
                home_pred: row.get("home_pred"),
                away_pred: row.get("away_pred"),
                created_at: row.get("created_at"),
            };
            let finished =
                MatchStatus::from(row.get::<String, _>("status")) == MatchStatus::Finished;
            let home_score: Option<i32> = row.get("home_score");
            let away_score: Option<i32> = row.get("away_score");
            let points = match (finished, home_score, away_score) {
                (true, Some(h), Some(a)) => Some(prediction_points(
                    prediction.home_pred,
                    prediction.away_pred,
                    h,
                    a,
                )),
                _ => None,
            };
            MyPredictionEntry {
                home_team_name: row.get("home_team_name"),
                away_team_name: row.get("away_team_name"),
                home_score,
                away_score,
                finished,
                points,
                prediction,
            }
        })
        .collect();

    HttpResponse::Ok().json(ApiResponse::success("Predictions retrieved", entries))
}

/// Prediction game leaderboard over all settled matches
#[tracing::instrument(name = "Get prediction leaderboard", skip(pool))]
pub async fn prediction_leaderboard(pool: web::Data<PgPool>) -> HttpResponse {
    let rows = sqlx::query(
        r#"
        SELECT
            p.user_id, u.username, p.home_pred, p.away_pred,
            m.home_score, m.away_score
        FROM predictions p
        JOIN users u ON p.user_id = u.id
        JOIN matches m ON p.match_id = m.id
        WHERE m.status = 'finished'
          AND m.home_score IS NOT NULL
          AND m.away_score IS NOT NULL
        "#,
    )
    .fetch_all(pool.get_ref())
    .await;

    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Database error fetching prediction leaderboard: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Database error"));
        }
    };

    let settled: Vec<SettledPrediction> = rows
        .into_iter()
        .map(|row| SettledPrediction {
            user_id: row.get("user_id"),
            username: row.get("username"),
            home_pred: row.get("home_pred"),
            away_pred: row.get("away_pred"),
            home_score: row.get("home_score"),
            away_score: row.get("away_score"),
        })
        .collect();

    let leaderboard = tally_leaderboard(&settled);

    HttpResponse::Ok().json(ApiResponse::success("Leaderboard computed", leaderboard))
}
