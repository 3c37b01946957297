// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Row};

use crate::config::jwt::JwtSettings;
use crate::middleware::auth::Claims;
use crate::models::user::{LoginRequest, LoginResponse, UserRole, UserStatus};
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user_result = sqlx::query(
        r#"
        SELECT id, username, password_hash, role, status
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(&login_form.username)
    .fetch_optional(pool.get_ref())
    .await;

    let user = match user_result {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized().finish();
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Verify password
    let password_hash: String = user.get("password_hash");
    if !verify_password(login_form.password.expose_secret(), &password_hash) {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized().finish();
    }

    // Role and status travel in the token so every request can be gated
    // without re-reading the profile row.
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(jwt_settings.expiration_hours))
        .expect("Valid timestamp")
        .timestamp() as usize;

    let user_id: uuid::Uuid = user.get("id");
    let claims = Claims {
        sub: user_id.to_string(),
        username: user.get("username"),
        role: UserRole::from(user.get::<String, _>("role")),
        status: UserStatus::from(user.get::<String, _>("status")),
        exp: expiration,
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    HttpResponse::Ok().json(LoginResponse { token })
}
