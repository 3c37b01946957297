use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, UserRole, UserStatus};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    if user_form.username.trim().is_empty() || user_form.email.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Username and email are required"));
    }

    match insert_user(&user_form, &pool).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::success_message(
            "Account created. An admin has to approve it before you can take part.",
        )),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
                        "Username or email is already taken",
                    ));
                }
            }
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// New accounts start as pending fans until an admin approves them.
pub async fn insert_user(
    user_form: &web::Json<RegistrationRequest>,
    pool: &PgPool,
) -> Result<(), sqlx::Error> {
    let user_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, email, full_name, phone, university, role, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(user_id)
    .bind(&user_form.username)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(&user_form.email)
    .bind(&user_form.full_name)
    .bind(&user_form.phone)
    .bind(&user_form.university)
    .bind(UserRole::Fan.as_str())
    .bind(UserStatus::Pending.as_str())
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(())
}
