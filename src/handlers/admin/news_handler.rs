use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::admin::user_handler::ApiResponse;
use crate::middleware::auth::Claims;
use crate::models::news::{CreateNewsPostRequest, NewsMediaType};
use crate::services::StorageService;

const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];
const ALLOWED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm"];

#[derive(Debug, MultipartForm)]
pub struct NewsMediaUploadForm {
    #[multipart(limit = "100MB")]
    pub file: TempFile,
}

#[derive(serde::Serialize)]
pub struct NewsMediaUploadResponse {
    pub media_url: String,
    pub media_type: NewsMediaType,
}

// POST /admin/news - Publish a post to the feed
#[tracing::instrument(
    name = "Create news post",
    skip(pool, claims, body),
    fields(username = %claims.username)
)]
pub async fn create_news_post(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    body: web::Json<CreateNewsPostRequest>,
) -> Result<HttpResponse> {
    let Some(author_id) = claims.user_id() else {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid user ID"
        })));
    };

    if body.body.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Post body cannot be empty"
        })));
    }

    // A post carries at most one attachment; an URL without a declared type
    // is treated as an image.
    let media_type = match (&body.media_type, &body.media_url) {
        (Some(t), _) => *t,
        (None, Some(_)) => NewsMediaType::Image,
        (None, None) => NewsMediaType::None,
    };

    if media_type != NewsMediaType::None && body.media_url.is_none() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Media posts need a media URL"
        })));
    }

    let post_id = Uuid::new_v4();
    let result = sqlx::query(
        r#"
        INSERT INTO news_posts (id, author_id, title, body, media_type, media_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(&body.title)
    .bind(body.body.trim())
    .bind(media_type.as_str())
    .bind(&body.media_url)
    .bind(Utc::now())
    .execute(pool.get_ref())
    .await;

    match result {
        Ok(_) => {
            tracing::info!("News post {} published by {}", post_id, claims.username);
            let response = ApiResponse {
                data: serde_json::json!({"id": post_id}),
                success: true,
                message: Some("Post published".to_string()),
            };
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            tracing::error!("Database error creating news post: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to publish post"
            })))
        }
    }
}

// DELETE /admin/news/{id} - Take a post off the feed
pub async fn delete_news_post(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    let result = sqlx::query("DELETE FROM news_posts WHERE id = $1")
        .bind(post_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(result) => {
            if result.rows_affected() > 0 {
                let response = ApiResponse {
                    data: serde_json::json!({"id": post_id}),
                    success: true,
                    message: Some("Post deleted".to_string()),
                };
                Ok(HttpResponse::Ok().json(response))
            } else {
                Ok(HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Post not found"
                })))
            }
        }
        Err(e) => {
            tracing::error!("Database error deleting news post: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete post"
            })))
        }
    }
}

// POST /admin/news/media - Upload a post attachment, returns its public URL
#[tracing::instrument(
    name = "Upload news media",
    skip(form, claims, storage),
    fields(
        username = %claims.username,
        file_name = %form.file.file_name.as_deref().unwrap_or("unknown")
    )
)]
pub async fn upload_news_media(
    MultipartForm(form): MultipartForm<NewsMediaUploadForm>,
    claims: web::ReqData<Claims>,
    storage: web::Data<StorageService>,
) -> HttpResponse {
    let original_filename = form.file.file_name.as_deref().unwrap_or("unknown");
    let mut extension = get_file_extension(original_filename);

    // Fall back to the content type when the filename carries no usable
    // extension
    if !is_allowed_extension(&extension) {
        if let Some(content_type) = &form.file.content_type {
            extension = match content_type.to_string().as_str() {
                "image/jpeg" | "image/jpg" => "jpg".to_string(),
                "image/png" => "png".to_string(),
                "image/gif" => "gif".to_string(),
                "image/webp" => "webp".to_string(),
                "video/mp4" => "mp4".to_string(),
                "video/quicktime" => "mov".to_string(),
                "video/webm" => "webm".to_string(),
                _ => extension,
            };
        }
    }

    if !is_allowed_extension(&extension) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!(
                "Invalid file type. Allowed images: {:?}, videos: {:?}",
                ALLOWED_IMAGE_EXTENSIONS, ALLOWED_VIDEO_EXTENSIONS
            )
        }));
    }

    let media_type = if ALLOWED_VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        NewsMediaType::Video
    } else {
        NewsMediaType::Image
    };

    let file_data = match std::fs::read(form.file.file.path()) {
        Ok(data) => bytes::Bytes::from(data),
        Err(e) => {
            tracing::error!("Failed to read uploaded file: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to process uploaded file"
            }));
        }
    };

    let content_type = form
        .file
        .content_type
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    match storage
        .upload_news_media(file_data, &extension, &content_type)
        .await
    {
        Ok(media_url) => {
            tracing::info!("News media uploaded by {}: {}", claims.username, media_url);
            HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "data": NewsMediaUploadResponse { media_url, media_type }
            }))
        }
        Err(e) => {
            tracing::error!("Failed to upload news media: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to upload media"
            }))
        }
    }
}

fn get_file_extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .filter(|ext| *ext != filename)
        .unwrap_or("")
        .to_lowercase()
}

fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_IMAGE_EXTENSIONS.contains(&extension)
        || ALLOWED_VIDEO_EXTENSIONS.contains(&extension)
}
