// src/models/news.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NewsMediaType {
    None,
    Image,
    Video,
}

impl NewsMediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsMediaType::None => "none",
            NewsMediaType::Image => "image",
            NewsMediaType::Video => "video",
        }
    }
}

impl From<String> for NewsMediaType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "image" => NewsMediaType::Image,
            "video" => NewsMediaType::Video,
            _ => NewsMediaType::None,
        }
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct NewsPost {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: Option<String>,
    pub body: String,
    pub media_type: NewsMediaType,
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNewsPostRequest {
    pub title: Option<String>,
    pub body: String,
    #[serde(default)]
    pub media_type: Option<NewsMediaType>,
    pub media_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewsPostWithAuthor {
    pub post: NewsPost,
    pub author_name: String,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
    pub last_seen_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct NewsQueryParams {
    pub page: Option<i32>,
    pub limit: Option<i32>,
}
