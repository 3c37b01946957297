use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
mod handlers;
mod middleware;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;
pub mod tournament;
pub mod utils;

use crate::config::jwt::JwtSettings;
use crate::routes::init_routes;
use crate::services::StorageService;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    storage_service: StorageService,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let storage_service_data = web::Data::new(storage_service);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_origin("https://campus-cup.fly.dev")
            .allowed_origin("https://campus-cup-admin.fly.dev")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(storage_service_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
