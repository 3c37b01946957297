use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod news;
pub mod predictions;
pub mod registration;
pub mod tournament;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Tournament reads (require authentication)
    cfg.service(
        web::scope("/tournament")
            .wrap(AuthMiddleware)
            .service(tournament::get_standings)
            .service(tournament::get_knockout)
            .service(tournament::get_leaderboard)
            .service(tournament::get_teams)
            .service(tournament::get_groups)
            .service(tournament::get_players)
            .service(tournament::get_matches)
            .service(tournament::get_match_detail),
    );

    // Prediction game (require authentication; submission is fan-only)
    cfg.service(
        web::scope("/predictions")
            .wrap(AuthMiddleware)
            .service(predictions::submit_prediction)
            .service(predictions::my_predictions)
            .service(predictions::prediction_leaderboard),
    );

    // News feed (require authentication)
    cfg.service(
        web::scope("/news")
            .wrap(AuthMiddleware)
            .service(news::get_news_feed)
            .service(news::get_unread_count)
            .service(news::mark_news_seen),
    );

    // Privileged writes, all behind the admin guard
    admin::init_admin_routes(cfg);
}
