use actix_web::web;

use crate::handlers::admin::{
    match_handler, news_handler, player_handler, team_handler, user_handler,
};
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // User management routes
            .service(
                web::resource("/users")
                    .route(web::get().to(user_handler::get_users))
            )
            .service(
                web::resource("/users/{id}/status")
                    .route(web::patch().to(user_handler::update_user_status))
            )

            // Team and group management routes
            .service(
                web::resource("/teams")
                    .route(web::get().to(team_handler::get_teams))
                    .route(web::post().to(team_handler::create_team))
            )
            .service(
                web::resource("/teams/{id}")
                    .route(web::delete().to(team_handler::delete_team))
            )
            .service(
                web::resource("/teams/{id}/group")
                    .route(web::put().to(team_handler::assign_team_group))
            )
            .service(
                web::resource("/teams/{id}/players")
                    .route(web::post().to(player_handler::add_team_player))
            )
            .service(
                web::resource("/teams/{team_id}/players/{player_id}")
                    .route(web::delete().to(player_handler::remove_team_player))
            )
            .service(
                web::resource("/groups")
                    .route(web::post().to(team_handler::create_group))
            )
            .service(
                web::resource("/groups/{id}")
                    .route(web::delete().to(team_handler::delete_group))
            )

            // Roster management routes
            .service(
                web::resource("/players")
                    .route(web::post().to(player_handler::create_player))
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::delete().to(player_handler::delete_player))
            )
            .service(
                web::resource("/players/{id}/stats")
                    .route(web::patch().to(player_handler::update_player_stats))
            )

            // Match and goal ledger routes
            .service(
                web::resource("/matches")
                    .route(web::post().to(match_handler::create_match))
            )
            .service(
                web::resource("/matches/{id}")
                    .route(web::patch().to(match_handler::update_match))
                    .route(web::delete().to(match_handler::delete_match))
            )
            .service(
                web::resource("/matches/{id}/goals")
                    .route(web::post().to(match_handler::add_goal))
            )
            .service(
                web::resource("/goals/{id}")
                    .route(web::delete().to(match_handler::delete_goal))
            )

            // News authoring routes
            .service(
                web::resource("/news")
                    .route(web::post().to(news_handler::create_news_post))
            )
            .service(
                web::resource("/news/media")
                    .route(web::post().to(news_handler::upload_news_media))
            )
            .service(
                web::resource("/news/{id}")
                    .route(web::delete().to(news_handler::delete_news_post))
            )
    );
}
