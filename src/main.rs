mod db;
mod error;
mod feed;
mod form;
mod handlers;
mod models;
mod services;
mod sort;
mod validation;

use db::Db;
use feed::RosterFeed;
use ntex::web;
use ntex_cors::Cors;
use std::sync::Arc;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "roster.db".into());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let db = Arc::new(Db::open(&db_path).expect("Failed to open database"));
    let feed = Arc::new(RosterFeed::new(
        services::players::query_players(&db).expect("Failed to load roster"),
    ));

    println!("Roster server starting on {}:{}", host, port);

    web::HttpServer::new(move || {
        web::App::new()
            .state(db.clone())
            .state(feed.clone())
            .wrap(
                Cors::new()
                    .allowed_origin("*")
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            // Health check
            .route("/api/health", web::get().to(health))
            // Roster
            .route("/api/players", web::get().to(handlers::players::get_roster))
            .route("/api/players", web::post().to(handlers::players::add_player))
            .route("/api/players/{id}", web::put().to(handlers::players::update_player))
            .route("/api/players/{id}", web::delete().to(handlers::players::delete_player))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

async fn health() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
