use crate::db::Db;
use crate::error::AppError;
use crate::feed::RosterFeed;
use crate::models::player::{PlayerSubmission, RosterQuery};
use crate::services::players as service;
use crate::sort::{Direction, SortConfig};
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn get_roster(
    feed: web::types::State<Arc<RosterFeed>>,
    query: web::types::Query<RosterQuery>,
) -> Result<HttpResponse, AppError> {
    let state = query.sort.map(|field| SortConfig {
        field,
        direction: query.dir.unwrap_or(Direction::Ascending),
    });
    let entries = service::list_players(&feed, state);
    Ok(HttpResponse::Ok().json(&entries))
}

pub async fn add_player(
    db: web::types::State<Arc<Db>>,
    feed: web::types::State<Arc<RosterFeed>>,
    body: web::types::Json<PlayerSubmission>,
) -> Result<HttpResponse, AppError> {
    let created = service::add_player(&db, &feed, body.into_inner())?;
    Ok(HttpResponse::Ok().json(&created))
}

pub async fn update_player(
    db: web::types::State<Arc<Db>>,
    feed: web::types::State<Arc<RosterFeed>>,
    path: web::types::Path<String>,
    body: web::types::Json<PlayerSubmission>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service::update_player(&db, &feed, &id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(&serde_json::json!({ "id": id })))
}

pub async fn delete_player(
    db: web::types::State<Arc<Db>>,
    feed: web::types::State<Arc<RosterFeed>>,
    path: web::types::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    service::delete_player(&db, &feed, &id)?;
    Ok(HttpResponse::Ok().json(&serde_json::json!({ "id": id })))
}
