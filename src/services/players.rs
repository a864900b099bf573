use crate::db::Db;
use crate::error::AppError;
use crate::feed::RosterFeed;
use crate::models::player::*;
use crate::sort::{self, SortState};
use crate::validation;
use chrono::Utc;
use rusqlite::params;
use uuid::Uuid;

// Display-only shorthand for the table; unmapped positions pass through.
const POSITION_CODES: &[(&str, &str)] = &[
    ("Pitcher", "P"),
    ("Catcher", "C"),
    ("First Base", "1B"),
    ("Second Base", "2B"),
    ("Third Base", "3B"),
    ("Shortstop", "SS"),
    ("Left Field", "LF"),
    ("Center Field", "CF"),
    ("Right Field", "RF"),
    ("Designated Hitter", "DH"),
    ("Utility", "UTIL"),
    ("Fan", "FAN"),
];

pub fn position_code(position: &str) -> &str {
    POSITION_CODES
        .iter()
        .find(|(full, _)| *full == position)
        .map(|(_, code)| *code)
        .unwrap_or(position)
}

/// Current snapshot ordered by the sort state, dressed up for the table.
pub fn list_players(feed: &RosterFeed, state: SortState) -> Vec<RosterEntry> {
    sort::sort_players(&feed.current(), state)
        .into_iter()
        .map(|p| {
            let position_code = position_code(&p.position).to_string();
            RosterEntry {
                id: p.id,
                name: p.name,
                jersey_name: p.jersey_name,
                number: p.number,
                size: p.size,
                position: p.position,
                position_code,
                notes: p.notes,
                created_at: p.created_at,
            }
        })
        .collect()
}

pub fn add_player(
    db: &Db,
    feed: &RosterFeed,
    req: PlayerSubmission,
) -> Result<PlayerCreated, AppError> {
    let player = validation::validate_player(&req).map_err(AppError::Validation)?;

    // Guard against the last published snapshot, not the table itself.
    if validation::duplicate_number(&feed.current(), &player.number, None).is_some() {
        return Err(AppError::Conflict(format!(
            "Jersey number {} is already taken",
            player.number
        )));
    }

    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO players (id, name, jersey_name, number, size, position, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                id,
                player.name,
                player.jersey_name,
                player.number,
                player.size,
                player.position,
                player.notes,
                created_at,
            ],
        )
    })?;

    refresh(db, feed)?;
    Ok(PlayerCreated { id })
}

pub fn update_player(
    db: &Db,
    feed: &RosterFeed,
    id: &str,
    req: PlayerSubmission,
) -> Result<(), AppError> {
    let player = validation::validate_player(&req).map_err(AppError::Validation)?;

    if validation::duplicate_number(&feed.current(), &player.number, Some(id)).is_some() {
        return Err(AppError::Conflict(format!(
            "Jersey number {} is already taken",
            player.number
        )));
    }

    patch_player(db, id, PlayerPatch::from(player))?;
    refresh(db, feed)
}

/// Store-level partial patch: only the provided fields change. Zero rows
/// touched means the id is gone.
pub fn patch_player(db: &Db, id: &str, patch: PlayerPatch) -> Result<(), AppError> {
    let mut sets: Vec<String> = Vec::new();
    let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    let mut set = |column: &str, value: Box<dyn rusqlite::types::ToSql>| {
        values.push(value);
        sets.push(format!("{} = ?{}", column, values.len()));
    };

    if let Some(name) = patch.name {
        set("name", Box::new(name));
    }
    if let Some(jersey_name) = patch.jersey_name {
        set("jersey_name", Box::new(jersey_name));
    }
    if let Some(number) = patch.number {
        set("number", Box::new(number));
    }
    if let Some(size) = patch.size {
        set("size", Box::new(size));
    }
    if let Some(position) = patch.position {
        set("position", Box::new(position));
    }
    if let Some(notes) = patch.notes {
        set("notes", Box::new(notes));
    }

    if sets.is_empty() {
        return Ok(());
    }

    values.push(Box::new(id.to_string()));
    let sql = format!(
        "UPDATE players SET {} WHERE id = ?{}",
        sets.join(", "),
        values.len()
    );

    let changed = db.with_conn(|conn| {
        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            values.iter().map(|v| v.as_ref()).collect();
        conn.execute(&sql, params_refs.as_slice())
    })?;

    if changed == 0 {
        return Err(AppError::NotFound(format!("No player with id {}", id)));
    }
    Ok(())
}

pub fn delete_player(db: &Db, feed: &RosterFeed, id: &str) -> Result<(), AppError> {
    let removed = db.with_conn(|conn| {
        conn.execute("DELETE FROM players WHERE id = ?1", params![id])
    })?;
    if removed == 0 {
        return Err(AppError::NotFound(format!("No player with id {}", id)));
    }
    refresh(db, feed)
}

/// Full table in insertion order; the unsorted view shows registrations as
/// they arrived.
pub fn query_players(db: &Db) -> Result<Vec<Player>, AppError> {
    Ok(db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, jersey_name, number, size, position, notes, created_at
             FROM players ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Player {
                id: row.get(0)?,
                name: row.get(1)?,
                jersey_name: row.get(2)?,
                number: row.get(3)?,
                size: row.get(4)?,
                position: row.get(5)?,
                notes: row.get(6)?,
                created_at: row.get(7)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    })?)
}

fn refresh(db: &Db, feed: &RosterFeed) -> Result<(), AppError> {
    feed.publish(query_players(db)?);
    Ok(())
}
