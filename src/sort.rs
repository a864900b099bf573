//! Tri-state column sorting for the roster table. Clicking a header walks
//! ascending -> descending -> back to insertion order; clicking a different
//! header starts over at ascending.

use crate::models::player::Player;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    JerseyName,
    Number,
    Size,
    Position,
}

impl SortField {
    fn value_of<'a>(&self, player: &'a Player) -> &'a str {
        match self {
            SortField::Name => &player.name,
            SortField::JerseyName => &player.jersey_name,
            SortField::Number => &player.number,
            SortField::Size => player.size.as_str(),
            SortField::Position => &player.position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: Direction,
}

pub type SortState = Option<SortConfig>;

pub fn toggle(state: SortState, field: SortField) -> SortState {
    match state {
        Some(cfg) if cfg.field == field && cfg.direction == Direction::Ascending => {
            Some(SortConfig {
                field,
                direction: Direction::Descending,
            })
        }
        Some(cfg) if cfg.field == field => None,
        _ => Some(SortConfig {
            field,
            direction: Direction::Ascending,
        }),
    }
}

/// Ordered copy of the snapshot; the input is never reordered in place.
/// Every column compares as text, jersey numbers included, so "10" lands
/// before "2". Ties keep their snapshot order (stable sort).
pub fn sort_players(players: &[Player], state: SortState) -> Vec<Player> {
    let mut sorted = players.to_vec();
    if let Some(cfg) = state {
        sorted.sort_by(|a, b| {
            let ord = cfg.field.value_of(a).cmp(cfg.field.value_of(b));
            match cfg.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
    }
    sorted
}
