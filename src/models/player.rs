use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::sort::{Direction, SortField};

/// Jersey size. Stored as its display text so the table sorts it the same
/// way as every other column (plain string comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl FromStr for Size {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "XS" => Ok(Size::XS),
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::XL),
            "XXL" => Ok(Size::XXL),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Size {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Size {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|()| FromSqlError::InvalidType)
    }
}

/// A registered player as stored and broadcast in roster snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub jersey_name: String,
    pub number: String,
    pub size: Size,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

/// Raw form submission. Every field arrives as a string (including `size`)
/// so a bad value surfaces as a field error instead of a 400 on the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerSubmission {
    pub name: String,
    pub jersey_name: String,
    pub number: String,
    pub size: String,
    pub position: String,
    pub notes: String,
}

impl Default for PlayerSubmission {
    fn default() -> Self {
        PlayerSubmission {
            name: String::new(),
            jersey_name: String::new(),
            number: String::new(),
            size: "M".to_string(),
            position: String::new(),
            notes: String::new(),
        }
    }
}

/// A submission that passed every validation rule, with `size` parsed and
/// empty notes normalized away.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPlayer {
    pub name: String,
    pub jersey_name: String,
    pub number: String,
    pub size: Size,
    pub position: String,
    pub notes: Option<String>,
}

/// Partial update for the store. `None` fields are left untouched; the
/// outer/inner option on `notes` distinguishes "keep" from "clear".
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub jersey_name: Option<String>,
    pub number: Option<String>,
    pub size: Option<Size>,
    pub position: Option<String>,
    pub notes: Option<Option<String>>,
}

impl From<ValidatedPlayer> for PlayerPatch {
    fn from(p: ValidatedPlayer) -> Self {
        PlayerPatch {
            name: Some(p.name),
            jersey_name: Some(p.jersey_name),
            number: Some(p.number),
            size: Some(p.size),
            position: Some(p.position),
            notes: Some(p.notes),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerCreated {
    pub id: String,
}

/// Table row for display: the stored record plus the short position code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub jersey_name: String,
    pub number: String,
    pub size: Size,
    pub position: String,
    pub position_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub sort: Option<SortField>,
    pub dir: Option<Direction>,
}
