use crate::error::FieldErrors;
use crate::models::player::{Player, PlayerSubmission, Size, ValidatedPlayer};

pub const JERSEY_NAME_MAX: usize = 15;
const NAME_MIN: usize = 2;

/// Checks every field rule and collects all failures, so a form can render
/// the complete set of messages in one pass. On success the submission comes
/// back normalized: `size` parsed and blank notes dropped.
pub fn validate_player(sub: &PlayerSubmission) -> Result<ValidatedPlayer, FieldErrors> {
    let mut errors = FieldErrors::new();

    if sub.name.chars().count() < NAME_MIN {
        errors.insert("name", "Name must be at least 2 characters".to_string());
    } else if !sub.name.trim().contains(' ') {
        errors.insert("name", "Please enter both first and last name".to_string());
    }

    if sub.jersey_name.is_empty() {
        errors.insert("jerseyName", "Jersey name is required".to_string());
    } else if sub.jersey_name.chars().count() > JERSEY_NAME_MAX {
        errors.insert(
            "jerseyName",
            "Jersey name must be 15 characters or less".to_string(),
        );
    }

    if !is_jersey_number(&sub.number) {
        errors.insert("number", "Number must be 1-2 digits".to_string());
    }

    let size = match sub.size.parse::<Size>() {
        Ok(size) => Some(size),
        Err(()) => {
            errors.insert("size", "Please select a valid size".to_string());
            None
        }
    };

    if sub.position.is_empty() {
        errors.insert("position", "Position is required".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let notes = sub.notes.trim();
    Ok(ValidatedPlayer {
        name: sub.name.clone(),
        jersey_name: sub.jersey_name.clone(),
        number: sub.number.clone(),
        size: size.unwrap(), // a parse failure was recorded above
        position: sub.position.clone(),
        notes: if notes.is_empty() {
            None
        } else {
            Some(sub.notes.clone())
        },
    })
}

/// Exactly one or two decimal digits.
pub fn is_jersey_number(number: &str) -> bool {
    (1..=2).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit())
}

/// Default jersey name: the uppercased last whitespace token of the full
/// name. `None` until the name has an interior space to split on.
pub fn jersey_name_from_name(name: &str) -> Option<String> {
    if !name.contains(' ') {
        return None;
    }
    name.split_whitespace().last().map(str::to_uppercase)
}

/// Scans the snapshot for another record already wearing `number`. Exact
/// string match: "07" and "7" are different jerseys. When editing, the
/// record's own number is not a conflict.
///
/// Advisory only: the snapshot may be stale and the store carries no unique
/// constraint, so concurrent writers can still both land the same number.
pub fn duplicate_number<'a>(
    roster: &'a [Player],
    number: &str,
    editing: Option<&str>,
) -> Option<&'a Player> {
    roster
        .iter()
        .find(|p| p.number == number && editing != Some(p.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> PlayerSubmission {
        PlayerSubmission {
            name: "Maria Lopez".to_string(),
            jersey_name: "LOPEZ".to_string(),
            number: "7".to_string(),
            size: "M".to_string(),
            position: "Shortstop".to_string(),
            notes: String::new(),
        }
    }

    fn player(id: &str, number: &str) -> Player {
        Player {
            id: id.to_string(),
            name: "Maria Lopez".to_string(),
            jersey_name: "LOPEZ".to_string(),
            number: number.to_string(),
            size: Size::M,
            position: "Shortstop".to_string(),
            notes: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn valid_submission_normalizes() {
        let valid = validate_player(&submission()).unwrap();
        assert_eq!(valid.size, Size::M);
        assert_eq!(valid.notes, None);
    }

    #[test]
    fn single_token_name_rejected() {
        for name in ["Maria", "  Maria  ", "Cher"] {
            let mut sub = submission();
            sub.name = name.to_string();
            let errors = validate_player(&sub).unwrap_err();
            assert!(errors.contains_key("name"), "{:?} accepted", name);
        }
    }

    #[test]
    fn short_name_rejected() {
        let mut sub = submission();
        sub.name = "M".to_string();
        assert!(validate_player(&sub).unwrap_err().contains_key("name"));
    }

    #[test]
    fn jersey_name_bounds() {
        let mut sub = submission();
        sub.jersey_name = String::new();
        assert!(validate_player(&sub)
            .unwrap_err()
            .contains_key("jerseyName"));

        sub.jersey_name = "A".repeat(16);
        assert!(validate_player(&sub)
            .unwrap_err()
            .contains_key("jerseyName"));

        sub.jersey_name = "A".repeat(15);
        assert!(validate_player(&sub).is_ok());
    }

    #[test]
    fn number_pattern() {
        for good in ["0", "7", "07", "99"] {
            assert!(is_jersey_number(good), "{} rejected", good);
        }
        for bad in ["", "100", "7a", "a", " 7", "4.5"] {
            assert!(!is_jersey_number(bad), "{} accepted", bad);
        }
    }

    #[test]
    fn unknown_size_rejected() {
        let mut sub = submission();
        sub.size = "XXXL".to_string();
        assert!(validate_player(&sub).unwrap_err().contains_key("size"));
    }

    #[test]
    fn empty_position_rejected() {
        let mut sub = submission();
        sub.position = String::new();
        assert!(validate_player(&sub).unwrap_err().contains_key("position"));
    }

    #[test]
    fn all_failures_reported_together() {
        let sub = PlayerSubmission {
            name: String::new(),
            jersey_name: String::new(),
            number: String::new(),
            size: "??".to_string(),
            position: String::new(),
            notes: String::new(),
        };
        let errors = validate_player(&sub).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn notes_kept_when_present() {
        let mut sub = submission();
        sub.notes = "lefty".to_string();
        assert_eq!(validate_player(&sub).unwrap().notes.as_deref(), Some("lefty"));
    }

    #[test]
    fn jersey_name_derivation() {
        assert_eq!(jersey_name_from_name("Maria Lopez").as_deref(), Some("LOPEZ"));
        assert_eq!(
            jersey_name_from_name("Ana de la Cruz").as_deref(),
            Some("CRUZ")
        );
        assert_eq!(jersey_name_from_name("Maria"), None);
    }

    #[test]
    fn duplicate_blocks_create() {
        let roster = vec![player("a", "7")];
        assert!(duplicate_number(&roster, "7", None).is_some());
    }

    #[test]
    fn own_number_is_not_a_conflict_when_editing() {
        let roster = vec![player("a", "7")];
        assert!(duplicate_number(&roster, "7", Some("a")).is_none());
        assert!(duplicate_number(&roster, "7", Some("b")).is_some());
    }

    #[test]
    fn padded_number_is_a_different_jersey() {
        let roster = vec![player("a", "7")];
        assert!(duplicate_number(&roster, "07", None).is_none());
    }
}
