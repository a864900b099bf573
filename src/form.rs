//! Registration dialog state machine. All of the transient UI state lives
//! in one struct owned by the controller: the field values being typed, the
//! edit target, the pending-delete marker, the sort state, and whatever
//! error messages the last submit attempt produced.

use crate::error::FieldErrors;
use crate::models::player::{Player, PlayerSubmission, ValidatedPlayer};
use crate::sort::{self, SortField, SortState};
use crate::validation;

/// What a successful submit asks the store to do.
#[derive(Debug, PartialEq)]
pub enum FormSubmit {
    Create(ValidatedPlayer),
    Update(String, ValidatedPlayer),
}

#[derive(Debug, Default)]
pub struct RosterForm {
    fields: PlayerSubmission,
    jersey_edited: bool,
    editing: Option<String>,
    dialog_open: bool,
    pending_delete: Option<String>,
    sort: SortState,
    field_errors: FieldErrors,
    duplicate_error: Option<String>,
}

impl RosterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with blank fields for a new registration.
    pub fn open_blank(&mut self) {
        self.reset();
        self.dialog_open = true;
    }

    /// Open the dialog pre-filled from an existing record.
    pub fn open_edit(&mut self, player: &Player) {
        self.reset();
        self.fields = PlayerSubmission {
            name: player.name.clone(),
            jersey_name: player.jersey_name.clone(),
            number: player.number.clone(),
            size: player.size.as_str().to_string(),
            position: player.position.clone(),
            notes: player.notes.clone().unwrap_or_default(),
        };
        // A stored jersey name that differs from the derived default was
        // chosen by hand; renaming the player must not regenerate it.
        self.jersey_edited = validation::jersey_name_from_name(&player.name).as_deref()
            != Some(player.jersey_name.as_str());
        self.editing = Some(player.id.clone());
        self.dialog_open = true;
    }

    pub fn set_name(&mut self, name: &str) {
        self.fields.name = name.to_string();
        if !self.jersey_edited {
            if let Some(derived) = validation::jersey_name_from_name(name) {
                self.fields.jersey_name = derived;
            }
        }
    }

    /// A direct edit wins over the auto-filled default for good.
    pub fn set_jersey_name(&mut self, jersey_name: &str) {
        self.fields.jersey_name = jersey_name.to_string();
        self.jersey_edited = true;
    }

    pub fn set_number(&mut self, number: &str) {
        self.fields.number = number.to_string();
    }

    pub fn set_size(&mut self, size: &str) {
        self.fields.size = size.to_string();
    }

    pub fn set_position(&mut self, position: &str) {
        self.fields.position = position.to_string();
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.fields.notes = notes.to_string();
    }

    pub fn fields(&self) -> &PlayerSubmission {
        &self.fields
    }

    pub fn is_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn duplicate_error(&self) -> Option<&str> {
        self.duplicate_error.as_deref()
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = sort::toggle(self.sort, field);
    }

    /// Arm the delete confirmation for a record. Nothing is sent anywhere
    /// until the confirmation comes back.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Dismissing the confirmation only clears the marker.
    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirming hands the id to the caller for the actual delete call.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn close(&mut self) {
        self.reset();
    }

    /// Run the submission through validation and the duplicate guard against
    /// the given snapshot. On failure the dialog stays open with the typed
    /// input and the error messages in place; on success the form resets and
    /// the caller gets the store operation to perform.
    pub fn submit(&mut self, roster: &[Player]) -> Option<FormSubmit> {
        self.duplicate_error = None;
        let player = match validation::validate_player(&self.fields) {
            Ok(player) => {
                self.field_errors.clear();
                player
            }
            Err(errors) => {
                self.field_errors = errors;
                return None;
            }
        };

        if validation::duplicate_number(roster, &player.number, self.editing.as_deref()).is_some() {
            self.duplicate_error =
                Some(format!("Jersey number {} is already taken", player.number));
            return None;
        }

        let submit = match self.editing.take() {
            Some(id) => FormSubmit::Update(id, player),
            None => FormSubmit::Create(player),
        };
        self.reset();
        Some(submit)
    }

    fn reset(&mut self) {
        self.fields = PlayerSubmission::default();
        self.jersey_edited = false;
        self.editing = None;
        self.dialog_open = false;
        self.field_errors.clear();
        self.duplicate_error = None;
    }
}
