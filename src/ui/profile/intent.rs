use crate::api::User;
use crate::ui::mvi::Intent;

/// Editable profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    Password,
    Email,
    Birthday,
}

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Loaded(User),
    LoadFailed,
    /// Copy the confirmed profile into a fresh working copy.
    BeginEdit,
    EditField { field: ProfileField, value: String },
    /// Drop the working copy; the confirmed profile is shown again.
    CancelEdit,
    /// Working copy has been handed to the backend; editing ends.
    SaveRequested,
    Saved(User),
    SaveFailed,
    Deleted,
    DeleteFailed,
}

impl Intent for ProfileIntent {}
