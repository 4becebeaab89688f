//! Errors surfaced by `App` actions.
//!
//! Views never show these directly; they show the notice the action left
//! in their state. The error is for callers that need the cause (the CLI
//! exit status, logs, tests).

use thiserror::Error;

use crate::api::ApiError;
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The action needs a logged-in user.
    #[error("Not logged in")]
    NotAuthenticated,

    /// The action refers to a movie the current view does not hold.
    #[error("Unknown movie '{0}'")]
    UnknownMovie(String),

    /// Nothing to save: the profile is not being edited.
    #[error("Profile is not being edited")]
    NotEditing,
}
