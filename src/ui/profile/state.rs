use crate::api::User;
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    /// Last profile the backend confirmed.
    pub confirmed: Option<User>,
    /// Working copy; `Some` while editing.
    pub draft: Option<User>,
    pub notice: Option<Notice>,
    /// Account is gone; the app routes back to the landing screen.
    pub deleted: bool,
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Profile to render: the working copy while editing, else the confirmed one.
    pub fn displayed(&self) -> Option<&User> {
        self.draft.as_ref().or(self.confirmed.as_ref())
    }
}
