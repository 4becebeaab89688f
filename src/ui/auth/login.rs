use crate::api::Credentials;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::notice::{self, Notice};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormState {
    pub credentials: Credentials,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl UiState for LoginFormState {}

#[derive(Debug, Clone)]
pub enum LoginFormIntent {
    SetUsername(String),
    SetPassword(String),
    Submitted,
    /// Session has been stored by the app.
    Succeeded,
    Failed,
}

impl Intent for LoginFormIntent {}

pub struct LoginFormReducer;

impl Reducer for LoginFormReducer {
    type State = LoginFormState;
    type Intent = LoginFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginFormIntent::SetUsername(username) => LoginFormState {
                credentials: Credentials {
                    username,
                    ..state.credentials
                },
                ..state
            },
            LoginFormIntent::SetPassword(password) => LoginFormState {
                credentials: Credentials {
                    password,
                    ..state.credentials
                },
                ..state
            },
            LoginFormIntent::Submitted => LoginFormState {
                submitting: true,
                notice: None,
                ..state
            },
            LoginFormIntent::Succeeded => LoginFormState {
                submitting: false,
                notice: Some(Notice::success(notice::LOGIN_SUCCEEDED)),
                ..state
            },
            LoginFormIntent::Failed => LoginFormState {
                submitting: false,
                notice: Some(Notice::failure(notice::LOGIN_FAILED)),
                ..state
            },
        }
    }
}
