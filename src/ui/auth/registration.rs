use crate::api::Registration;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::notice::{self, Notice};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationFormState {
    pub registration: Registration,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl UiState for RegistrationFormState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Username,
    Password,
    Email,
    Birthday,
}

#[derive(Debug, Clone)]
pub enum RegistrationFormIntent {
    SetField {
        field: RegistrationField,
        value: String,
    },
    Submitted,
    Succeeded,
    /// `detail` is the backend's error payload, shown as-is when present.
    Failed { detail: Option<String> },
}

impl Intent for RegistrationFormIntent {}

pub struct RegistrationFormReducer;

impl Reducer for RegistrationFormReducer {
    type State = RegistrationFormState;
    type Intent = RegistrationFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegistrationFormIntent::SetField { field, value } => {
                let mut registration = state.registration;
                match field {
                    RegistrationField::Username => registration.username = value,
                    RegistrationField::Password => registration.password = value,
                    RegistrationField::Email => registration.email = value,
                    RegistrationField::Birthday => registration.birthday = value,
                }
                RegistrationFormState {
                    registration,
                    ..state
                }
            }
            RegistrationFormIntent::Submitted => RegistrationFormState {
                submitting: true,
                notice: None,
                ..state
            },
            RegistrationFormIntent::Succeeded => RegistrationFormState {
                submitting: false,
                notice: Some(Notice::success(notice::REGISTRATION_SUCCEEDED)),
                ..state
            },
            RegistrationFormIntent::Failed { detail } => {
                let reason =
                    detail.unwrap_or_else(|| crate::api::GENERIC_FAILURE_MESSAGE.to_string());
                RegistrationFormState {
                    submitting: false,
                    notice: Some(Notice::failure(format!(
                        "{}{}",
                        notice::REGISTRATION_FAILED_PREFIX,
                        reason
                    ))),
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_one_field() {
        let state = RegistrationFormReducer::reduce(
            RegistrationFormState::default(),
            RegistrationFormIntent::SetField {
                field: RegistrationField::Birthday,
                value: "1990-01-01".into(),
            },
        );
        assert_eq!(state.registration.birthday, "1990-01-01");
        assert!(state.registration.username.is_empty());
    }

    #[test]
    fn failure_shows_server_detail_verbatim() {
        let state = RegistrationFormReducer::reduce(
            RegistrationFormState::default(),
            RegistrationFormIntent::Failed {
                detail: Some("Username alice already exists".into()),
            },
        );
        assert_eq!(
            state.notice.unwrap().text,
            "Registration failed: Username alice already exists"
        );
    }

    #[test]
    fn failure_without_detail_uses_generic_text() {
        let state = RegistrationFormReducer::reduce(
            RegistrationFormState::default(),
            RegistrationFormIntent::Failed { detail: None },
        );
        assert_eq!(
            state.notice.unwrap().text,
            format!("Registration failed: {}", crate::api::GENERIC_FAILURE_MESSAGE)
        );
    }
}
