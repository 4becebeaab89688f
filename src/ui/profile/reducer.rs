use crate::api::User;
use crate::ui::mvi::Reducer;
use crate::ui::notice::{self, Notice};
use crate::ui::profile::intent::{ProfileField, ProfileIntent};
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Loaded(user) => ProfileState {
                confirmed: Some(user),
                draft: None,
                notice: None,
                deleted: false,
            },
            ProfileIntent::LoadFailed => ProfileState {
                notice: Some(Notice::failure(notice::PROFILE_LOAD_FAILED)),
                ..state
            },
            ProfileIntent::BeginEdit => {
                if state.confirmed.is_none() {
                    return state;
                }
                ProfileState {
                    draft: state.confirmed.clone(),
                    ..state
                }
            }
            ProfileIntent::EditField { field, value } => {
                let mut state = state;
                if let Some(draft) = state.draft.as_mut() {
                    apply_field(draft, field, value);
                }
                state
            }
            ProfileIntent::CancelEdit | ProfileIntent::SaveRequested => ProfileState {
                draft: None,
                ..state
            },
            ProfileIntent::Saved(user) => ProfileState {
                confirmed: Some(user),
                notice: Some(Notice::success(notice::PROFILE_UPDATED)),
                ..state
            },
            ProfileIntent::SaveFailed => ProfileState {
                notice: Some(Notice::failure(notice::PROFILE_UPDATE_FAILED)),
                ..state
            },
            ProfileIntent::Deleted => ProfileState {
                confirmed: None,
                draft: None,
                notice: Some(Notice::success(notice::PROFILE_DELETED)),
                deleted: true,
            },
            ProfileIntent::DeleteFailed => ProfileState {
                notice: Some(Notice::failure(notice::PROFILE_DELETE_FAILED)),
                ..state
            },
        }
    }
}

fn apply_field(user: &mut User, field: ProfileField, value: String) {
    match field {
        ProfileField::Username => user.username = value,
        ProfileField::Password => user.password = Some(value),
        ProfileField::Email => user.email = value,
        ProfileField::Birthday => user.birthday = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: "123".to_string(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            ..User::default()
        }
    }

    fn editing() -> ProfileState {
        let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::Loaded(alice()));
        ProfileReducer::reduce(state, ProfileIntent::BeginEdit)
    }

    #[test]
    fn begin_edit_copies_confirmed() {
        let state = editing();
        assert!(state.is_editing());
        assert_eq!(state.draft, state.confirmed);
    }

    #[test]
    fn begin_edit_without_profile_is_noop() {
        let state = ProfileReducer::reduce(ProfileState::default(), ProfileIntent::BeginEdit);
        assert!(!state.is_editing());
    }

    #[test]
    fn edits_touch_only_the_draft() {
        let state = ProfileReducer::reduce(
            editing(),
            ProfileIntent::EditField {
                field: ProfileField::Email,
                value: "new@example.com".to_string(),
            },
        );
        assert_eq!(state.draft.as_ref().unwrap().email, "new@example.com");
        assert_eq!(state.confirmed.as_ref().unwrap().email, "alice@example.com");
        assert_eq!(state.displayed().unwrap().email, "new@example.com");
    }

    #[test]
    fn cancel_restores_confirmed_display() {
        let state = ProfileReducer::reduce(
            editing(),
            ProfileIntent::EditField {
                field: ProfileField::Username,
                value: "mallory".to_string(),
            },
        );
        let state = ProfileReducer::reduce(state, ProfileIntent::CancelEdit);
        assert!(!state.is_editing());
        assert_eq!(state.displayed().unwrap().username, "alice");
    }

    #[test]
    fn saved_replaces_confirmed_with_backend_copy() {
        let state = ProfileReducer::reduce(editing(), ProfileIntent::SaveRequested);
        let mut server = alice();
        server.email = "server@example.com".to_string();
        let state = ProfileReducer::reduce(state, ProfileIntent::Saved(server.clone()));
        assert_eq!(state.confirmed, Some(server));
        assert!(!state.is_editing());
    }

    #[test]
    fn save_failure_keeps_confirmed() {
        let state = ProfileReducer::reduce(editing(), ProfileIntent::SaveRequested);
        let state = ProfileReducer::reduce(state, ProfileIntent::SaveFailed);
        assert_eq!(state.confirmed, Some(alice()));
        assert_eq!(
            state.notice.map(|n| n.text),
            Some(notice::PROFILE_UPDATE_FAILED.to_string())
        );
    }

    #[test]
    fn deleted_drops_profile() {
        let state = ProfileReducer::reduce(editing(), ProfileIntent::Deleted);
        assert!(state.deleted);
        assert!(state.displayed().is_none());
    }
}
