//! Transient notifications shown after an action completes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text: text.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// Fixed notification texts.
pub const MOVIES_LOAD_FAILED: &str = "Failed to load movies.";
pub const FAVORITE_ADDED: &str = "Added to favorites!";
pub const FAVORITE_ADD_FAILED: &str = "Failed to add favorite.";
pub const FAVORITE_REMOVED: &str = "Removed from favorites!";
pub const FAVORITE_REMOVE_FAILED: &str = "Failed to remove favorite.";
pub const FAVORITES_LOAD_FAILED: &str = "Failed to load favorites.";
pub const PROFILE_LOAD_FAILED: &str = "Could not fetch user profile.";
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile.";
pub const PROFILE_DELETED: &str = "Profile deleted";
pub const PROFILE_DELETE_FAILED: &str = "Failed to delete profile.";
pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";
pub const REGISTRATION_FAILED_PREFIX: &str = "Registration failed: ";
