//! Top-level navigation between views.

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing screen with login and registration.
    #[default]
    Welcome,
    Movies,
    Favorites,
    Profile,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Welcome)
    }

    /// Where a request for `self` actually lands given the session.
    pub fn guard(self, session: &SessionStore) -> Route {
        if self.requires_auth() && !session.is_authenticated() {
            tracing::debug!(requested = ?self, "not authenticated, routing to welcome");
            Route::Welcome
        } else {
            self
        }
    }
}
