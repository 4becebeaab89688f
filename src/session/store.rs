use std::sync::Arc;

use parking_lot::RwLock;

use super::persistence::{PersistedSession, SessionError, SessionPersistence};
use super::secure::SecureString;

/// Snapshot of the current login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<SecureString>,
    pub username: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    fn from_persisted(persisted: PersistedSession) -> Self {
        if !persisted.is_complete() {
            return Self::default();
        }
        Self {
            token: persisted.token.map(SecureString::new),
            username: persisted.username,
            user_id: persisted.user_id,
        }
    }

    fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.as_ref().map(|t| t.expose().to_string()),
            username: self.username.clone(),
            user_id: self.user_id.clone(),
        }
    }
}

/// Shared handle to the session, injected into every component that
/// needs to authenticate or address the current user.
///
/// Token, username and user id are always written together and cleared
/// together; the persistence layer sees one write per change.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    persistence: Arc<dyn SessionPersistence>,
}

impl SessionStore {
    /// Open a store over `persistence`, restoring any complete saved session.
    pub fn open(persistence: Arc<dyn SessionPersistence>) -> Result<Self, SessionError> {
        let session = persistence
            .load()?
            .map(Session::from_persisted)
            .unwrap_or_default();
        Ok(Self {
            inner: Arc::new(RwLock::new(session)),
            persistence,
        })
    }

    /// A store that forgets everything when the process exits.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Session::default())),
            persistence: Arc::new(super::persistence::MemoryPersistence::new()),
        }
    }

    pub fn set(
        &self,
        token: impl Into<String>,
        username: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<(), SessionError> {
        let next = Session {
            token: Some(SecureString::new(token.into())),
            username: Some(username.into()),
            user_id: Some(user_id.into()),
        };

        let mut guard = self.inner.write();
        self.persistence.save(&next.to_persisted())?;
        *guard = next;
        tracing::debug!(username = ?guard.username, "session stored");
        Ok(())
    }

    /// Follow a username change the backend already accepted.
    ///
    /// The in-memory session is updated even if persistence fails, so later
    /// calls address the user by the new name. Does nothing when logged out.
    pub fn rename(&self, username: impl Into<String>) -> Result<(), SessionError> {
        let mut guard = self.inner.write();
        if guard.token.is_none() {
            return Ok(());
        }
        guard.username = Some(username.into());
        let result = self.persistence.save(&guard.to_persisted());
        tracing::debug!(username = ?guard.username, "session renamed");
        result
    }

    /// True iff a token is held. Expiry is only discovered by the backend.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().token.is_some()
    }

    /// Drop the whole session, in memory and in persistence.
    ///
    /// The in-memory session is cleared even if persistence fails.
    pub fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self.inner.write();
        *guard = Session::default();
        let result = self.persistence.clear();
        tracing::debug!("session cleared");
        result
    }

    pub fn token(&self) -> Option<SecureString> {
        self.inner.read().token.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.inner.read().username.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.read().user_id.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }
}
