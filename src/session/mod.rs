//! Client-held login session: bearer token plus the two identifiers
//! needed to address the current user's resources.

mod persistence;
mod secure;
mod store;

pub use persistence::{
    FilePersistence, MemoryPersistence, PersistedSession, SessionError, SessionPersistence,
};
pub use secure::SecureString;
pub use store::{Session, SessionStore};
