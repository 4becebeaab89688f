//! Authorization header for authenticated calls.

use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION};

use crate::session::SessionStore;

/// Build `Authorization: Bearer <token>` from the session.
///
/// Returns `None` when no token is held or the token is not a valid
/// header value.
pub fn bearer_header(session: &SessionStore) -> Option<(HeaderName, HeaderValue)> {
    let token = session.token()?;
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose())).ok()?;
    value.set_sensitive(true);
    Some((AUTHORIZATION, value))
}
