//! Wire types for the movie backend.
//!
//! Field names follow the backend's JSON (`_id`, `Title`, `FavoriteMovies`).
//! Records the client does not interpret keep their remaining fields in
//! `extra`, so a record sent back (profile edit) round-trips unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Director {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Bio", default)]
    pub bio: String,
    #[serde(rename = "Birth", default)]
    pub birth: Option<String>,
    #[serde(rename = "Death", default)]
    pub death: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Genre", default)]
    pub genre: Genre,
    #[serde(rename = "Director", default)]
    pub director: Director,
    #[serde(rename = "ImagePath", default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(rename = "Featured", default)]
    pub featured: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Minimal record, mostly useful for tests and fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Backend user record. Also the editable working copy in the profile view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(rename = "FavoriteMovies", default)]
    pub favorite_movies: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Login form payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday")]
    pub birthday: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// The current user's favorite movie ids, in backend order.
///
/// The favorites endpoint has been seen answering both with a bare id array
/// and with a user object; both decode to this one shape. A body without
/// either is an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FavoritesWire")]
pub struct FavoriteIds(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum FavoritesWire {
    Ids(Vec<String>),
    User {
        #[serde(rename = "FavoriteMovies", default)]
        favorite_movies: Vec<String>,
    },
}

impl From<FavoritesWire> for FavoriteIds {
    fn from(wire: FavoritesWire) -> Self {
        match wire {
            FavoritesWire::Ids(ids) => Self(ids),
            FavoritesWire::User { favorite_movies } => Self(favorite_movies),
        }
    }
}

impl FavoriteIds {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn contains(&self, movie_id: &str) -> bool {
        self.0.iter().any(|id| id == movie_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
