//! Access layer for the movie backend REST API.
//!
//! One method per backend operation. Every failure is collapsed into
//! [`ApiError`], whose [`ApiError::user_message`] is the single text shown
//! to users; the underlying cause is logged where it happens.

mod auth;
mod client;
mod error;
mod models;

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_FAILURE_MESSAGE};
pub use models::{
    Credentials, Director, FavoriteIds, Genre, LoginResponse, Movie, Registration, User,
};
