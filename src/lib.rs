//! Client for the myFlix movie backend.
//!
//! - [`session`]: token, username and user id of the current login
//! - [`search`]: latest search term, broadcast to movie grids
//! - [`api`]: one call per backend operation
//! - [`ui`]: per-view state, reducers and the [`ui::App`] controller

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod session;
pub mod ui;

pub use error::AppError;
