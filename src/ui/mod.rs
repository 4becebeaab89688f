//! View state for each screen and the controller that drives it.

pub mod app;
pub mod auth;
pub mod dialog;
pub mod favorites;
pub mod movies;
pub mod mvi;
pub mod notice;
pub mod profile;
pub mod route;

pub use app::App;
pub use notice::{Notice, NoticeKind};
pub use route::Route;
