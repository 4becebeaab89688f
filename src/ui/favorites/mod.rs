//! Favorites view: the user's favorite ids resolved against the catalog.

mod intent;
mod reducer;
mod state;

pub use intent::FavoritesIntent;
pub use reducer::{derive_favorites, FavoritesReducer};
pub use state::FavoritesState;
