use crate::api::{FavoriteIds, Movie};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Both fetches finished: the id list, then the full catalog.
    Loaded {
        ids: FavoriteIds,
        catalog: Vec<Movie>,
    },
    LoadFailed,
    Removed,
    RemoveFailed,
}

impl Intent for FavoritesIntent {}
