use crate::api::{FavoriteIds, Movie};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MovieGridIntent {
    MoviesLoaded(Vec<Movie>),
    MoviesFailed,
    FavoritesLoaded(FavoriteIds),
    /// Favorite set could not be fetched; cards show no favorites.
    FavoritesFailed,
    SearchChanged(String),
    FavoriteAdded,
    AddFailed,
    FavoriteRemoved,
    RemoveFailed,
}

impl Intent for MovieGridIntent {}
