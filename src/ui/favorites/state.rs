use crate::api::{FavoriteIds, Movie};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    pub ids: FavoriteIds,
    /// Catalog entries whose id is in `ids`, in catalog order.
    pub movies: Vec<Movie>,
    pub notice: Option<Notice>,
}

impl UiState for FavoritesState {}

impl FavoritesState {
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.ids.contains(movie_id)
    }
}
