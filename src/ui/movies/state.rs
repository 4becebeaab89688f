use crate::api::{FavoriteIds, Movie};
use crate::ui::movies::filter::filter;
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieGridState {
    pub movies: Vec<Movie>,
    pub favorites: FavoriteIds,
    pub search_term: String,
    pub notice: Option<Notice>,
}

impl UiState for MovieGridState {}

impl MovieGridState {
    /// Movies matching the current search term.
    pub fn visible(&self) -> Vec<&Movie> {
        filter(&self.movies, &self.search_term)
    }

    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.favorites.contains(movie_id)
    }

    pub fn find(&self, movie_id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }
}
