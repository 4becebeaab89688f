use crate::api::FavoriteIds;
use crate::ui::movies::intent::MovieGridIntent;
use crate::ui::movies::state::MovieGridState;
use crate::ui::mvi::Reducer;
use crate::ui::notice::{self, Notice};

pub struct MovieGridReducer;

impl Reducer for MovieGridReducer {
    type State = MovieGridState;
    type Intent = MovieGridIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieGridIntent::MoviesLoaded(movies) => MovieGridState { movies, ..state },
            MovieGridIntent::MoviesFailed => MovieGridState {
                notice: Some(Notice::failure(notice::MOVIES_LOAD_FAILED)),
                ..state
            },
            MovieGridIntent::FavoritesLoaded(favorites) => MovieGridState { favorites, ..state },
            MovieGridIntent::FavoritesFailed => MovieGridState {
                favorites: FavoriteIds::default(),
                ..state
            },
            MovieGridIntent::SearchChanged(search_term) => MovieGridState {
                search_term,
                ..state
            },
            // Favorite flags only move when the re-fetched set arrives.
            MovieGridIntent::FavoriteAdded => MovieGridState {
                notice: Some(Notice::success(notice::FAVORITE_ADDED)),
                ..state
            },
            MovieGridIntent::AddFailed => MovieGridState {
                notice: Some(Notice::failure(notice::FAVORITE_ADD_FAILED)),
                ..state
            },
            MovieGridIntent::FavoriteRemoved => MovieGridState {
                notice: Some(Notice::success(notice::FAVORITE_REMOVED)),
                ..state
            },
            MovieGridIntent::RemoveFailed => MovieGridState {
                notice: Some(Notice::failure(notice::FAVORITE_REMOVE_FAILED)),
                ..state
            },
        }
    }
}
