use crate::api::{FavoriteIds, Movie};
use crate::ui::favorites::intent::FavoritesIntent;
use crate::ui::favorites::state::FavoritesState;
use crate::ui::mvi::Reducer;
use crate::ui::notice::{self, Notice};

/// Keep the catalog entries whose id is a favorite, preserving catalog order.
///
/// Ids with no catalog entry are dropped.
pub fn derive_favorites(ids: &FavoriteIds, catalog: Vec<Movie>) -> Vec<Movie> {
    catalog
        .into_iter()
        .filter(|movie| ids.contains(&movie.id))
        .collect()
}

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Loaded { ids, catalog } => FavoritesState {
                movies: derive_favorites(&ids, catalog),
                ids,
                ..state
            },
            FavoritesIntent::LoadFailed => FavoritesState {
                notice: Some(Notice::failure(notice::FAVORITES_LOAD_FAILED)),
                ..state
            },
            FavoritesIntent::Removed => FavoritesState {
                notice: Some(Notice::success(notice::FAVORITE_REMOVED)),
                ..state
            },
            FavoritesIntent::RemoveFailed => FavoritesState {
                notice: Some(Notice::failure(notice::FAVORITE_REMOVE_FAILED)),
                ..state
            },
        }
    }
}
