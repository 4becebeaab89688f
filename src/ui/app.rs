use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiClient, ApiError};
use crate::error::AppError;
use crate::search::{SearchBroadcaster, SubscriptionId};
use crate::session::SessionStore;
use crate::ui::auth::{
    LoginFormIntent, LoginFormReducer, LoginFormState, RegistrationField, RegistrationFormIntent,
    RegistrationFormReducer, RegistrationFormState,
};
use crate::ui::dialog::{DetailDialogIntent, DetailDialogReducer, DetailDialogState};
use crate::ui::favorites::{FavoritesIntent, FavoritesReducer, FavoritesState};
use crate::ui::movies::{MovieGridIntent, MovieGridReducer, MovieGridState};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileField, ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::route::Route;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application controller.
///
/// Owns every view's state and performs the backend calls user actions
/// trigger. Outcomes are fed back through the view reducers; the notice a
/// view ends up holding is what the user sees. The returned `AppError`
/// carries the cause for callers that need it.
pub struct App {
    api: ApiClient,
    search: SearchBroadcaster,
    /// Latest term pushed by the broadcaster, not yet applied to the grid.
    pending_search: Arc<Mutex<Option<String>>>,
    search_subscription: SubscriptionId,
    route: Route,
    movies: MovieGridState,
    favorites: FavoritesState,
    profile: ProfileState,
    login: LoginFormState,
    registration: RegistrationFormState,
    dialog: DetailDialogState,
}

impl App {
    pub fn new(api: ApiClient, search: SearchBroadcaster) -> Self {
        let pending_search = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&pending_search);
        let search_subscription = search.subscribe(move |term| {
            *slot.lock() = Some(term.to_string());
        });
        let route = Route::Movies.guard(api.session());

        let mut app = Self {
            api,
            search,
            pending_search,
            search_subscription,
            route,
            movies: MovieGridState::default(),
            favorites: FavoritesState::default(),
            profile: ProfileState::default(),
            login: LoginFormState::default(),
            registration: RegistrationFormState::default(),
            dialog: DetailDialogState::default(),
        };
        app.apply_pending_search();
        app
    }

    // -- accessors ------------------------------------------------------------

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &SessionStore {
        self.api.session()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn search(&self) -> &SearchBroadcaster {
        &self.search
    }

    pub fn movies(&self) -> &MovieGridState {
        &self.movies
    }

    pub fn favorites(&self) -> &FavoritesState {
        &self.favorites
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login
    }

    pub fn registration_form(&self) -> &RegistrationFormState {
        &self.registration
    }

    pub fn dialog(&self) -> &DetailDialogState {
        &self.dialog
    }

    // -- navigation -----------------------------------------------------------

    /// Move to `route`, or to the landing screen if it needs a login we lack.
    pub fn navigate(&mut self, route: Route) -> Route {
        self.route = route.guard(self.api.session());
        tracing::debug!(requested = ?route, landed = ?self.route, "navigate");
        self.route
    }

    fn enter(&mut self, route: Route) -> Result<(), AppError> {
        if self.navigate(route) == route {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    fn reset_views(&mut self) {
        self.pending_search.lock().take();
        self.movies = MovieGridState {
            search_term: self.search.current(),
            ..MovieGridState::default()
        };
        self.favorites = FavoritesState::default();
        self.profile = ProfileState::default();
        self.dialog = DetailDialogState::default();
    }

    // -- auth forms -----------------------------------------------------------

    pub fn dispatch_login(&mut self, intent: LoginFormIntent) {
        dispatch_mvi!(self, login, LoginFormReducer, intent);
    }

    pub fn set_registration_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        let intent = RegistrationFormIntent::SetField {
            field,
            value: value.into(),
        };
        dispatch_mvi!(self, registration, RegistrationFormReducer, intent);
    }

    /// Submit the login form. On success the session holds the returned
    /// token, username and id, and the movie list is the current route.
    pub async fn login(&mut self) -> Result<(), AppError> {
        dispatch_mvi!(self, login, LoginFormReducer, LoginFormIntent::Submitted);
        let credentials = self.login.credentials.clone();

        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                dispatch_mvi!(self, login, LoginFormReducer, LoginFormIntent::Failed);
                return Err(e.into());
            }
        };

        if let Err(e) = self
            .api
            .session()
            .set(response.token, response.user.username, response.user.id)
        {
            tracing::error!(error = %e, "failed to store session");
            dispatch_mvi!(self, login, LoginFormReducer, LoginFormIntent::Failed);
            return Err(e.into());
        }

        tracing::info!(username = %credentials.username, "logged in");
        dispatch_mvi!(self, login, LoginFormReducer, LoginFormIntent::Succeeded);
        self.navigate(Route::Movies);
        Ok(())
    }

    /// Submit the registration form. Does not log the new user in.
    pub async fn register(&mut self) -> Result<(), AppError> {
        dispatch_mvi!(
            self,
            registration,
            RegistrationFormReducer,
            RegistrationFormIntent::Submitted
        );
        let result = self.api.register(&self.registration.registration).await;
        match result {
            Ok(user) => {
                tracing::info!(username = %user.username, "registered");
                dispatch_mvi!(
                    self,
                    registration,
                    RegistrationFormReducer,
                    RegistrationFormIntent::Succeeded
                );
                Ok(())
            }
            Err(e) => {
                let intent = RegistrationFormIntent::Failed {
                    detail: e.server_detail(),
                };
                dispatch_mvi!(self, registration, RegistrationFormReducer, intent);
                Err(e.into())
            }
        }
    }

    /// Drop the session and return to the landing screen.
    pub fn logout(&mut self) -> Result<(), AppError> {
        let cleared = self.api.session().clear();
        self.reset_views();
        self.login = LoginFormState::default();
        self.navigate(Route::Welcome);
        tracing::info!("logged out");
        cleared.map_err(AppError::from)
    }

    // -- movie grid -----------------------------------------------------------

    /// Show the movie grid: load the catalog and the favorite set together.
    pub async fn open_movies(&mut self) -> Result<(), AppError> {
        self.enter(Route::Movies)?;
        self.apply_pending_search();

        let (movies, favorites) =
            tokio::join!(self.api.list_movies(), self.api.list_favorites());

        // Either may have finished first; apply favorites, then the catalog.
        let favorites_intent = match favorites {
            Ok(ids) => MovieGridIntent::FavoritesLoaded(ids),
            Err(_) => MovieGridIntent::FavoritesFailed,
        };
        dispatch_mvi!(self, movies, MovieGridReducer, favorites_intent);

        match movies {
            Ok(list) => {
                dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::MoviesLoaded(list));
                Ok(())
            }
            Err(e) => {
                dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::MoviesFailed);
                Err(e.into())
            }
        }
    }

    /// Publish a search term; the grid picks it up from the broadcaster.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.publish(term);
        self.apply_pending_search();
    }

    /// Apply a term another publisher pushed since the last call.
    pub fn apply_pending_search(&mut self) {
        let pending = self.pending_search.lock().take();
        if let Some(term) = pending {
            dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::SearchChanged(term));
        }
    }

    /// Add or remove `movie_id` from favorites, then re-fetch the set.
    ///
    /// The card's flag changes only once the re-fetched set arrives.
    pub async fn toggle_favorite(&mut self, movie_id: &str) -> Result<(), AppError> {
        if self.movies.is_favorite(movie_id) {
            if let Err(e) = self.api.remove_favorite(movie_id).await {
                dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::RemoveFailed);
                return Err(e.into());
            }
            dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::FavoriteRemoved);
        } else {
            if let Err(e) = self.api.add_favorite(movie_id).await {
                dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::AddFailed);
                return Err(e.into());
            }
            dispatch_mvi!(self, movies, MovieGridReducer, MovieGridIntent::FavoriteAdded);
        }
        self.refresh_grid_favorites().await;
        Ok(())
    }

    async fn refresh_grid_favorites(&mut self) {
        let intent = match self.api.list_favorites().await {
            Ok(ids) => MovieGridIntent::FavoritesLoaded(ids),
            Err(_) => MovieGridIntent::FavoritesFailed,
        };
        dispatch_mvi!(self, movies, MovieGridReducer, intent);
    }

    // -- favorites view -------------------------------------------------------

    pub async fn open_favorites(&mut self) -> Result<(), AppError> {
        self.enter(Route::Favorites)?;
        self.load_favorites().await
    }

    /// Fetch the favorite ids, then the catalog, then keep the matches.
    ///
    /// Sequential: the second fetch is only useful once the first succeeded.
    pub async fn load_favorites(&mut self) -> Result<(), AppError> {
        let loaded = match self.api.list_favorites().await {
            Ok(ids) => self
                .api
                .list_movies()
                .await
                .map(|catalog| FavoritesIntent::Loaded { ids, catalog }),
            Err(e) => Err(e),
        };

        match loaded {
            Ok(intent) => {
                dispatch_mvi!(self, favorites, FavoritesReducer, intent);
                Ok(())
            }
            Err(e) => {
                dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::LoadFailed);
                Err(e.into())
            }
        }
    }

    /// Remove from the favorites view and re-derive the whole list.
    pub async fn remove_favorite(&mut self, movie_id: &str) -> Result<(), AppError> {
        if !self.favorites.is_favorite(movie_id) {
            return Ok(());
        }
        if let Err(e) = self.api.remove_favorite(movie_id).await {
            dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::RemoveFailed);
            return Err(e.into());
        }
        dispatch_mvi!(self, favorites, FavoritesReducer, FavoritesIntent::Removed);
        self.load_favorites().await
    }

    // -- profile --------------------------------------------------------------

    pub async fn open_profile(&mut self) -> Result<(), AppError> {
        self.enter(Route::Profile)?;
        match self.api.get_profile().await {
            Ok(user) => {
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Loaded(user));
                Ok(())
            }
            Err(e) => {
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::LoadFailed);
                Err(e.into())
            }
        }
    }

    pub fn begin_edit(&mut self) {
        dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::BeginEdit);
    }

    pub fn edit_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let intent = ProfileIntent::EditField {
            field,
            value: value.into(),
        };
        dispatch_mvi!(self, profile, ProfileReducer, intent);
    }

    pub fn cancel_edit(&mut self) {
        dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::CancelEdit);
    }

    /// Send the working copy; on success the backend's copy is confirmed.
    pub async fn save_profile(&mut self) -> Result<(), AppError> {
        let Some(draft) = self.profile.draft.clone() else {
            return Err(AppError::NotEditing);
        };
        dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::SaveRequested);

        match self.api.edit_profile(&draft).await {
            Ok(user) => {
                let username = user.username.clone();
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Saved(user));
                self.follow_username_change(&username)
            }
            Err(e) => {
                dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::SaveFailed);
                Err(e.into())
            }
        }
    }

    /// The profile is addressed by username, so a rename must reach the session.
    fn follow_username_change(&self, username: &str) -> Result<(), AppError> {
        let session = self.api.session();
        let Some(current) = session.username() else {
            return Ok(());
        };
        if username.is_empty() || username == current {
            return Ok(());
        }
        tracing::info!(from = %current, to = %username, "username changed");
        session.rename(username).map_err(|e| {
            tracing::error!(error = %e, "failed to persist renamed session");
            AppError::from(e)
        })
    }

    /// Delete the account; on success the session is gone and the landing
    /// screen is shown.
    pub async fn delete_profile(&mut self) -> Result<(), AppError> {
        if let Err(e) = self.api.delete_profile().await {
            dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::DeleteFailed);
            return Err(e.into());
        }

        dispatch_mvi!(self, profile, ProfileReducer, ProfileIntent::Deleted);
        let cleared = self.api.session().clear();
        let profile = std::mem::take(&mut self.profile);
        self.reset_views();
        self.profile = profile;
        self.navigate(Route::Welcome);
        cleared.map_err(AppError::from)
    }

    // -- detail dialogs -------------------------------------------------------

    /// Genre dialog for a grid card, from the data already on the movie.
    pub fn show_genre_of(&mut self, movie_id: &str) -> Result<(), AppError> {
        let genre = self.grid_movie(movie_id)?.genre.clone();
        dispatch_mvi!(self, dialog, DetailDialogReducer, DetailDialogIntent::ShowGenre(genre));
        Ok(())
    }

    pub fn show_director_of(&mut self, movie_id: &str) -> Result<(), AppError> {
        let director = self.grid_movie(movie_id)?.director.clone();
        dispatch_mvi!(self, dialog, DetailDialogReducer, DetailDialogIntent::ShowDirector(director));
        Ok(())
    }

    pub fn show_details_of(&mut self, movie_id: &str) -> Result<(), AppError> {
        let movie = Box::new(self.grid_movie(movie_id)?.clone());
        dispatch_mvi!(self, dialog, DetailDialogReducer, DetailDialogIntent::ShowMovie(movie));
        Ok(())
    }

    fn grid_movie(&self, movie_id: &str) -> Result<&crate::api::Movie, AppError> {
        self.movies
            .find(movie_id)
            .ok_or_else(|| AppError::UnknownMovie(movie_id.to_string()))
    }

    /// Fetch a genre by name and show it.
    pub async fn show_genre(&mut self, name: &str) -> Result<(), AppError> {
        let result = self.api.get_genre(name).await;
        self.show_fetched(result.map(DetailDialogIntent::ShowGenre))
    }

    pub async fn show_director(&mut self, name: &str) -> Result<(), AppError> {
        let result = self.api.get_director(name).await;
        self.show_fetched(result.map(DetailDialogIntent::ShowDirector))
    }

    pub async fn show_movie(&mut self, title: &str) -> Result<(), AppError> {
        let result = self.api.get_movie(title).await;
        self.show_fetched(result.map(|m| DetailDialogIntent::ShowMovie(Box::new(m))))
    }

    fn show_fetched(&mut self, result: Result<DetailDialogIntent, ApiError>) -> Result<(), AppError> {
        match result {
            Ok(intent) => {
                dispatch_mvi!(self, dialog, DetailDialogReducer, intent);
                Ok(())
            }
            Err(e) => {
                dispatch_mvi!(self, dialog, DetailDialogReducer, DetailDialogIntent::LoadFailed);
                Err(e.into())
            }
        }
    }

    pub fn close_dialog(&mut self) {
        dispatch_mvi!(self, dialog, DetailDialogReducer, DetailDialogIntent::Close);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.search.unsubscribe(self.search_subscription);
    }
}
