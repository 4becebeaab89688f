use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::auth::bearer_header;
use crate::api::error::ApiError;
use crate::api::models::{
    Credentials, Director, FavoriteIds, Genre, LoginResponse, Movie, Registration, User,
};
use crate::config::ApiConfig;
use crate::session::SessionStore;

/// Client for the movie backend.
///
/// Holds the session it authenticates with; clones share both the
/// connection pool and the session. Each call is sent exactly once.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- unauthenticated ------------------------------------------------------

    /// `POST /users`
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let builder = self
            .request(Method::POST, &["users"], false)?
            .json(registration);
        self.execute(builder).await
    }

    /// `POST /users/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let builder = self
            .request(Method::POST, &["users", "login"], false)?
            .json(credentials);
        self.execute(builder).await
    }

    // -- catalog --------------------------------------------------------------

    /// `GET /movies`
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let builder = self.request(Method::GET, &["movies"], true)?;
        self.execute(builder).await
    }

    /// `GET /movies/{title}`
    pub async fn get_movie(&self, title: &str) -> Result<Movie, ApiError> {
        let builder = self.request(Method::GET, &["movies", title], true)?;
        self.execute(builder).await
    }

    /// `GET /genres/{name}`
    pub async fn get_genre(&self, name: &str) -> Result<Genre, ApiError> {
        let builder = self.request(Method::GET, &["genres", name], true)?;
        self.execute(builder).await
    }

    /// `GET /directors/{name}`
    pub async fn get_director(&self, name: &str) -> Result<Director, ApiError> {
        let builder = self.request(Method::GET, &["directors", name], true)?;
        self.execute(builder).await
    }

    // -- current user ---------------------------------------------------------
    //
    // Lookup and edit address the user by username; delete and favorites
    // address it by id. The backend routes are defined that way.

    /// `GET /users/{username}`
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let username = self.current_username()?;
        let builder = self.request(Method::GET, &["users", &username], true)?;
        self.execute(builder).await
    }

    /// `PUT /users/{username}`
    pub async fn edit_profile(&self, user: &User) -> Result<User, ApiError> {
        let username = self.current_username()?;
        let builder = self
            .request(Method::PUT, &["users", &username], true)?
            .json(user);
        self.execute(builder).await
    }

    /// `DELETE /users/{userId}`
    pub async fn delete_profile(&self) -> Result<Value, ApiError> {
        let user_id = self.current_user_id()?;
        let builder = self.request(Method::DELETE, &["users", &user_id], true)?;
        self.execute_lenient(builder).await
    }

    /// `GET /users/{userId}/favorites`
    pub async fn list_favorites(&self) -> Result<FavoriteIds, ApiError> {
        let user_id = self.current_user_id()?;
        let builder = self.request(Method::GET, &["users", &user_id, "favorites"], true)?;
        self.execute(builder).await
    }

    /// `POST /users/{userId}/favorites` with `{"movieId": ..}`
    pub async fn add_favorite(&self, movie_id: &str) -> Result<Value, ApiError> {
        let user_id = self.current_user_id()?;
        let builder = self
            .request(Method::POST, &["users", &user_id, "favorites"], true)?
            .json(&AddFavorite { movie_id });
        self.execute_lenient(builder).await
    }

    /// `DELETE /users/{userId}/favorites/{movieId}`
    pub async fn remove_favorite(&self, movie_id: &str) -> Result<Value, ApiError> {
        let user_id = self.current_user_id()?;
        let builder = self.request(
            Method::DELETE,
            &["users", &user_id, "favorites", movie_id],
            true,
        )?;
        self.execute_lenient(builder).await
    }

    // -- plumbing -------------------------------------------------------------

    fn current_username(&self) -> Result<String, ApiError> {
        self.session
            .username()
            .ok_or(ApiError::NotLoggedIn { missing: "username" })
    }

    fn current_user_id(&self) -> Result<String, ApiError> {
        self.session
            .user_id()
            .ok_or(ApiError::NotLoggedIn { missing: "user id" })
    }

    /// Base URL plus percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
        authenticated: bool,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(method = %method, path = %url.path(), authenticated, "sending request");

        let mut builder = self.http.request(method, url);
        if authenticated {
            if let Some((name, value)) = bearer_header(&self.session) {
                builder = builder.header(name, value);
            }
        }
        Ok(builder)
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let (path, bytes) = self.send(builder).await?;
        let value = body_value(&bytes).map_err(|source| decode_error(&path, source))?;
        serde_json::from_value(value).map_err(|source| decode_error(&path, source))
    }

    /// Like `execute`, but a non-JSON success body becomes a JSON string.
    ///
    /// Mutation endpoints answer with either the updated record or a plain
    /// text confirmation.
    async fn execute_lenient(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let (_, bytes) = self.send(builder).await?;
        Ok(body_value(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned())))
    }

    /// Send once; return the path and body of a 2xx response.
    async fn send(&self, builder: RequestBuilder) -> Result<(String, Vec<u8>), ApiError> {
        let (client, request) = builder.build_split();
        let request = request.map_err(|source| ApiError::Transport {
            path: String::new(),
            source,
        })?;
        let path = request.url().path().to_string();

        let response = client.execute(request).await.map_err(|source| {
            let err = ApiError::Transport {
                path: path.clone(),
                source,
            };
            tracing::error!(error = %err, error_type = err.error_type(), "request failed");
            err
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| {
            let err = ApiError::Transport {
                path: path.clone(),
                source,
            };
            tracing::error!(error = %err, error_type = err.error_type(), "reading response failed");
            err
        })?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            tracing::error!(status = %status, path = %path, body = %body, "backend returned an error");
            return Err(ApiError::Status { path, status, body });
        }

        tracing::debug!(status = %status, path = %path, bytes = bytes.len(), "request succeeded");
        Ok((path, bytes.to_vec()))
    }
}

#[derive(Serialize)]
struct AddFavorite<'a> {
    #[serde(rename = "movieId")]
    movie_id: &'a str,
}

/// Parse a success body, treating an empty or `null` body as `{}`.
fn body_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice(bytes)? {
        Value::Null => Ok(Value::Object(Map::new())),
        value => Ok(value),
    }
}

fn decode_error(path: &str, source: serde_json::Error) -> ApiError {
    let err = ApiError::Decode {
        path: path.to_string(),
        source,
    };
    tracing::error!(error = %err, error_type = err.error_type(), "response decoding failed");
    err
}
