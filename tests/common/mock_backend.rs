//! In-process movie backend for exercising the client end to end.
//!
//! Keeps users, the catalog and favorite sets in memory and answers the
//! same routes the real service does. Every request is captured; a
//! scripted response can replace the next answer for a given route.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, Method, Response as HttpResponse, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use myflix::api::{Credentials, Movie, Registration, User};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Path as sent, still percent-encoded.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

/// A scripted response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, &json!({ "error": message }).to_string())
    }

    fn into_response(self) -> Response {
        HttpResponse::builder()
            .status(StatusCode::from_u16(self.status).unwrap())
            .header("content-type", self.content_type)
            .body(Body::from(self.body))
            .unwrap()
    }
}

struct StoredUser {
    user: User,
    password: String,
    token: String,
}

#[derive(Default)]
struct Data {
    movies: Vec<Movie>,
    users: Vec<StoredUser>,
    next_id: u32,
    favorites_as_user_object: bool,
}

impl Data {
    fn authorized(&self, headers: &HeaderMap) -> bool {
        let Some(token) = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
        else {
            return false;
        };
        self.users.iter().any(|u| u.token == token)
    }

    fn by_username(&mut self, username: &str) -> Option<&mut StoredUser> {
        self.users.iter_mut().find(|u| u.user.username == username)
    }

    fn by_id(&mut self, id: &str) -> Option<&mut StoredUser> {
        self.users.iter_mut().find(|u| u.user.id == id)
    }
}

#[derive(Clone)]
struct MockState {
    data: Arc<Mutex<Data>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    scripted: Arc<Mutex<Vec<(Method, String, MockResponse)>>>,
}

/// Mock movie backend.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
    server: Option<tokio::task::JoinHandle<()>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState {
            data: Arc::new(Mutex::new(Data {
                next_id: 500,
                ..Data::default()
            })),
            requests: Arc::new(Mutex::new(Vec::new())),
            scripted: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/users", post(register))
            .route("/users/login", post(login))
            .route("/movies", get(list_movies))
            .route("/movies/{title}", get(get_movie))
            .route("/genres/{name}", get(get_genre))
            .route("/directors/{name}", get(get_director))
            .route(
                "/users/{id}",
                get(get_user).put(edit_user).delete(delete_user),
            )
            .route(
                "/users/{id}/favorites",
                get(list_favorites).post(add_favorite),
            )
            .route("/users/{id}/favorites/{movie_id}", delete(remove_favorite))
            .layer(middleware::from_fn_with_state(state.clone(), capture))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
            server: Some(server),
        }
    }

    /// Shut the server down and wait until it no longer accepts or holds
    /// connections; later calls to `base_url()` fail to connect.
    pub async fn stop(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(server) = self.server.take() {
            let _ = tokio::time::timeout(tokio::time::Duration::from_secs(5), server).await;
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn add_movie(&self, movie: Movie) {
        self.state.data.lock().await.movies.push(movie);
    }

    /// Register a user who logs in with `password` and receives `token`.
    pub async fn add_user(&self, id: &str, username: &str, password: &str, token: &str) {
        let user = User {
            id: id.to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            ..User::default()
        };
        self.state.data.lock().await.users.push(StoredUser {
            user,
            password: password.to_string(),
            token: token.to_string(),
        });
    }

    pub async fn set_favorites(&self, user_id: &str, ids: &[&str]) {
        if let Some(stored) = self.state.data.lock().await.by_id(user_id) {
            stored.user.favorite_movies = ids.iter().map(|s| s.to_string()).collect();
        }
    }

    pub async fn favorites_of(&self, user_id: &str) -> Vec<String> {
        self.state
            .data
            .lock()
            .await
            .by_id(user_id)
            .map(|u| u.user.favorite_movies.clone())
            .unwrap_or_default()
    }

    pub async fn user(&self, username: &str) -> Option<User> {
        self.state
            .data
            .lock()
            .await
            .by_username(username)
            .map(|u| u.user.clone())
    }

    pub async fn password_of(&self, username: &str) -> Option<String> {
        self.state
            .data
            .lock()
            .await
            .by_username(username)
            .map(|u| u.password.clone())
    }

    /// Answer the favorites listing with the whole user record instead of
    /// a bare id list.
    pub async fn favorites_as_user_object(&self, enabled: bool) {
        self.state.data.lock().await.favorites_as_user_object = enabled;
    }

    /// Replace the next answer to `method path` (encoded path) with `resp`.
    pub async fn respond_once(&self, method: Method, path: &str, resp: MockResponse) {
        self.state
            .scripted
            .lock()
            .await
            .push((method, path.to_string(), resp));
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    pub async fn clear_requests(&self) {
        self.state.requests.lock().await.clear();
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn capture(State(state): State<MockState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, 1024 * 1024)
        .await
        .unwrap_or_default();

    let path = parts.uri.path().to_string();
    state.requests.lock().await.push(CapturedRequest {
        method: parts.method.to_string(),
        path: path.clone(),
        headers: parts
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect(),
        body: body_bytes.to_vec(),
    });

    let scripted = {
        let mut scripted = state.scripted.lock().await;
        scripted
            .iter()
            .position(|(m, p, _)| *m == parts.method && *p == path)
            .map(|i| scripted.remove(i).2)
    };
    if let Some(resp) = scripted {
        return resp.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(body_bytes)))
        .await
}

fn unauthorized() -> Response {
    MockResponse::text(401, "Unauthorized").into_response()
}

fn not_found(what: &str) -> Response {
    MockResponse::text(404, &format!("{} not found", what)).into_response()
}

async fn register(State(state): State<MockState>, Json(reg): Json<Registration>) -> Response {
    let mut data = state.data.lock().await;
    if data.by_username(&reg.username).is_some() {
        return MockResponse::text(400, &format!("{} already exists", reg.username))
            .into_response();
    }

    data.next_id += 1;
    let user = User {
        id: data.next_id.to_string(),
        username: reg.username.clone(),
        email: reg.email,
        birthday: Some(reg.birthday),
        ..User::default()
    };
    data.users.push(StoredUser {
        user: user.clone(),
        password: reg.password,
        token: format!("token-{}", reg.username),
    });
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn login(State(state): State<MockState>, Json(creds): Json<Credentials>) -> Response {
    let mut data = state.data.lock().await;
    match data.by_username(&creds.username) {
        Some(stored) if stored.password == creds.password => {
            Json(json!({ "token": stored.token, "user": stored.user })).into_response()
        }
        _ => MockResponse::json(400, r#"{"message":"Something is not right","user":false}"#)
            .into_response(),
    }
}

async fn list_movies(State(state): State<MockState>, headers: HeaderMap) -> Response {
    let data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    Json(data.movies.clone()).into_response()
}

async fn get_movie(
    State(state): State<MockState>,
    Path(title): Path<String>,
    headers: HeaderMap,
) -> Response {
    let data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    match data.movies.iter().find(|m| m.title == title) {
        Some(movie) => Json(movie.clone()).into_response(),
        None => not_found("Movie"),
    }
}

async fn get_genre(
    State(state): State<MockState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    let data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    match data.movies.iter().find(|m| m.genre.name == name) {
        Some(movie) => Json(movie.genre.clone()).into_response(),
        None => not_found("Genre"),
    }
}

async fn get_director(
    State(state): State<MockState>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    let data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    match data.movies.iter().find(|m| m.director.name == name) {
        Some(movie) => Json(movie.director.clone()).into_response(),
        None => not_found("Director"),
    }
}

async fn get_user(
    State(state): State<MockState>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    match data.by_username(&username) {
        Some(stored) => Json(stored.user.clone()).into_response(),
        None => not_found("User"),
    }
}

async fn edit_user(
    State(state): State<MockState>,
    Path(username): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);

    if let Some(new_name) = field("Username") {
        if new_name != username && data.by_username(&new_name).is_some() {
            return MockResponse::text(422, &format!("{} already exists", new_name))
                .into_response();
        }
    }

    let Some(stored) = data.by_username(&username) else {
        return not_found("User");
    };
    if let Some(v) = field("Username") {
        stored.user.username = v;
    }
    if let Some(v) = field("Email") {
        stored.user.email = v;
    }
    if let Some(v) = field("Birthday") {
        stored.user.birthday = Some(v);
    }
    if let Some(v) = field("Password") {
        stored.password = v;
    }
    Json(stored.user.clone()).into_response()
}

async fn delete_user(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    let Some(index) = data.users.iter().position(|u| u.user.id == id) else {
        return not_found("User");
    };
    let removed = data.users.remove(index);
    MockResponse::text(200, &format!("{} was deleted.", removed.user.username)).into_response()
}

async fn list_favorites(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    let as_user = data.favorites_as_user_object;
    match data.by_id(&id) {
        Some(stored) if as_user => Json(stored.user.clone()).into_response(),
        Some(stored) => Json(stored.user.favorite_movies.clone()).into_response(),
        None => not_found("User"),
    }
}

async fn add_favorite(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    let Some(movie_id) = body.get("movieId").and_then(Value::as_str) else {
        return MockResponse::text(400, "movieId is required").into_response();
    };
    let Some(stored) = data.by_id(&id) else {
        return not_found("User");
    };
    if !stored.user.favorite_movies.iter().any(|m| m == movie_id) {
        stored.user.favorite_movies.push(movie_id.to_string());
    }
    Json(stored.user.clone()).into_response()
}

async fn remove_favorite(
    State(state): State<MockState>,
    Path((id, movie_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let mut data = state.data.lock().await;
    if !data.authorized(&headers) {
        return unauthorized();
    }
    let Some(stored) = data.by_id(&id) else {
        return not_found("User");
    };
    stored.user.favorite_movies.retain(|m| *m != movie_id);
    Json(stored.user.clone()).into_response()
}
