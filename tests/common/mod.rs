//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use myflix::api::{ApiClient, Director, Genre, Movie};
use myflix::config::ApiConfig;
use myflix::search::SearchBroadcaster;
use myflix::session::SessionStore;
use myflix::ui::App;
use std::net::TcpListener;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_for(base_url: &str, session: SessionStore) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
    };
    ApiClient::new(&config, session).expect("client")
}

/// Session already holding alice's credentials, as after a login.
pub fn alice_session() -> SessionStore {
    let session = SessionStore::in_memory();
    session.set("T", "alice", "123").unwrap();
    session
}

pub fn make_app(backend: &MockBackend, session: SessionStore) -> App {
    App::new(api_for(&backend.base_url(), session), SearchBroadcaster::new())
}

pub fn movie(id: &str, title: &str, genre: &str, director: &str) -> Movie {
    Movie {
        genre: Genre {
            name: genre.to_string(),
            description: format!("{} films", genre),
        },
        director: Director {
            name: director.to_string(),
            bio: format!("{} directs films", director),
            birth: Some("1970".to_string()),
            death: None,
        },
        description: format!("About {}", title),
        ..Movie::new(id, title)
    }
}

/// Backend with alice (password "x", token "T", id "123") and a three
/// movie catalog: 5 Inception, 7 Up, 9 Interstellar.
pub async fn seeded_backend() -> MockBackend {
    let backend = MockBackend::start().await;
    backend.add_user("123", "alice", "x", "T").await;
    backend
        .add_movie(movie("5", "Inception", "Sci-Fi", "Christopher Nolan"))
        .await;
    backend
        .add_movie(movie("7", "Up", "Animation", "Pete Docter"))
        .await;
    backend
        .add_movie(movie("9", "Interstellar", "Sci-Fi", "Christopher Nolan"))
        .await;
    backend
}
