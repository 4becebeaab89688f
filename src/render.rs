//! Plain-text rendering of view state for the terminal.

use std::fmt::Write as _;

use myflix::api::{Director, Genre, Movie, User};
use myflix::ui::dialog::DetailDialogState;
use myflix::ui::favorites::FavoritesState;
use myflix::ui::movies::MovieGridState;
use myflix::ui::profile::ProfileState;

const FAVORITE_MARK: &str = "★";
const PLAIN_MARK: &str = "·";

pub fn movie_grid(state: &MovieGridState) -> String {
    let visible = state.visible();
    if visible.is_empty() {
        return if state.search_term.is_empty() {
            "No movies.\n".to_string()
        } else {
            format!("No movies match '{}'.\n", state.search_term)
        };
    }

    let mut out = String::new();
    for movie in visible {
        let mark = if state.is_favorite(&movie.id) {
            FAVORITE_MARK
        } else {
            PLAIN_MARK
        };
        let _ = writeln!(out, "{} {}", mark, movie_line(movie));
    }
    out
}

pub fn favorites(state: &FavoritesState) -> String {
    if state.movies.is_empty() {
        return "No favorite movies yet.\n".to_string();
    }
    let mut out = String::new();
    for movie in &state.movies {
        let _ = writeln!(out, "{} {}", FAVORITE_MARK, movie_line(movie));
    }
    out
}

fn movie_line(movie: &Movie) -> String {
    let mut line = format!("{}  {}", movie.id, movie.title);
    let details: Vec<&str> = [movie.genre.name.as_str(), movie.director.name.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !details.is_empty() {
        let _ = write!(line, "  ({})", details.join(", "));
    }
    line
}

pub fn dialog(state: &DetailDialogState) -> String {
    match state {
        DetailDialogState::Hidden => String::new(),
        DetailDialogState::Genre(genre) => genre_text(genre),
        DetailDialogState::Director(director) => director_text(director),
        DetailDialogState::Movie(movie) => movie_text(movie),
        DetailDialogState::Failed { message } => format!("{}\n", message),
    }
}

fn genre_text(genre: &Genre) -> String {
    format!("{}\n\n{}\n", genre.name, genre.description)
}

fn director_text(director: &Director) -> String {
    let mut out = format!("{}\n", director.name);
    match (&director.birth, &director.death) {
        (Some(birth), Some(death)) => {
            let _ = writeln!(out, "{} – {}", birth, death);
        }
        (Some(birth), None) => {
            let _ = writeln!(out, "Born {}", birth);
        }
        _ => {}
    }
    let _ = writeln!(out, "\n{}", director.bio);
    out
}

fn movie_text(movie: &Movie) -> String {
    let mut out = format!("{}\n", movie.title);
    if !movie.genre.name.is_empty() {
        let _ = writeln!(out, "Genre:    {}", movie.genre.name);
    }
    if !movie.director.name.is_empty() {
        let _ = writeln!(out, "Director: {}", movie.director.name);
    }
    if movie.featured {
        let _ = writeln!(out, "Featured");
    }
    let _ = writeln!(out, "\n{}", movie.description);
    out
}

pub fn profile(state: &ProfileState) -> String {
    let Some(user) = state.displayed() else {
        return String::new();
    };
    user_text(user)
}

fn user_text(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Username:  {}", user.username);
    let _ = writeln!(out, "Email:     {}", user.email);
    if let Some(birthday) = &user.birthday {
        let _ = writeln!(out, "Birthday:  {}", birthday);
    }
    let _ = writeln!(out, "Favorites: {}", user.favorite_movies.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use myflix::api::FavoriteIds;

    #[test]
    fn grid_marks_favorites_and_respects_filter() {
        let state = MovieGridState {
            movies: vec![Movie::new("5", "Inception"), Movie::new("7", "Up")],
            favorites: FavoriteIds::new(vec!["5".to_string()]),
            search_term: "in".to_string(),
            notice: None,
        };
        assert_eq!(movie_grid(&state), "★ 5  Inception\n");
    }

    #[test]
    fn grid_reports_empty_search() {
        let state = MovieGridState {
            movies: vec![Movie::new("7", "Up")],
            search_term: "zzz".to_string(),
            ..MovieGridState::default()
        };
        assert_eq!(movie_grid(&state), "No movies match 'zzz'.\n");
    }
}
