use crate::api::{Director, Genre, Movie};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailDialogIntent {
    ShowGenre(Genre),
    ShowDirector(Director),
    ShowMovie(Box<Movie>),
    /// Fetching the record to show failed.
    LoadFailed,
    Close,
}

impl Intent for DetailDialogIntent {}
