use crate::api::{Director, Genre, Movie};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Genre(Genre),
    Director(Director),
    Movie(Box<Movie>),
    Failed {
        message: String,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Dialog heading.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Hidden | Self::Failed { .. } => None,
            Self::Genre(genre) => Some(&genre.name),
            Self::Director(director) => Some(&director.name),
            Self::Movie(movie) => Some(&movie.title),
        }
    }
}
