//! Detail dialogs opened from a movie card: genre, director, full movie.

mod intent;
mod reducer;
mod state;

pub use intent::DetailDialogIntent;
pub use reducer::DetailDialogReducer;
pub use state::DetailDialogState;
