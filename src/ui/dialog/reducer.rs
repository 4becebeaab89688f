use crate::api::GENERIC_FAILURE_MESSAGE;
use crate::ui::dialog::intent::DetailDialogIntent;
use crate::ui::dialog::state::DetailDialogState;
use crate::ui::mvi::Reducer;

pub struct DetailDialogReducer;

impl Reducer for DetailDialogReducer {
    type State = DetailDialogState;
    type Intent = DetailDialogIntent;

    // Any open dialog is replaced; only one is shown at a time.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailDialogIntent::ShowGenre(genre) => DetailDialogState::Genre(genre),
            DetailDialogIntent::ShowDirector(director) => DetailDialogState::Director(director),
            DetailDialogIntent::ShowMovie(movie) => DetailDialogState::Movie(movie),
            DetailDialogIntent::LoadFailed => DetailDialogState::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            },
            DetailDialogIntent::Close => DetailDialogState::Hidden,
        }
    }
}
