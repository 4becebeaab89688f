//! Movie grid: every movie, filtered by the search term, with a favorite
//! flag per card.

mod filter;
mod intent;
mod reducer;
mod state;

pub use filter::filter;
pub use intent::MovieGridIntent;
pub use reducer::MovieGridReducer;
pub use state::MovieGridState;
