//! Profile view: the confirmed profile, plus a working copy while editing.

mod intent;
mod reducer;
mod state;

pub use intent::{ProfileField, ProfileIntent};
pub use reducer::ProfileReducer;
pub use state::ProfileState;
