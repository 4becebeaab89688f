/// Marker for things a view can be told: user actions and backend outcomes.
pub trait Intent: Send + 'static {}
