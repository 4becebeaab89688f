/// Marker for view state: everything needed to render one view.
///
/// `Default` is the state before anything has loaded.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
