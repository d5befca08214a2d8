/// Marker trait for view state.
///
/// A state holds everything needed to render its view and is replaced
/// wholesale on every reduction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
