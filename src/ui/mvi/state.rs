/// Marker for reducer-owned UI state.
///
/// `Default` is the resting state (dialog hidden, no drag in progress), which
/// lets callers `std::mem::take` the state out of the app while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
