/// Marker for the inputs a reducer accepts: a key press mapped to a dialog
/// action, a drag gesture step, a finished import.
pub trait Intent: Send + 'static {}
