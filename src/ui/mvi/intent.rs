/// Marker trait for intents: user actions (submit, edit) and effect
/// outcomes (lookup finished).
pub trait Intent: Send + 'static {}
