//! Conversation state: message log, preset flows, and the action reducer.

pub mod model;
pub mod state;

pub use model::{Message, PresetFlow, Sender};
pub use state::{Action, AppState, SharedState};
