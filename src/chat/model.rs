//! Chat message and preset-flow models.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Strictly increasing within a session; used as the list key.
    pub id: u64,
    pub sender: Sender,
    /// Markdown-formatted body, rendered as-is.
    pub text: String,
}

/// The four preset conversation flows reachable from the sidebar.
///
/// "No active flow" is modeled as `Option<PresetFlow>` in [`state::AppState`].
///
/// [`state::AppState`]: crate::chat::state::AppState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetFlow {
    Advice,
    Product,
    CreditCheck,
    UserProfile,
}

impl std::fmt::Display for PresetFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Advice => "advice",
            Self::Product => "product",
            Self::CreditCheck => "credit_check",
            Self::UserProfile => "user_profile",
        };
        write!(f, "{s}")
    }
}
