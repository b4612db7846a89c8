//! Application state and the action reducer.
//!
//! Every user action and every network-response event is modeled as a
//! discrete [`Action`] applied through [`AppState::apply`], so each
//! transition can be tested on its own.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::chat::model::{Message, PresetFlow, Sender};
use crate::presets;
use crate::profile::UserProfile;

/// Shared handle to the application state.
///
/// The lock is never held across an await; overlapping turns interleave with
/// last-write-wins semantics on the suggestion list and the loading flag.
pub type SharedState = Arc<Mutex<AppState>>;

/// A discrete state transition.
#[derive(Debug, Clone)]
pub enum Action {
    /// Sidebar button: enter a preset flow.
    OpenFlow(PresetFlow),
    /// Back button: leave the flow and reset the log to the greeting.
    Back,
    /// Profile form submitted. Replaces any prior profile wholesale.
    ProfileSubmitted(UserProfile),
    /// Free-text send accepted: append the user message, clear the
    /// suggestion list, raise the loading flag.
    SendStarted(String),
    /// Answer endpoint succeeded with this (already defaulted) text.
    AnswerReceived(String),
    /// Answer endpoint failed; append the generic apology.
    AnswerFailed,
    /// Replace the suggestion list (entries already normalized).
    SuggestionsReceived(Vec<String>),
    /// Turn settled; lower the loading flag. Applied on every path.
    TurnFinished,
}

/// The whole front-end state: message log, active flow, profile, suggestion
/// list, loading flag.
#[derive(Debug, Clone)]
pub struct AppState {
    messages: Vec<Message>,
    next_id: u64,
    pub mode: Option<PresetFlow>,
    pub profile: Option<UserProfile>,
    pub suggested_questions: Vec<String>,
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh session state: no flow, no profile, a single bot greeting.
    pub fn new() -> Self {
        let mut state = Self {
            messages: Vec::new(),
            next_id: 1,
            mode: None,
            profile: None,
            suggested_questions: Vec::new(),
            loading: false,
        };
        state.push_message(Sender::Bot, presets::GREETING);
        state
    }

    /// The message log, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message (there is always at least the greeting).
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn push_message(&mut self, sender: Sender, text: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            text: text.into(),
        });
    }

    /// Apply one action. Transitions are immediate and total; nothing blocks
    /// or retries.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::OpenFlow(flow) => {
                let script = presets::script(flow);
                self.mode = Some(flow);
                self.push_message(Sender::User, script.user);
                self.push_message(Sender::Bot, script.bot);
            }
            Action::Back => {
                // The id counter keeps running so ids stay strictly
                // increasing across the reset.
                self.mode = None;
                self.messages.clear();
                self.push_message(Sender::Bot, presets::GREETING);
            }
            Action::ProfileSubmitted(profile) => {
                self.profile = Some(profile);
                self.push_message(Sender::Bot, presets::PROFILE_SAVED);
                self.mode = None;
            }
            Action::SendStarted(text) => {
                self.push_message(Sender::User, text);
                self.suggested_questions.clear();
                self.loading = true;
            }
            Action::AnswerReceived(answer) => {
                self.push_message(Sender::Bot, answer);
            }
            Action::AnswerFailed => {
                self.push_message(Sender::Bot, presets::APOLOGY);
            }
            Action::SuggestionsReceived(questions) => {
                self.suggested_questions = questions;
            }
            Action::TurnFinished => {
                self.loading = false;
            }
        }
    }
}
