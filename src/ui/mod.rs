//! Terminal presentation layer: the stdin/stdout REPL.
//!
//! Slash commands stand in for the sidebar buttons; a bare integer picks the
//! corresponding suggested question; any other non-empty line is a free-text
//! send through the orchestrator.

mod form_wizard;
mod render;

use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::api::AssistantApi;
use crate::chat::{Action, PresetFlow, SharedState};
use crate::orchestrator;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Flow(PresetFlow),
    Back,
    Quit,
    /// 1-based index into the suggestion list.
    Suggestion(usize),
    Send(String),
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    match line {
        "/advice" => Command::Flow(PresetFlow::Advice),
        "/product" => Command::Flow(PresetFlow::Product),
        "/credit" => Command::Flow(PresetFlow::CreditCheck),
        "/profile" => Command::Flow(PresetFlow::UserProfile),
        "/back" => Command::Back,
        "/quit" => Command::Quit,
        other if other.starts_with('/') => Command::Unknown(other.to_string()),
        other => match other.parse::<usize>() {
            Ok(index) if index >= 1 => Command::Suggestion(index),
            _ => Command::Send(other.to_string()),
        },
    }
}

/// Start the stdin reader task and return a stream of raw lines.
fn input_lines() -> UnboundedReceiverStream<String> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    tokio::spawn(async move {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    UnboundedReceiverStream::new(rx)
}

/// Run the REPL until EOF or `/quit`.
pub async fn run(api: Arc<dyn AssistantApi>, state: SharedState) {
    let mut lines = input_lines();

    {
        let state = state.lock().await;
        render::render_messages(state.messages());
    }
    render::prompt();

    while let Some(line) = lines.next().await {
        let line = line.trim().to_string();
        if line.is_empty() {
            render::prompt();
            continue;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Back => {
                let mut state = state.lock().await;
                state.apply(Action::Back);
                render::render_messages(state.messages());
            }
            Command::Flow(flow) => {
                open_flow(&state, flow).await;
                if flow == PresetFlow::UserProfile {
                    capture_profile(&mut lines, &state).await;
                }
            }
            Command::Suggestion(index) => {
                let question = {
                    let state = state.lock().await;
                    state.suggested_questions.get(index - 1).cloned()
                };
                match question {
                    Some(question) => send(api.as_ref(), &state, &question).await,
                    None => render::warn(&format!("No suggested question #{index}")),
                }
            }
            Command::Send(text) => send(api.as_ref(), &state, &text).await,
            Command::Unknown(command) => {
                render::warn(&format!(
                    "Unknown command {command}. Try /advice /product /credit /profile /back /quit"
                ));
            }
        }
        render::prompt();
    }
}

async fn open_flow(state: &SharedState, flow: PresetFlow) {
    let mut state = state.lock().await;
    let before = state.messages().len();
    state.apply(Action::OpenFlow(flow));
    render::render_messages(&state.messages()[before..]);
    render::render_info_panel(flow);
}

async fn capture_profile<S>(lines: &mut S, state: &SharedState)
where
    S: Stream<Item = String> + Unpin,
{
    let Some(form) = form_wizard::run(lines).await else {
        render::warn("Profile entry aborted");
        return;
    };

    match form.aggregate() {
        Ok(profile) => {
            let mut state = state.lock().await;
            state.apply(Action::ProfileSubmitted(profile));
            if let Some(message) = state.last_message() {
                render::render_message(message);
            }
        }
        Err(error) => {
            tracing::warn!(%error, "profile form rejected");
            render::warn(&format!("{error} — type /profile to try again"));
        }
    }
}

async fn send(api: &dyn AssistantApi, state: &SharedState, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    render::thinking();
    orchestrator::run_turn(api, state, text).await;

    let state = state.lock().await;
    if let Some(message) = state.last_message() {
        render::render_message(message);
    }
    render::render_suggestions(&state.suggested_questions);
}
