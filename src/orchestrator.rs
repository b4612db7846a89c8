//! One send turn: the paired answer/suggestion request cycle.

use tracing::warn;

use crate::api::{AnswerResponse, AssistantApi, normalize_suggestion};
use crate::chat::{Action, SharedState};
use crate::presets;

/// Run one turn for already-trimmed, non-empty user text.
///
/// Both requests are issued together and both are awaited; completion order
/// is never assumed. An answer failure (non-2xx or transport) ends the turn
/// with the generic apology and discards the suggestion outcome. A transport
/// fault on the suggest leg also fails the whole turn; only a non-2xx
/// suggest status is silently ignored, apart from a log line. The loading
/// flag is lowered on every path.
///
/// There is no retry, timeout, or cancellation here; overlapping turns are
/// last-write-wins on the shared state.
pub async fn run_turn(api: &dyn AssistantApi, state: &SharedState, text: &str) {
    let profile = {
        let mut state = state.lock().await;
        state.apply(Action::SendStarted(text.to_string()));
        state.profile.clone()
    };

    let (answer, suggestions) = tokio::join!(
        api.answer(text, profile.as_ref()),
        api.suggest(text, profile.as_ref()),
    );

    let mut state = state.lock().await;
    match (answer, suggestions) {
        (Ok(answer), Ok(suggestions)) => {
            state.apply(Action::AnswerReceived(answer_text(answer)));
            let questions = suggestions
                .suggested_questions
                .iter()
                .map(|question| normalize_suggestion(question))
                .collect();
            state.apply(Action::SuggestionsReceived(questions));
        }
        (Ok(answer), Err(error)) if error.is_status() => {
            // Graceful degradation: the suggestion list just stays empty.
            warn!(%error, "suggestion request failed");
            state.apply(Action::AnswerReceived(answer_text(answer)));
        }
        (Ok(_), Err(error)) => {
            // A transport fault on either leg fails the turn as a whole,
            // even though the answer arrived.
            warn!(%error, "suggestion request failed in transit");
            state.apply(Action::AnswerFailed);
        }
        (Err(error), _) => {
            warn!(%error, "answer request failed");
            state.apply(Action::AnswerFailed);
        }
    }
    state.apply(Action::TurnFinished);
}

fn answer_text(response: AnswerResponse) -> String {
    response
        .answer
        .filter(|answer| !answer.is_empty())
        .unwrap_or_else(|| presets::EMPTY_ANSWER.to_string())
}
