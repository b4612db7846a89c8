//! Rendering helpers: chat content on stdout, chrome on stderr.

use crate::chat::{Message, PresetFlow, Sender};
use crate::presets;

pub fn prompt() {
    eprint!("> ");
}

pub fn thinking() {
    eprintln!("⏳ Thinking...");
}

pub fn render_message(msg: &Message) {
    match msg.sender {
        Sender::User => println!("🧑 {}", msg.text),
        Sender::Bot => println!("🤖 {}\n", msg.text),
    }
}

pub fn render_messages(messages: &[Message]) {
    for msg in messages {
        render_message(msg);
    }
}

pub fn render_info_panel(flow: PresetFlow) {
    println!("{}\n", presets::info_panel(flow));
}

/// Numbered suggestion chips; typing a bare number asks that question.
pub fn render_suggestions(questions: &[String]) {
    if questions.is_empty() {
        return;
    }
    eprintln!("💡 Suggested questions (type the number to ask):");
    for (index, question) in questions.iter().enumerate() {
        eprintln!("   {}. {}", index + 1, question);
    }
}

pub fn warn(text: &str) {
    eprintln!("⚠️  {text}");
}
