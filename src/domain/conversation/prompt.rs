//! Prompt assembly for free chat and reply extraction.
//!
//! The generator is a plain text-completion model, so the conversation is
//! flattened into `User:` / `Assistant:` lines and the model continues after
//! a trailing `Assistant:` marker.

use super::transcript::TranscriptEntry;

/// Marker the model's continuation follows.
pub const ASSISTANT_MARKER: &str = "Assistant:";

/// Sampling temperature for chat replies.
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Upper bound on generated tokens per chat reply.
pub const CHAT_MAX_NEW_TOKENS: u32 = 200;

/// Renders prior history plus the new user message into a single prompt.
pub fn build_chat_prompt(history: &[TranscriptEntry], message: &str) -> String {
    let mut prompt = String::new();
    for entry in history {
        prompt.push_str(entry.speaker().prompt_label());
        prompt.push_str(": ");
        prompt.push_str(entry.text());
        prompt.push('\n');
    }
    prompt.push_str("User: ");
    prompt.push_str(message);
    prompt.push('\n');
    prompt.push_str(ASSISTANT_MARKER);
    prompt
}

/// Extracts the assistant's contribution from generated text.
///
/// Everything after the last `Assistant:` marker, trimmed. Text without any
/// marker is returned trimmed as a whole.
pub fn extract_reply(generated: &str) -> String {
    generated
        .rsplit_once(ASSISTANT_MARKER)
        .map(|(_, reply)| reply)
        .unwrap_or(generated)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{Speaker, Transcript};

    #[test]
    fn empty_history_produces_single_turn() {
        assert_eq!(build_chat_prompt(&[], "hello"), "User: hello\nAssistant:");
    }

    #[test]
    fn history_is_rendered_in_order() {
        let mut transcript = Transcript::new();
        transcript.append(Speaker::Assistant, "Hi there");
        transcript.append(Speaker::User, "I feel tired");
        transcript.append(Speaker::Assistant, "Tell me more");

        let prompt = build_chat_prompt(transcript.entries(), "It's work");

        assert_eq!(
            prompt,
            "Assistant: Hi there\nUser: I feel tired\nAssistant: Tell me more\nUser: It's work\nAssistant:"
        );
    }

    #[test]
    fn extract_reply_takes_text_after_last_marker() {
        let generated = "User: hi\nAssistant: hello\nUser: how?\nAssistant:  Like this.  ";
        assert_eq!(extract_reply(generated), "Like this.");
    }

    #[test]
    fn extract_reply_without_marker_returns_trimmed_text() {
        assert_eq!(extract_reply("  just text \n"), "just text");
    }

    #[test]
    fn extract_reply_with_trailing_marker_is_empty() {
        assert_eq!(extract_reply("User: hi\nAssistant:"), "");
    }
}
