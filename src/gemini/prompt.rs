//! Prompt sent to the completion API for every question.

const GRAMMAR_TUTOR_PROMPT: &str =
    "You are an English learning assistant. Answer this question about English grammar and usage: ";

/// Embed the user's question in the tutor instructions. The question
/// is passed through as-is.
pub fn grammar_question(question: &str) -> String {
    format!("{}{}", GRAMMAR_TUTOR_PROMPT, question)
}
