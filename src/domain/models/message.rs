#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Author;
use super::Language;

/// Submissions longer than this many characters get a derived summary.
pub const SUMMARY_THRESHOLD: usize = 150;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
}

#[derive(Clone)]
pub struct Message {
    pub author: Author,
    pub text: String,
    pub detected_language: Option<Language>,
    pub summary: String,
    pub translation: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string(),
            detected_language: None,
            summary: "".to_string(),
            translation: "".to_string(),
            mtype: MessageType::Normal,
        };
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string(),
            detected_language: None,
            summary: "".to_string(),
            translation: "".to_string(),
            mtype,
        };
    }

    /// Builds a conversation entry for submitted text. The summary is derived
    /// once here, the detected language is never updated afterwards.
    pub fn new_submission(text: &str, detected_language: Option<Language>) -> Message {
        return Message {
            author: Author::User,
            text: text.to_string(),
            detected_language,
            summary: summarize(text),
            translation: "".to_string(),
            mtype: MessageType::Normal,
        };
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn has_summary(&self) -> bool {
        return !self.summary.is_empty();
    }

    /// Replaces any previously stored translation.
    pub fn set_translation(&mut self, translation: &str) {
        self.translation = translation.to_string();
    }
}

fn summarize(text: &str) -> String {
    if text.chars().count() <= SUMMARY_THRESHOLD {
        return "".to_string();
    }

    let head = text.chars().take(SUMMARY_THRESHOLD).collect::<String>();
    return format!("{head}...");
}
