use test_utils::long_text_fixture;

use super::Author;
use super::Language;
use super::Message;
use super::MessageType;
use super::SUMMARY_THRESHOLD;

#[test]
fn it_executes_new() {
    let msg = Message::new(Author::Polyglot, "Hi there!");
    assert_eq!(msg.author, Author::Polyglot);
    assert_eq!(msg.author.to_string(), "Polyglot");
    assert_eq!(msg.text, "Hi there!".to_string());
    assert_eq!(msg.message_type(), MessageType::Normal);
    assert_eq!(msg.detected_language, None);
    assert!(!msg.has_summary());
    assert_eq!(msg.translation, "".to_string());
}

#[test]
fn it_executes_new_with_type() {
    let msg = Message::new_with_type(Author::Polyglot, MessageType::Error, "It broke!");
    assert_eq!(msg.author, Author::Polyglot);
    assert_eq!(msg.text, "It broke!".to_string());
    assert_eq!(msg.message_type(), MessageType::Error);
}

#[test]
fn it_keeps_submitted_text_verbatim() {
    let msg = Message::new_submission("\thello\nworld  ", Some(Language::En));
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.text, "\thello\nworld  ".to_string());
    assert_eq!(msg.detected_language, Some(Language::En));
}

#[test]
fn it_skips_summaries_for_short_submissions() {
    let msg = Message::new_submission("Bonjour le monde", Some(Language::Fr));
    assert!(!msg.has_summary());
    assert_eq!(msg.summary, "".to_string());
}

#[test]
fn it_skips_summaries_at_the_threshold() {
    let text = "a".repeat(SUMMARY_THRESHOLD);
    let msg = Message::new_submission(&text, None);
    assert!(!msg.has_summary());
}

#[test]
fn it_summarizes_long_submissions() {
    let text = long_text_fixture();
    assert!(text.chars().count() > SUMMARY_THRESHOLD);

    let msg = Message::new_submission(text, Some(Language::En));
    let expected = format!(
        "{}...",
        text.chars().take(SUMMARY_THRESHOLD).collect::<String>()
    );

    assert!(msg.has_summary());
    assert_eq!(msg.summary, expected);
}

#[test]
fn it_summarizes_multibyte_submissions_on_character_boundaries() {
    let text = "é".repeat(SUMMARY_THRESHOLD + 1);
    let msg = Message::new_submission(&text, None);
    assert_eq!(msg.summary, format!("{}...", "é".repeat(SUMMARY_THRESHOLD)));
}

#[test]
fn it_replaces_previous_translations() {
    let mut msg = Message::new_submission("hello", Some(Language::En));
    msg.set_translation("hola");
    assert_eq!(msg.translation, "hola".to_string());

    msg.set_translation("olá");
    assert_eq!(msg.translation, "olá".to_string());
}
