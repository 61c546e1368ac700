use super::BubbleList;
use crate::domain::models::Author;
use crate::domain::models::Language;
use crate::domain::models::Message;

#[test]
fn it_counts_lines_for_submissions() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![Message::new_submission("hello", Some(Language::En))];

    bubble_list.set_messages(&messages, 100);

    // Borders, text, and the detection annotation.
    assert_eq!(bubble_list.len(), 4);
}

#[test]
fn it_recomputes_entries_when_translations_arrive() {
    let mut bubble_list = BubbleList::new();
    let mut messages = vec![
        Message::new_submission("hello", Some(Language::En)),
        Message::new(Author::Polyglot, "Hi there!"),
    ];
    bubble_list.set_messages(&messages, 100);
    let before = bubble_list.len();

    messages[0].set_translation("hola");
    bubble_list.set_messages(&messages, 100);

    assert_eq!(bubble_list.len(), before + 1);
}

#[test]
fn it_recomputes_entries_when_the_width_changes() {
    let mut bubble_list = BubbleList::new();
    let messages = vec![Message::new_submission(
        "This is a really long line that pushes the boundaries of the window width across the screen.",
        Some(Language::En),
    )];

    bubble_list.set_messages(&messages, 100);
    let wide = bubble_list.len();

    bubble_list.set_messages(&messages, 40);
    let narrow = bubble_list.len();

    assert!(narrow > wide);
}
