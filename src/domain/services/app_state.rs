#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::BubbleList;
use super::Detection;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::Language;
use crate::domain::models::LanguageCandidate;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SlashCommand;
use crate::domain::models::TranslateRequest;
use crate::domain::models::TranslatorHandle;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /translate (/t) [MESSAGE_NUMBER?] - Translates a message into the selected target language. Defaults to your latest message when no number is given.
- /language (/lang, /l) [LANGUAGE] - Selects the target language for future translations. Accepts a two letter code or a name, e.g. `es` or `Spanish`.
- /languages (/ll) - Lists all supported target languages.
- /quit /exit (/q) - Exit Polyglot.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

pub struct AppState<'a> {
    pub bubble_list: BubbleList<'a>,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub messages: Vec<Message>,
    pub scroll: Scroll,
    pub target_language: Language,
    pub translator: Option<TranslatorHandle>,
    pub waiting_for_detection: bool,
}

impl<'a> AppState<'a> {
    pub fn new(target_language: Language) -> AppState<'a> {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(),
            last_known_height: 0,
            last_known_width: 0,
            messages: vec![],
            scroll: Scroll::default(),
            target_language,
            translator: None,
            waiting_for_detection: false,
        };

        // Dependants sync on the first draw once the terminal size is known.
        app_state.messages.push(Message::new(
            Author::Polyglot,
            "Hey there! Send me some text and I'll figure out what language it is. Run /help to see everything I can do.",
        ));

        return app_state;
    }

    /// Returns (should_break, should_continue) for the UI loop. (false,
    /// false) means the input was not a command and should be submitted.
    pub fn handle_slash_commands(
        &mut self,
        input_str: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        if let Some(command) = SlashCommand::parse(input_str) {
            if command.is_quit() {
                return Ok((true, false));
            }

            if command.is_help() {
                self.add_message(Message::new(Author::Polyglot, &help_text()));
                return Ok((false, true));
            }

            if command.is_language_list() {
                self.list_languages();
                return Ok((false, true));
            }

            if command.is_language_set() {
                self.select_language(&command.args);
                return Ok((false, true));
            }

            if command.is_translate() {
                self.request_translation(&command.args, tx)?;
                return Ok((false, true));
            }
        }

        return Ok((false, false));
    }

    /// Kicks off language detection for submitted text. Whitespace-only
    /// submissions are ignored without any state change.
    pub fn submit_message(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        self.waiting_for_detection = true;
        tx.send(Action::DetectLanguage(text.to_string()))?;

        return Ok(());
    }

    /// Completes a submission once the raw detection result arrives.
    pub fn handle_language_detected(&mut self, text: &str, candidates: &[LanguageCandidate]) {
        let detected_language = Detection::resolve(candidates);
        self.waiting_for_detection = false;
        self.add_message(Message::new_submission(text, detected_language));
    }

    /// Stores a completed translation on its message. Only the translation
    /// field of the targeted message changes.
    pub fn handle_translation_ready(&mut self, index: usize, translation: String) {
        self.messages[index].set_translation(&translation);
        self.sync_dependants();
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.sync_dependants();
        self.scroll.last();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn list_languages(&mut self) {
        let res = Language::iter()
            .map(|language| {
                let mut line = format!("- {} ({language})", language.display_name());
                if language == self.target_language {
                    line = format!("{line} [selected]");
                }
                return line;
            })
            .collect::<Vec<String>>()
            .join("\n");

        self.add_message(Message::new(
            Author::Polyglot,
            &format!("I can translate into the following languages:\n{res}"),
        ));
    }

    fn select_language(&mut self, args: &[String]) {
        if args.is_empty() {
            self.add_message(Message::new_with_type(
                Author::Polyglot,
                MessageType::Error,
                "You must specify a language with `/language` or `/l`. Run `/help` for more details.",
            ));
            return;
        }

        let text = args.join(" ");
        if let Some(language) = Language::parse(text.to_string()) {
            self.target_language = language;
            self.add_message(Message::new(
                Author::Polyglot,
                &format!(
                    "Now translating into {} ({language}).",
                    language.display_name()
                ),
            ));
        } else {
            self.add_message(Message::new_with_type(
                Author::Polyglot,
                MessageType::Error,
                &format!("{text} is not a supported language. Run `/languages` to see the full list."),
            ));
        }
    }

    fn request_translation(
        &mut self,
        args: &[String],
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        let submissions = self
            .messages
            .iter()
            .enumerate()
            .filter(|(_, message)| return message.author == Author::User)
            .map(|(idx, _)| return idx)
            .collect::<Vec<usize>>();

        if submissions.is_empty() {
            self.add_message(Message::new_with_type(
                Author::Polyglot,
                MessageType::Error,
                "There is nothing to translate yet. Send some text first.",
            ));
            return Ok(());
        }

        let mut index = *submissions.last().unwrap();
        if let Some(arg) = args.first() {
            let number_res = arg.parse::<usize>();
            if number_res.is_err() {
                self.add_message(Message::new_with_type(
                    Author::Polyglot,
                    MessageType::Error,
                    &format!("{arg} is not a valid message number."),
                ));
                return Ok(());
            }

            let number = number_res.unwrap();
            if number < 1 || number > submissions.len() {
                self.add_message(Message::new_with_type(
                    Author::Polyglot,
                    MessageType::Error,
                    &format!("{number} is out of bounds."),
                ));
                return Ok(());
            }

            index = submissions[number - 1];
        }

        let request = TranslateRequest::new(
            index,
            &self.messages[index].text,
            self.target_language,
            self.translator.clone(),
        );
        tx.send(Action::TranslateText(request))?;

        return Ok(());
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(&self.messages, self.last_known_width);

        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);

        if self.waiting_for_detection {
            self.scroll.last();
        }
    }
}
