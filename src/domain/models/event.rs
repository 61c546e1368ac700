use tui_textarea::Input;

use super::LanguageCandidate;
use super::TranslatorHandle;

pub enum Event {
    LanguageDetected(String, Vec<LanguageCandidate>),
    TranslationReady(usize, String),
    TranslatorInitialized(Option<TranslatorHandle>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
