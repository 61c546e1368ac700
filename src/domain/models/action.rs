use super::TranslateRequest;

pub enum Action {
    DetectLanguage(String),
    InitTranslator(),
    TranslateText(TranslateRequest),
}
