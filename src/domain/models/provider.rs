use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderName {
    Libre,
    Offline,
}

impl ProviderName {
    pub fn parse(text: String) -> Option<ProviderName> {
        return ProviderName::iter().find(|e| return e.to_string() == text);
    }
}

/// A single entry of a raw detection result. The candidate list is passed to
/// the interaction surface unmodified, filtering and ranking happen there.
#[derive(Clone, Debug, PartialEq)]
pub struct LanguageCandidate {
    pub language: String,
    pub percentage: f64,
}

impl LanguageCandidate {
    pub fn new(language: &str, percentage: f64) -> LanguageCandidate {
        return LanguageCandidate {
            language: language.to_string(),
            percentage,
        };
    }
}

/// Opaque handle to an initialized translator, obtained once at session start
/// and passed back with every translation request. When no handle could be
/// obtained the session runs on the degraded path.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslatorHandle {
    pub provider: String,
    pub languages: Vec<String>,
}

pub struct TranslateRequest {
    pub message_index: usize,
    pub text: String,
    pub target_language: Language,
    pub translator: Option<TranslatorHandle>,
}

impl TranslateRequest {
    pub fn new(
        message_index: usize,
        text: &str,
        target_language: Language,
        translator: Option<TranslatorHandle>,
    ) -> TranslateRequest {
        return TranslateRequest {
            message_index,
            text: text.to_string(),
            target_language,
            translator,
        };
    }
}

#[async_trait]
pub trait Provider {
    /// Returns the name of the provider.
    fn name(&self) -> ProviderName;

    /// Used at startup to verify the provider is reachable. A failing check
    /// switches the session to the offline provider.
    async fn health_check(&self) -> Result<()>;

    /// Asks the host to construct a translator. The returned handle is cached
    /// by the interaction surface and reused for all translation requests.
    async fn init_translator(&self) -> Result<TranslatorHandle>;

    /// Forwards text to the host detection service and returns the raw
    /// candidate list, including languages outside the supported set.
    async fn detect_language(&self, text: &str) -> Result<Vec<LanguageCandidate>>;

    /// Translates the request's text into its target language.
    async fn translate(&self, request: &TranslateRequest) -> Result<String>;
}

pub type ProviderBox = Box<dyn Provider + Send + Sync>;
