#[cfg(test)]
#[path = "offline_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::LanguageCandidate;
use crate::domain::models::Provider;
use crate::domain::models::ProviderName;
use crate::domain::models::TranslateRequest;
use crate::domain::models::TranslatorHandle;

/// Stands in when no translation host is reachable. Detection yields no
/// candidates and translations are clearly marked placeholders, so every
/// action still produces something to display.
#[derive(Default)]
pub struct Offline {}

#[async_trait]
impl Provider for Offline {
    fn name(&self) -> ProviderName {
        return ProviderName::Offline;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn init_translator(&self) -> Result<TranslatorHandle> {
        bail!("The offline provider does not expose a translator")
    }

    #[allow(clippy::implicit_return)]
    async fn detect_language(&self, _text: &str) -> Result<Vec<LanguageCandidate>> {
        return Ok(vec![]);
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        return Ok(format!(
            "[{}] {}",
            request.target_language, request.text
        ));
    }
}
