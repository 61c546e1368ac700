#[cfg(test)]
#[path = "libre_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Language;
use crate::domain::models::LanguageCandidate;
use crate::domain::models::Provider;
use crate::domain::models::ProviderName;
use crate::domain::models::TranslateRequest;
use crate::domain::models::TranslatorHandle;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LanguageEntry {
    code: String,
    name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DetectRequest {
    q: String,
    api_key: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DetectResponse {
    confidence: f64,
    language: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TranslationRequest {
    q: String,
    source: String,
    target: String,
    format: String,
    api_key: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TranslationResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Talks to a LibreTranslate compatible API.
pub struct Libre {
    url: String,
    api_key: String,
    timeout: String,
}

impl Default for Libre {
    fn default() -> Libre {
        return Libre {
            url: Config::get(ConfigKey::ProviderURL),
            api_key: Config::get(ConfigKey::ProviderAPIKey),
            timeout: Config::get(ConfigKey::ProviderHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Provider for Libre {
    fn name(&self) -> ProviderName {
        return ProviderName::Libre;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("LibreTranslate URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(format!("{url}/languages", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "LibreTranslate is not reachable");
            bail!("LibreTranslate is not reachable");
        }

        let res = res.unwrap();
        if res.status() != 200 {
            tracing::error!(status = res.status().as_u16(), "LibreTranslate health check failed");
            bail!("LibreTranslate health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn init_translator(&self) -> Result<TranslatorHandle> {
        let res = reqwest::Client::new()
            .get(format!("{url}/languages", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to list languages from LibreTranslate"
            );
            bail!("Failed to list languages from LibreTranslate");
        }

        let entries = res.json::<Vec<LanguageEntry>>().await?;
        let languages = entries
            .iter()
            .filter(|entry| {
                return Language::parse(entry.code.to_string()).is_some();
            })
            .map(|entry| {
                return entry.code.to_string();
            })
            .collect::<Vec<String>>();

        if languages.is_empty() {
            bail!("LibreTranslate serves none of the supported languages");
        }

        return Ok(TranslatorHandle {
            provider: self.name().to_string(),
            languages,
        });
    }

    #[allow(clippy::implicit_return)]
    async fn detect_language(&self, text: &str) -> Result<Vec<LanguageCandidate>> {
        let req = DetectRequest {
            q: text.to_string(),
            api_key: self.api_key.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/detect", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make detection request to LibreTranslate"
            );
            bail!("Failed to make detection request to LibreTranslate");
        }

        let candidates = res
            .json::<Vec<DetectResponse>>()
            .await?
            .iter()
            .map(|entry| {
                return LanguageCandidate::new(&entry.language, entry.confidence);
            })
            .collect::<Vec<LanguageCandidate>>();

        return Ok(candidates);
    }

    #[allow(clippy::implicit_return)]
    async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        let target = request.target_language.to_string();
        if let Some(translator) = &request.translator {
            if !translator.languages.contains(&target) {
                bail!(format!("The translator does not serve {target}"));
            }
        }

        let req = TranslationRequest {
            q: request.text.to_string(),
            source: "auto".to_string(),
            target,
            format: "text".to_string(),
            api_key: self.api_key.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/translate", url = self.url))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make translation request to LibreTranslate"
            );
            bail!("Failed to make translation request to LibreTranslate");
        }

        let translation = res.json::<TranslationResponse>().await?;

        return Ok(translation.translated_text);
    }
}
