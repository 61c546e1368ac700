#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::LanguageCandidate;
use crate::domain::models::ProviderName;
use crate::domain::models::TranslateRequest;
use crate::infrastructure::providers::ProviderManager;

async fn detect_worker(
    provider_name: ProviderName,
    text: String,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = ProviderManager::get(provider_name)?
        .detect_language(&text)
        .await;

    match res {
        Ok(candidates) => {
            tx.send(Event::LanguageDetected(text, candidates))?;
        }
        Err(err) => {
            tracing::error!(err = ?err, "language detection failed");
            tx.send(Event::LanguageDetected(text, Vec::<LanguageCandidate>::new()))?;
        }
    }

    return Ok(());
}

async fn translate_worker(
    provider_name: ProviderName,
    request: TranslateRequest,
    tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let res = ProviderManager::get(provider_name)?
        .translate(&request)
        .await;

    match res {
        Ok(translation) => {
            tx.send(Event::TranslationReady(request.message_index, translation))?;
        }
        Err(err) => {
            tracing::error!(err = ?err, "translation failed");
            tx.send(Event::TranslationReady(
                request.message_index,
                "".to_string(),
            ))?;
        }
    }

    return Ok(());
}

pub struct RelayService {}

impl RelayService {
    /// Bridges the interaction surface to the privileged provider calls. The
    /// relay holds no state between requests, and every request is answered
    /// on the event channel, success or failure.
    pub async fn start(
        provider_name: ProviderName,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut active = provider_name;
        if let Err(err) = ProviderManager::get(active)?.health_check().await {
            tracing::warn!(provider = %active, err = ?err, "provider is unreachable, using offline translations for this session");
            active = ProviderName::Offline;
        }

        loop {
            let action = rx.recv().await;
            if action.is_none() {
                return Ok(());
            }

            let worker_tx = tx.clone();
            match action.unwrap() {
                Action::InitTranslator() => {
                    match ProviderManager::get(active)?.init_translator().await {
                        Ok(handle) => {
                            tx.send(Event::TranslatorInitialized(Some(handle)))?;
                        }
                        Err(err) => {
                            tracing::warn!(err = ?err, "translator initialization failed");
                            tx.send(Event::TranslatorInitialized(None))?;
                        }
                    }
                }
                Action::DetectLanguage(text) => {
                    tokio::spawn(async move {
                        return detect_worker(active, text, &worker_tx).await;
                    });
                }
                Action::TranslateText(request) => {
                    tokio::spawn(async move {
                        return translate_worker(active, request, &worker_tx).await;
                    });
                }
            }
        }
    }
}
