use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::RelayService;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::models::ProviderName;
use crate::domain::models::TranslateRequest;
use crate::domain::services::AppState;

fn start_offline_relay() -> (
    mpsc::UnboundedSender<Action>,
    mpsc::UnboundedReceiver<Event>,
) {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    tokio::spawn(async move {
        return RelayService::start(ProviderName::Offline, event_tx, &mut action_rx).await;
    });

    return (action_tx, event_rx);
}

#[tokio::test]
async fn it_answers_init_translator_without_a_handle_offline() -> Result<()> {
    let (action_tx, mut event_rx) = start_offline_relay();

    action_tx.send(Action::InitTranslator())?;

    match event_rx.recv().await.unwrap() {
        Event::TranslatorInitialized(handle) => {
            assert!(handle.is_none());
        }
        _ => bail!("Wrong event from recv"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_answers_detection_requests_with_raw_candidates() -> Result<()> {
    let (action_tx, mut event_rx) = start_offline_relay();

    action_tx.send(Action::DetectLanguage("Bonjour le monde".to_string()))?;

    match event_rx.recv().await.unwrap() {
        Event::LanguageDetected(text, candidates) => {
            assert_eq!(text, "Bonjour le monde".to_string());
            assert!(candidates.is_empty());
        }
        _ => bail!("Wrong event from recv"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_answers_translation_requests() -> Result<()> {
    let (action_tx, mut event_rx) = start_offline_relay();

    action_tx.send(Action::TranslateText(TranslateRequest::new(
        0,
        "hello",
        Language::Es,
        None,
    )))?;

    match event_rx.recv().await.unwrap() {
        Event::TranslationReady(index, translation) => {
            assert_eq!(index, 0);
            assert_eq!(translation, "[es] hello".to_string());
        }
        _ => bail!("Wrong event from recv"),
    }

    return Ok(());
}

#[tokio::test]
async fn it_runs_a_submission_through_detection_and_translation() -> Result<()> {
    let (action_tx, mut event_rx) = start_offline_relay();
    let mut app_state = AppState::default();

    app_state.submit_message("Bonjour le monde", &action_tx)?;
    match event_rx.recv().await.unwrap() {
        Event::LanguageDetected(text, candidates) => {
            app_state.handle_language_detected(&text, &candidates);
        }
        _ => bail!("Wrong event from recv"),
    }

    assert_eq!(app_state.messages.len(), 1);
    assert_eq!(app_state.messages[0].text, "Bonjour le monde".to_string());
    // The offline provider yields no candidates.
    assert_eq!(app_state.messages[0].detected_language, None);

    app_state.handle_slash_commands("/translate", &action_tx)?;
    match event_rx.recv().await.unwrap() {
        Event::TranslationReady(index, translation) => {
            app_state.handle_translation_ready(index, translation);
        }
        _ => bail!("Wrong event from recv"),
    }

    assert_eq!(
        app_state.messages[0].translation,
        "[en] Bonjour le monde".to_string()
    );

    return Ok(());
}

#[tokio::test]
async fn it_keeps_translation_requests_independent() -> Result<()> {
    let (action_tx, mut event_rx) = start_offline_relay();

    action_tx.send(Action::TranslateText(TranslateRequest::new(
        3,
        "hello",
        Language::Fr,
        None,
    )))?;

    match event_rx.recv().await.unwrap() {
        Event::TranslationReady(index, translation) => {
            assert_eq!(index, 3);
            assert_eq!(translation, "[fr] hello".to_string());
        }
        _ => bail!("Wrong event from recv"),
    }

    return Ok(());
}
