use anyhow::Result;

use super::DetectResponse;
use super::LanguageEntry;
use super::Libre;
use super::TranslationResponse;
use crate::domain::models::Language;
use crate::domain::models::LanguageCandidate;
use crate::domain::models::Provider;
use crate::domain::models::TranslateRequest;
use crate::domain::models::TranslatorHandle;

impl Libre {
    fn with_url(url: String) -> Libre {
        return Libre {
            url,
            api_key: "".to_string(),
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/languages").with_status(200).create();

    let provider = Libre::with_url(server.url());
    let res = provider.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/languages").with_status(500).create();

    let provider = Libre::with_url(server.url());
    let res = provider.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_initializes_a_translator_with_supported_languages() -> Result<()> {
    let body = serde_json::to_string(&vec![
        LanguageEntry {
            code: "en".to_string(),
            name: "English".to_string(),
        },
        LanguageEntry {
            code: "de".to_string(),
            name: "German".to_string(),
        },
        LanguageEntry {
            code: "es".to_string(),
            name: "Spanish".to_string(),
        },
    ])?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/languages")
        .with_status(200)
        .with_body(body)
        .create();

    let provider = Libre::with_url(server.url());
    let handle = provider.init_translator().await?;

    assert_eq!(handle.provider, "libre".to_string());
    assert_eq!(handle.languages, vec!["en".to_string(), "es".to_string()]);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_translator_init_without_supported_languages() -> Result<()> {
    let body = serde_json::to_string(&vec![LanguageEntry {
        code: "de".to_string(),
        name: "German".to_string(),
    }])?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/languages")
        .with_status(200)
        .with_body(body)
        .create();

    let provider = Libre::with_url(server.url());
    let res = provider.init_translator().await;

    assert!(res.is_err());
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_returns_raw_detection_candidates() -> Result<()> {
    let body = serde_json::to_string(&vec![
        DetectResponse {
            confidence: 92.0,
            language: "fr".to_string(),
        },
        DetectResponse {
            confidence: 6.0,
            language: "de".to_string(),
        },
    ])?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/detect")
        .with_status(200)
        .with_body(body)
        .create();

    let provider = Libre::with_url(server.url());
    let candidates = provider.detect_language("Bonjour le monde").await?;

    assert_eq!(
        candidates,
        vec![
            LanguageCandidate::new("fr", 92.0),
            LanguageCandidate::new("de", 6.0),
        ]
    );
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_detection_on_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/detect").with_status(500).create();

    let provider = Libre::with_url(server.url());
    let res = provider.detect_language("Bonjour le monde").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_translates_text() -> Result<()> {
    let body = serde_json::to_string(&TranslationResponse {
        translated_text: "Hello world".to_string(),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/translate")
        .with_status(200)
        .with_body(body)
        .create();

    let provider = Libre::with_url(server.url());
    let request = TranslateRequest::new(0, "Bonjour le monde", Language::En, None);
    let res = provider.translate(&request).await?;

    assert_eq!(res, "Hello world".to_string());
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_translations_on_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/translate").with_status(500).create();

    let provider = Libre::with_url(server.url());
    let request = TranslateRequest::new(0, "Bonjour le monde", Language::En, None);
    let res = provider.translate(&request).await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_refuses_targets_outside_the_translator_handle() {
    let provider = Libre::with_url("http://localhost:1".to_string());
    let handle = TranslatorHandle {
        provider: "libre".to_string(),
        languages: vec!["en".to_string()],
    };
    let request = TranslateRequest::new(0, "hello", Language::Tr, Some(handle));

    let res = provider.translate(&request).await;

    assert!(res.is_err());
}
