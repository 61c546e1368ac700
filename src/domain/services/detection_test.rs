use super::Detection;
use crate::domain::models::Language;
use crate::domain::models::LanguageCandidate;

#[test]
fn it_resolves_the_top_candidate() {
    let candidates = vec![
        LanguageCandidate::new("fr", 92.0),
        LanguageCandidate::new("es", 6.0),
    ];
    assert_eq!(Detection::resolve(&candidates), Some(Language::Fr));
}

#[test]
fn it_ranks_by_confidence_regardless_of_order() {
    let candidates = vec![
        LanguageCandidate::new("es", 6.0),
        LanguageCandidate::new("fr", 92.0),
    ];
    assert_eq!(Detection::resolve(&candidates), Some(Language::Fr));
}

#[test]
fn it_never_resolves_unsupported_candidates() {
    let candidates = vec![
        LanguageCandidate::new("de", 99.0),
        LanguageCandidate::new("pt", 1.0),
    ];
    assert_eq!(Detection::resolve(&candidates), Some(Language::Pt));
}

#[test]
fn it_resolves_unknown_when_nothing_is_supported() {
    let candidates = vec![
        LanguageCandidate::new("de", 80.0),
        LanguageCandidate::new("ja", 20.0),
    ];
    assert_eq!(Detection::resolve(&candidates), None);
}

#[test]
fn it_resolves_unknown_for_empty_results() {
    assert_eq!(Detection::resolve(&[]), None);
}
