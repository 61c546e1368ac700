#[cfg(test)]
#[path = "detection_test.rs"]
mod tests;

use crate::domain::models::Language;
use crate::domain::models::LanguageCandidate;

pub struct Detection {}

impl Detection {
    /// Picks the detected language from a raw detector result. Candidates
    /// outside the supported set are dropped, the rest are ranked by
    /// descending confidence. `None` is the unknown sentinel.
    pub fn resolve(candidates: &[LanguageCandidate]) -> Option<Language> {
        let mut supported = candidates
            .iter()
            .filter_map(|candidate| {
                return Language::parse(candidate.language.to_string())
                    .map(|language| return (language, candidate.percentage));
            })
            .collect::<Vec<(Language, f64)>>();

        supported.sort_by(|a, b| return b.1.total_cmp(&a.1));

        return supported.first().map(|entry| return entry.0);
    }
}
