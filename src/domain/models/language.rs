#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// The closed set of languages translations can target. Detection results
/// outside this set are treated as unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    Pt,
    Es,
    Ru,
    Tr,
    Fr,
}

impl Language {
    /// Accepts either a two letter code or a display name, case insensitive.
    pub fn parse(text: String) -> Option<Language> {
        let needle = text.trim().to_lowercase();
        return Language::iter().find(|language| {
            return language.to_string() == needle
                || language.display_name().to_lowercase() == needle;
        });
    }

    pub fn display_name(&self) -> String {
        let res = match self {
            Language::En => "English",
            Language::Pt => "Portuguese",
            Language::Es => "Spanish",
            Language::Ru => "Russian",
            Language::Tr => "Turkish",
            Language::Fr => "French",
        };

        return res.to_string();
    }
}
