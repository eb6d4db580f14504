//! Localized labels.
//!
//! English is built in; other locales are JSON string tables compiled into
//! the binary. Anything missing falls back to English.

use serde::Deserialize;

pub const FALLBACK_LOCALE: &str = "en";
pub const FALLBACK_TITLE: &str = "Title";

const TABLES: [(&str, &str); 4] = [
    ("ar", include_str!("../../locales/counter-app.ar.json")),
    ("es", include_str!("../../locales/counter-app.es.json")),
    ("hi", include_str!("../../locales/counter-app.hi.json")),
    ("zh", include_str!("../../locales/counter-app.zh.json")),
];

#[derive(Debug, Default, Deserialize)]
struct Catalog {
    title: Option<String>,
}

#[derive(Debug)]
pub struct Localizer {
    locale: String,
    catalog: Catalog,
}

impl Localizer {
    /// Accepts bare language keys ("es") as well as tagged ones ("es-MX",
    /// "es_MX.UTF-8").
    pub fn new(locale: &str) -> Self {
        let language = primary_language(locale);
        let Some((key, raw)) = TABLES.iter().find(|(key, _)| *key == language) else {
            if language != FALLBACK_LOCALE {
                tracing::debug!(locale, "no string table for locale, using English");
            }
            return Self::english();
        };

        match serde_json::from_str::<Catalog>(raw) {
            Ok(catalog) => Self {
                locale: (*key).to_string(),
                catalog,
            },
            Err(err) => {
                tracing::warn!(locale = key, error = %err, "broken string table, using English");
                Self::english()
            }
        }
    }

    fn english() -> Self {
        Self {
            locale: FALLBACK_LOCALE.to_string(),
            catalog: Catalog::default(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn title(&self) -> &str {
        self.catalog.title.as_deref().unwrap_or(FALLBACK_TITLE)
    }

    pub fn available() -> impl Iterator<Item = &'static str> {
        std::iter::once(FALLBACK_LOCALE).chain(TABLES.iter().map(|(key, _)| *key))
    }
}

fn primary_language(locale: &str) -> String {
    locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_builtin() {
        let localizer = Localizer::new("en");
        assert_eq!(localizer.locale(), "en");
        assert_eq!(localizer.title(), "Title");
    }

    #[test]
    fn spanish_table_is_loaded() {
        assert_eq!(Localizer::new("es").title(), "Título");
    }

    #[test]
    fn region_and_encoding_are_ignored() {
        let localizer = Localizer::new("zh_CN.UTF-8");
        assert_eq!(localizer.locale(), "zh");
        assert_eq!(localizer.title(), "标题");
        assert_eq!(Localizer::new("HI-in").title(), "शीर्षक");
    }

    #[test]
    fn unknown_locale_falls_back() {
        let localizer = Localizer::new("fr");
        assert_eq!(localizer.locale(), "en");
        assert_eq!(localizer.title(), FALLBACK_TITLE);
    }

    #[test]
    fn every_table_parses() {
        for (key, raw) in TABLES {
            let catalog: Catalog = serde_json::from_str(raw).unwrap();
            assert!(catalog.title.is_some(), "{key} has no title");
        }
    }

    #[test]
    fn available_lists_all_locales() {
        let locales: Vec<_> = Localizer::available().collect();
        assert_eq!(locales, vec!["en", "ar", "es", "hi", "zh"]);
    }
}
