// src/domain/locale/localization.rs
use super::value_objects::{Locale, LocaleOption};
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;

/// Site-wide locale settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    default_locale: Locale,
    fallback: bool,
    locales: Vec<Locale>,
}

impl Localization {
    pub fn new(default_locale: Locale, fallback: bool, locales: Vec<Locale>) -> DomainResult<Self> {
        if !locales.contains(&default_locale) {
            return Err(DomainError::Validation(format!(
                "default locale '{default_locale}' is not among the configured locales"
            )));
        }
        Ok(Self {
            default_locale,
            fallback,
            locales,
        })
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn fallback(&self) -> bool {
        self.fallback
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn supports(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }

    /// Locale for a request: the requested one when configured, otherwise the
    /// default.
    pub fn resolve(&self, requested: Option<&str>) -> Locale {
        requested
            .and_then(|code| code.parse::<Locale>().ok())
            .filter(|locale| self.supports(*locale))
            .unwrap_or(self.default_locale)
    }

    /// Strict variant used for locale path segments.
    pub fn require(&self, code: &str) -> DomainResult<Locale> {
        let locale: Locale = code.parse()?;
        if self.supports(locale) {
            Ok(locale)
        } else {
            Err(DomainError::NotFound(format!("locale '{locale}' is not enabled")))
        }
    }

    /// Switcher entries, ordered by label.
    pub fn switcher_options(&self) -> Vec<LocaleOption> {
        let mut options: Vec<LocaleOption> =
            self.locales.iter().copied().map(LocaleOption::from).collect();
        options.sort_by(|a, b| a.label.cmp(b.label));
        options
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            default_locale: Locale::Uk,
            fallback: true,
            locales: Locale::ALL.to_vec(),
        }
    }
}

/// Per-locale values of a localized field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized<T> {
    values: BTreeMap<Locale, T>,
}

impl<T> Localized<T> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn single(locale: Locale, value: T) -> Self {
        let mut values = BTreeMap::new();
        values.insert(locale, value);
        Self { values }
    }

    pub fn set(&mut self, locale: Locale, value: T) {
        self.values.insert(locale, value);
    }

    pub fn exact(&self, locale: Locale) -> Option<&T> {
        self.values.get(&locale)
    }

    /// Value for `locale`, falling back to the default locale when allowed.
    /// Returns the locale that was actually served.
    pub fn get(&self, locale: Locale, localization: &Localization) -> Option<(Locale, &T)> {
        if let Some(value) = self.values.get(&locale) {
            return Some((locale, value));
        }
        if localization.fallback() {
            let default = localization.default_locale();
            return self.values.get(&default).map(|value| (default, value));
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        self.values.iter().map(|(locale, value)| (*locale, value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> Default for Localized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Locale, T)> for Localized<T> {
    fn from_iter<I: IntoIterator<Item = (Locale, T)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_default() {
        let l10n = Localization::default();
        assert_eq!(l10n.resolve(Some("en")), Locale::En);
        assert_eq!(l10n.resolve(Some("fr")), Locale::Uk);
        assert_eq!(l10n.resolve(None), Locale::Uk);
    }

    #[test]
    fn require_rejects_disabled_locales() {
        let l10n = Localization::new(Locale::Uk, true, vec![Locale::Uk]).unwrap();
        assert_eq!(l10n.require("uk").unwrap(), Locale::Uk);
        assert!(matches!(l10n.require("en"), Err(DomainError::NotFound(_))));
        assert!(matches!(l10n.require("xx"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn default_must_be_configured() {
        assert!(Localization::new(Locale::En, true, vec![Locale::Uk]).is_err());
    }

    #[test]
    fn switcher_is_sorted_by_label() {
        let options = Localization::default().switcher_options();
        let codes: Vec<_> = options.iter().map(|o| o.code).collect();
        assert_eq!(codes, vec!["en", "uk"]);
    }

    #[test]
    fn localized_value_falls_back() {
        let l10n = Localization::default();
        let title = Localized::single(Locale::Uk, "Про нас");
        assert_eq!(title.get(Locale::En, &l10n), Some((Locale::Uk, &"Про нас")));
        assert_eq!(title.get(Locale::Uk, &l10n), Some((Locale::Uk, &"Про нас")));
    }

    #[test]
    fn localized_value_without_fallback() {
        let l10n = Localization::new(Locale::Uk, false, Locale::ALL.to_vec()).unwrap();
        let title = Localized::single(Locale::Uk, "Про нас");
        assert_eq!(title.get(Locale::En, &l10n), None);
    }
}
