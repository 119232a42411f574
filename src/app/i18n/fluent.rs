// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    eprintln!("[i18n] Failed to parse {filename}: {errors:?}");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Isolation marks would show up as stray glyphs in canvas labels.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                eprintln!("[i18n] Conflicting messages in {filename}: {errors:?}");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting named arguments.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang.as_deref(), config_lang, os_lang.as_deref()];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then the first locale sharing the language subtag.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("zh-CN")]
    }

    #[test]
    fn cli_language_wins() {
        let lang = resolve_locale(
            Some("zh-CN".to_string()),
            Some("en-US"),
            Some("en-US".to_string()),
            &available(),
        );
        assert_eq!(lang, Some(langid!("zh-CN")));
    }

    #[test]
    fn config_language_used_without_cli() {
        let lang = resolve_locale(None, Some("zh-CN"), Some("en-US".to_string()), &available());
        assert_eq!(lang, Some(langid!("zh-CN")));
    }

    #[test]
    fn os_locale_is_last_resort() {
        let lang = resolve_locale(None, None, Some("zh-CN".to_string()), &available());
        assert_eq!(lang, Some(langid!("zh-CN")));
    }

    #[test]
    fn language_subtag_matches_regional_variant() {
        let lang = resolve_locale(Some("zh".to_string()), None, None, &available());
        assert_eq!(lang, Some(langid!("zh-CN")));
    }

    #[test]
    fn unknown_languages_resolve_to_none() {
        let lang = resolve_locale(Some("fr".to_string()), Some("de"), None, &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("zh-CN")));
    }

    #[test]
    fn element_names_are_translated() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("element-eye-left"), "Left eye");
        assert_eq!(i18n.tr("element-mouth"), "Mouth");

        i18n.set_locale(langid!("zh-CN"));
        assert_eq!(i18n.tr("element-eye-left"), "左眼");
        assert_eq!(i18n.tr("element-eye-right"), "右眼");
        assert_eq!(i18n.tr("element-mouth"), "嘴巴");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale(langid!("fr-FR"));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("selected-position", &[("x", "200"), ("y", "150")]);
        assert_eq!(text, "Position: (200, 150)");
    }
}
