//! Localized user-facing messages
//!
//! Commands receive a [`Localizer`] explicitly; the install/uninstall core
//! never formats user-facing text and does not depend on the language.

mod catalog;

use std::fmt::Display;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Tr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Tr];

    /// Parse a language code such as `tr`, `en_US` or `tr_TR.UTF-8`
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['_', '.', '@', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Lang::En),
            "tr" => Some(Lang::Tr),
            _ => None,
        }
    }

    /// Language from the standard locale variables, if recognised
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| Self::from_code(&value))
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tr => "tr",
        }
    }

    fn lookup(self, key: MessageKey) -> Option<&'static str> {
        match self {
            Lang::En => Some(catalog::english(key)),
            Lang::Tr => catalog::turkish(key),
        }
    }
}

/// Every user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Installing,
    Extracting,
    InstallComplete,
    InvalidBundlePath,
    DescriptorMissing,
    IconMissing,
    RefreshFailed,
    SourceRemoved,
    SourceRemoveFailed,
    ErrorOccurred,
    Uninstalling,
    NotInstalled,
    ArtifactRemoved,
    ArtifactMissing,
    ArtifactRemoveFailed,
    UninstallComplete,
    LabelBundle,
    LabelLauncher,
    LabelIcon,
    LabelRegistryEntry,
    NoAppsInstalled,
    InstalledHeader,
    UnknownLanguage,
    TranslationSummary,
    TranslationMissing,
}

impl MessageKey {
    pub const ALL: [MessageKey; 25] = [
        MessageKey::Installing,
        MessageKey::Extracting,
        MessageKey::InstallComplete,
        MessageKey::InvalidBundlePath,
        MessageKey::DescriptorMissing,
        MessageKey::IconMissing,
        MessageKey::RefreshFailed,
        MessageKey::SourceRemoved,
        MessageKey::SourceRemoveFailed,
        MessageKey::ErrorOccurred,
        MessageKey::Uninstalling,
        MessageKey::NotInstalled,
        MessageKey::ArtifactRemoved,
        MessageKey::ArtifactMissing,
        MessageKey::ArtifactRemoveFailed,
        MessageKey::UninstallComplete,
        MessageKey::LabelBundle,
        MessageKey::LabelLauncher,
        MessageKey::LabelIcon,
        MessageKey::LabelRegistryEntry,
        MessageKey::NoAppsInstalled,
        MessageKey::InstalledHeader,
        MessageKey::UnknownLanguage,
        MessageKey::TranslationSummary,
        MessageKey::TranslationMissing,
    ];
}

/// Per-language translation coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub lang: Lang,
    pub translated: usize,
    pub total: usize,
    pub missing: Vec<MessageKey>,
}

/// Formats messages in one language, falling back to English
#[derive(Debug, Clone, Copy)]
pub struct Localizer {
    lang: Lang,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(Lang::En)
    }
}

impl Localizer {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Resolve the language from an explicit code, then the environment.
    ///
    /// An unrecognised explicit code is returned alongside the English
    /// localizer so the caller can warn about it.
    pub fn resolve(code: Option<&str>) -> (Self, Option<String>) {
        match code {
            Some(code) => match Lang::from_code(code) {
                Some(lang) => (Self::new(lang), None),
                None => (Self::default(), Some(code.to_string())),
            },
            None => (Self::new(Lang::from_env().unwrap_or(Lang::En)), None),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        self.lang
            .lookup(key)
            .unwrap_or_else(|| catalog::english(key))
    }

    /// Format a message, substituting `{0}`, `{1}`, ... with `args`
    pub fn format(&self, key: MessageKey, args: &[&dyn Display]) -> String {
        args.iter()
            .enumerate()
            .fold(self.text(key).to_string(), |text, (i, arg)| {
                text.replace(&format!("{{{i}}}"), &arg.to_string())
            })
    }
}

/// Translation coverage for every supported language
pub fn coverage() -> Vec<Coverage> {
    Lang::ALL
        .iter()
        .map(|&lang| {
            let missing: Vec<_> = MessageKey::ALL
                .iter()
                .copied()
                .filter(|&key| lang.lookup(key).is_none())
                .collect();
            Coverage {
                lang,
                translated: MessageKey::ALL.len() - missing.len(),
                total: MessageKey::ALL.len(),
                missing,
            }
        })
        .collect()
}
