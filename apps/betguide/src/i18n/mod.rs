//! Per-request language and site context.

pub mod messages;

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::config::site::SiteConfig;

pub use messages::Messages;

/// Query parameter that selects the language.
pub const LANG_PARAM: &str = "lang";
/// Cookie that remembers the visitor's language.
pub const LANG_COOKIE: &str = "preferredLanguage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Es,
    Fr,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::Es, Self::Fr, Self::De];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
        }
    }

    /// Case-insensitive; `None` for unsupported codes.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    pub fn messages(&self) -> &'static Messages {
        messages::for_language(*self)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// Language and site name, built per request and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    pub language: Language,
    pub site_name: String,
}

impl SiteContext {
    pub fn new(language: Language, site: &SiteConfig) -> Self {
        Self {
            language,
            site_name: site.site_name.clone(),
        }
    }

    /// Resolve the language from an explicit choice, then a remembered one,
    /// then the default. Unsupported codes are skipped.
    pub fn resolve(explicit: Option<&str>, remembered: Option<&str>, site: &SiteConfig) -> Self {
        let language = explicit
            .and_then(Language::parse)
            .or_else(|| remembered.and_then(Language::parse))
            .unwrap_or_default();
        Self::new(language, site)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn messages(&self) -> &'static Messages {
        self.language.messages()
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new(Language::default(), &SiteConfig::default())
    }
}
