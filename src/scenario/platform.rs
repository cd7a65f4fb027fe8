//! Target platforms and locales known to the redirect service.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Operating system a download is requested for, as passed in the `os` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIterMacro, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Win,
    Osx,
    Linux,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win => "win",
            Platform::Osx => "osx",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locales Firefox ships in, used when no locale list is configured.
pub const FIREFOX_LOCALES: &[&str] = &[
    "ach", "af", "ak", "ar", "as", "ast", "be", "bg", "bn-BD", "bn-IN", "br", "bs", "ca", "cs",
    "csb", "cy", "da", "de", "el", "en-GB", "en-US", "en-ZA", "eo", "es-AR", "es-CL", "es-ES",
    "es-MX", "et", "eu", "fa", "ff", "fi", "fr", "fy-NL", "ga-IE", "gd", "gl", "gu-IN", "he",
    "hi-IN", "hr", "hu", "hy-AM", "id", "is", "it", "ja", "kk", "km", "kn", "ko", "ku", "lg",
    "lij", "lt", "lv", "mai", "mk", "ml", "mr", "nb-NO", "nl", "nn-NO", "nso", "or", "pa-IN",
    "pl", "pt-BR", "pt-PT", "rm", "ro", "ru", "si", "sk", "sl", "son", "sq", "sr", "sv-SE", "ta",
    "ta-LK", "te", "th", "tr", "uk", "vi", "zh-CN", "zh-TW", "zu",
];

/// Locale code the redirect service expects for `lang` on `platform`.
///
/// Japanese has a separate Mac build published as `ja-JP-mac`.
pub fn resolve_locale(lang: &str, platform: Platform) -> &str {
    match (lang, platform) {
        ("ja", Platform::Osx) => "ja-JP-mac",
        _ => lang,
    }
}
