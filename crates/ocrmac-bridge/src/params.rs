//! Recognition parameters and their validation.
//!
//! Parameters are validated when constructed, before any file or platform
//! check runs; a deserialized [`OcrmacParams`] goes through the same
//! validation as one built with [`OcrmacParams::new`].

use crate::backend::RecognitionDirective;
use crate::error::{OcrmacError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum number of preferred languages the Vision framework accepts.
pub const MAX_LANGUAGES: usize = 5;

lazy_static! {
    // IETF BCP 47 shape: language[-Script][-Region], e.g. en, en-US, zh-Hans-CN.
    // Matching is case-insensitive; the caller's casing is preserved.
    static ref LANGUAGE_TAG: Regex =
        Regex::new(r"(?i)^[a-z]{2,3}(-[a-z]{4})?(-[a-z]{2})?$").expect("language tag pattern is valid");
}

/// Recognition level options.
///
/// `Fast`, `Balanced` and `Accurate` select a Vision framework quality level.
/// `LiveText` selects the LiveText framework instead and requires macOS
/// Sonoma (14.0) or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionLevel {
    Fast,
    #[default]
    Balanced,
    Accurate,
    LiveText,
}

impl RecognitionLevel {
    /// String form of the level, as the backend spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Accurate => "accurate",
            Self::LiveText => "livetext",
        }
    }

    /// Map the level onto the backend directive.
    ///
    /// `Balanced` omits the quality parameter entirely, `LiveText` switches
    /// frameworks, and the remaining levels pass their value through.
    pub fn directive(self) -> RecognitionDirective {
        match self {
            Self::Balanced => RecognitionDirective::UseDefault,
            Self::LiveText => RecognitionDirective::LiveText,
            Self::Fast => RecognitionDirective::Quality("fast"),
            Self::Accurate => RecognitionDirective::Quality("accurate"),
        }
    }
}

impl FromStr for RecognitionLevel {
    type Err = OcrmacError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "accurate" => Ok(Self::Accurate),
            "livetext" => Ok(Self::LiveText),
            other => Err(OcrmacError::validation(format!(
                "Invalid recognition level: '{}'. Must be one of: fast, balanced, accurate, livetext",
                other
            ))),
        }
    }
}

/// Validated recognition parameters.
///
/// Immutable once constructed; `languages == None` means "use the backend
/// default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOcrmacParams", into = "RawOcrmacParams")]
pub struct OcrmacParams {
    languages: Option<Vec<String>>,
    recognition_level: RecognitionLevel,
}

impl OcrmacParams {
    /// Construct parameters, validating the language list.
    ///
    /// # Errors
    ///
    /// `OcrmacError::Validation` when the list is empty, has more than
    /// [`MAX_LANGUAGES`] entries, or contains a tag that is not of the shape
    /// `language[-Script][-Region]`.
    pub fn new(recognition_level: RecognitionLevel, languages: Option<Vec<String>>) -> Result<Self> {
        if let Some(languages) = &languages {
            validate_languages(languages)?;
        }
        Ok(Self {
            languages,
            recognition_level,
        })
    }

    /// Parameters with the given level and no language preference.
    pub fn with_level(recognition_level: RecognitionLevel) -> Self {
        Self {
            languages: None,
            recognition_level,
        }
    }

    pub fn recognition_level(&self) -> RecognitionLevel {
        self.recognition_level
    }

    pub fn languages(&self) -> Option<&[String]> {
        self.languages.as_deref()
    }
}

impl Default for OcrmacParams {
    fn default() -> Self {
        Self {
            languages: None,
            recognition_level: RecognitionLevel::Balanced,
        }
    }
}

fn validate_languages(languages: &[String]) -> Result<()> {
    if languages.is_empty() {
        return Err(OcrmacError::validation("At least one language is required when a language list is given"));
    }
    if languages.len() > MAX_LANGUAGES {
        return Err(OcrmacError::validation(format!("Maximum {} languages allowed", MAX_LANGUAGES)));
    }
    for language in languages {
        if !LANGUAGE_TAG.is_match(language) {
            return Err(OcrmacError::validation(format!(
                "Invalid IETF BCP 47 language code: '{}'. Expected format: 'en-US', 'fr-FR', 'zh-Hans'",
                language
            )));
        }
    }
    Ok(())
}

/// Serde mirror of [`OcrmacParams`]; deserialization funnels through
/// [`OcrmacParams::new`] so configs loaded from files keep the invariants.
#[derive(Serialize, Deserialize)]
struct RawOcrmacParams {
    #[serde(default)]
    languages: Option<Vec<String>>,
    #[serde(default)]
    recognition_level: RecognitionLevel,
}

impl TryFrom<RawOcrmacParams> for OcrmacParams {
    type Error = OcrmacError;

    fn try_from(raw: RawOcrmacParams) -> Result<Self> {
        Self::new(raw.recognition_level, raw.languages)
    }
}

impl From<OcrmacParams> for RawOcrmacParams {
    fn from(params: OcrmacParams) -> Self {
        Self {
            languages: params.languages,
            recognition_level: params.recognition_level,
        }
    }
}
