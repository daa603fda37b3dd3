use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// Languages offered in the form dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetLanguage {
    French,
    Spanish,
    German,
    Hindi,
    Arabic,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::French,
        TargetLanguage::Spanish,
        TargetLanguage::German,
        TargetLanguage::Hindi,
        TargetLanguage::Arabic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::French => "French",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::German => "German",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TranslateError::validation(format!("Unsupported target language: {}", s)))
    }
}

impl TryFrom<String> for TargetLanguage {
    type Error = TranslateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetLanguage> for String {
    fn from(lang: TargetLanguage) -> Self {
        lang.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: TargetLanguage,
}

impl TranslateRequest {
    pub fn new(text: impl Into<String>, target_language: TargetLanguage) -> Self {
        Self {
            text: text.into(),
            target_language,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub target_language: String,
    pub translated_text: String,
    pub translated_at: DateTime<Utc>,
}
