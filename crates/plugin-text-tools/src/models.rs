//! Request and response shapes of the text tasks.

use serde::{Deserialize, Serialize};

/// Input of `arabic_normalize`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
    /// Remove harakat and the superscript alef.
    #[serde(default = "default_true")]
    pub strip_diacritics: bool,
    /// Map teh marbuta (ة) to heh (ه).
    #[serde(default)]
    pub normalize_teh_marbuta: bool,
}

fn default_true() -> bool {
    true
}

/// Output of `arabic_normalize`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizeResponse {
    pub text: String,
    pub original: String,
    pub changed: bool,
}

/// Input of `spellcheck_ar`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellcheckRequest {
    pub text: String,
}

/// One flagged token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellIssue {
    pub word: String,
    pub suggestion: String,
    pub reason: String,
}

/// Output of `spellcheck_ar`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellcheckResponse {
    /// The text with every suggestion applied.
    pub text: String,
    pub issues: Vec<SpellIssue>,
}
