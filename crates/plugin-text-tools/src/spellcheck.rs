//! Heuristic Arabic spell check.
//!
//! No dictionary is involved: tokens are flagged for letter elongation
//! (tatweel or a letter repeated three or more times) and for mixing Arabic
//! and Latin letters in one word.

use crate::models::SpellIssue;
use crate::normalize::TATWEEL;

/// Minimum run length treated as elongation.
const ELONGATION_RUN: usize = 3;

pub const REASON_ELONGATION: &str = "elongation";
pub const REASON_MIXED_SCRIPT: &str = "mixed_script";

fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}') && c.is_alphabetic()
}

/// Checks every whitespace-separated token.
///
/// Returns the corrected text and the issues in token order.
pub fn check(text: &str) -> (String, Vec<SpellIssue>) {
    let mut issues = Vec::new();
    let corrected: Vec<String> = text
        .split_whitespace()
        .map(|token| check_token(token, &mut issues))
        .collect();
    (corrected.join(" "), issues)
}

fn check_token(token: &str, issues: &mut Vec<SpellIssue>) -> String {
    let mut current = token.to_string();

    if is_elongated(&current) {
        let fixed = collapse_elongation(&current);
        issues.push(issue(&current, &fixed, REASON_ELONGATION));
        current = fixed;
    }

    if is_mixed_script(&current) {
        let fixed: String = current.chars().filter(|c| !c.is_ascii_alphabetic()).collect();
        issues.push(issue(&current, &fixed, REASON_MIXED_SCRIPT));
        current = fixed;
    }

    current
}

fn issue(word: &str, suggestion: &str, reason: &str) -> SpellIssue {
    SpellIssue {
        word: word.to_string(),
        suggestion: suggestion.to_string(),
        reason: reason.to_string(),
    }
}

fn is_elongated(token: &str) -> bool {
    if token.contains(TATWEEL) {
        return true;
    }
    let mut run = 0;
    let mut prev = None;
    for c in token.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= ELONGATION_RUN && c.is_alphabetic() {
            return true;
        }
    }
    false
}

/// Drops tatweel and shrinks runs of three or more identical letters to one.
fn collapse_elongation(token: &str) -> String {
    let chars: Vec<char> = token.chars().filter(|&c| c != TATWEEL).collect();
    let mut out = String::with_capacity(token.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut j = i;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }
        let run = j - i;
        if run >= ELONGATION_RUN && c.is_alphabetic() {
            out.push(c);
        } else {
            out.extend(&chars[i..j]);
        }
        i = j;
    }
    out
}

fn is_mixed_script(token: &str) -> bool {
    token.chars().any(is_arabic_letter) && token.chars().any(|c| c.is_ascii_alphabetic())
}
