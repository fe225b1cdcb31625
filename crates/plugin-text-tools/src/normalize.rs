//! Arabic orthographic normalization.

/// Tatweel (kashida), U+0640.
pub const TATWEEL: char = '\u{0640}';

const ALEF: char = '\u{0627}';
const ALEF_MAKSURA: char = '\u{0649}';
const YEH: char = '\u{064A}';
const TEH_MARBUTA: char = '\u{0629}';
const HEH: char = '\u{0647}';

/// Options for [`normalize`].
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub strip_diacritics: bool,
    pub normalize_teh_marbuta: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_diacritics: true,
            normalize_teh_marbuta: false,
        }
    }
}

/// Harakat (fathatan through sukun) and the superscript alef.
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}')
}

/// Hamza-carrying and wasla alef forms: أ إ آ ٱ.
fn is_alef_variant(c: char) -> bool {
    matches!(c, '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}')
}

/// Normalizes Arabic text.
///
/// Tatweel is always removed and whitespace runs collapse to one space.
pub fn normalize(text: &str, options: NormalizeOptions) -> String {
    let mapped: String = text
        .chars()
        .filter(|&c| c != TATWEEL)
        .filter(|&c| !(options.strip_diacritics && is_diacritic(c)))
        .map(|c| match c {
            c if is_alef_variant(c) => ALEF,
            ALEF_MAKSURA => YEH,
            TEH_MARBUTA if options.normalize_teh_marbuta => HEH,
            other => other,
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
