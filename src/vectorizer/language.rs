use std::fmt;

use serde::{Deserialize, Serialize};

/// Tokenization strategy for a comparison.
/// Anything that is not predominantly Chinese is handled as `Other`
/// (space separated text).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Chinese,
    #[default]
    Other,
}

impl Language {
    /// Classifies `text` by comparing CJK ideographs (U+4E00..=U+9FFF)
    /// against ASCII letters.
    ///
    /// Equal counts, including text with neither, resolve to `Other`.
    ///
    /// # Arguments
    /// * `text` - raw document text
    ///
    /// # Returns
    /// * `Language` - `Chinese` only when ideographs strictly outnumber letters
    pub fn detect(text: &str) -> Self {
        let (chinese, latin) = text.chars().fold((0usize, 0usize), |(c, e), ch| {
            if is_cjk_ideograph(ch) {
                (c + 1, e)
            } else if ch.is_ascii_alphabetic() {
                (c, e + 1)
            } else {
                (c, e)
            }
        });
        if chinese > latin {
            Language::Chinese
        } else {
            Language::Other
        }
    }
}

#[inline]
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Chinese => f.write_str("chinese"),
            Language::Other => f.write_str("other"),
        }
    }
}
