use jieba_rs::Jieba;
use once_cell::sync::Lazy;

use crate::utils::normalizer::{strip_chinese_punctuation, strip_non_word};

use super::language::Language;

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Normalization and splitting are always paired per strategy.
pub trait Tokenizer {
    /// punctuation removal applied before splitting
    fn normalize(&self, text: &str) -> String;
    /// splits already normalized text
    fn split(&self, text: &str) -> Vec<String>;

    /// normalize -> split
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.split(&self.normalize(text))
    }
}

/// jieba segmentation in precise mode (HMM enabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseTokenizer;

/// single space splitting, keeps empty tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for ChineseTokenizer {
    #[inline]
    fn normalize(&self, text: &str) -> String {
        strip_chinese_punctuation(text)
    }

    #[inline]
    fn split(&self, text: &str) -> Vec<String> {
        segment_chinese(text)
    }
}

impl Tokenizer for SpaceTokenizer {
    #[inline]
    fn normalize(&self, text: &str) -> String {
        strip_non_word(text)
    }

    #[inline]
    fn split(&self, text: &str) -> Vec<String> {
        split_on_spaces(text)
    }
}

impl Tokenizer for Language {
    fn normalize(&self, text: &str) -> String {
        match self {
            Language::Chinese => ChineseTokenizer.normalize(text),
            Language::Other => SpaceTokenizer.normalize(text),
        }
    }

    fn split(&self, text: &str) -> Vec<String> {
        match self {
            Language::Chinese => ChineseTokenizer.split(text),
            Language::Other => SpaceTokenizer.split(text),
        }
    }
}

/// Segments Chinese text with jieba's precise mode.
/// The result never contains overlapping tokens. Empty input gives no tokens.
pub fn segment_chinese(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    JIEBA.cut(text, true).into_iter().map(str::to_owned).collect()
}

/// Splits on the single space character.
///
/// Consecutive spaces produce empty tokens, and the empty string
/// splits into one empty token.
///
/// # Examples
/// ```
/// use tf_similarity::vectorizer::tokenizer::split_on_spaces;
/// assert_eq!(split_on_spaces("a  b"), vec!["a", "", "b"]);
/// ```
pub fn split_on_spaces(text: &str) -> Vec<String> {
    text.split(' ').map(str::to_owned).collect()
}

/// Tokenizes `text` with the strategy of `language`
pub fn tokenize(text: &str, language: Language) -> Vec<String> {
    language.tokenize(text)
}
