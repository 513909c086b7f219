/// Punctuation removed before Chinese segmentation.
/// Whitespace of any kind is removed as well, see `is_chinese_separator`.
const CHINESE_PUNCTUATION: &[char] = &[
    '.', ',', '，', '。', '、', '’', '“', '”',
    ':', '：', ';', '!', '！', '?', '？',
    '(', ')', '（', '）', '"', '\'', '-',
];

/// Unicode whitespace plus the information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
#[inline]
fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

#[inline]
fn is_chinese_separator(c: char) -> bool {
    is_space(c) || CHINESE_PUNCTUATION.contains(&c)
}

/// word character = alphanumeric or underscore (unicode aware).
/// Combining marks and connector punctuation other than `_` are not word characters.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Removes whitespace and the Chinese/ASCII punctuation set.
/// Surviving characters are joined with nothing in between.
///
/// # Arguments
/// * `text` - raw document text
///
/// # Returns
/// * `String` - text without separators
#[inline]
pub fn strip_chinese_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_chinese_separator(c)).collect()
}

/// Removes every character that is neither a word character nor whitespace.
/// Whitespace is kept as is, so `"a,  b"` becomes `"a  b"`.
#[inline]
pub fn strip_non_word(text: &str) -> String {
    text.chars().filter(|&c| is_word_char(c) || is_space(c)).collect()
}
