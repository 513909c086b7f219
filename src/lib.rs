//! This crate estimates how similar two text documents are, using
//! term-frequency vectors and cosine similarity.
pub mod error;
pub mod io;
pub mod utils;
pub mod vectorizer;

/// Similarity between two documents
/// Detects the language of the original document, tokenizes both documents
/// with the same strategy, builds max-normalized TF vectors, aligns them over
/// the union vocabulary and returns their cosine similarity.
///
/// `calculate_similarity_with` takes `CompareOptions` (e.g. a forced
/// language) and returns a `SimilarityReport` with token and vocabulary
/// counts besides the score.
///
/// # Errors
/// `SimilarityError::DegenerateVector` when both documents are empty after
/// tokenization. A single empty document scores 0.0.
pub use vectorizer::{
    calculate_similarity, calculate_similarity_with, format_similarity, CompareOptions,
    SimilarityReport,
};

/// Language Tag
/// `Chinese` documents are segmented with jieba (precise mode) after removing
/// whitespace and Chinese/ASCII punctuation.
/// `Other` documents lose every non-word, non-space character and are split
/// on single spaces, keeping empty tokens.
///
/// Ties in the character count resolve to `Other`.
pub use vectorizer::language::Language;

/// Tokenizer trait and its two strategies
/// Each strategy pairs its own punctuation normalizer with its splitter.
/// `Language` implements the trait by dispatching to one of them.
pub use vectorizer::tokenizer::{ChineseTokenizer, SpaceTokenizer, Tokenizer};

/// Term Frequency structure
/// Counts the terms of one document and derives max-normalized weights
/// (count / highest count).
///
/// # Serialization
/// Supported. Term order is preserved.
pub use vectorizer::token::TermFrequency;

/// Aligned Pairs
/// Union vocabulary of two documents with `(weight1, weight2)` per term.
pub use vectorizer::align::AlignedPairs;

/// Comparison trait
/// `DefaultCompare` provides the dot product and cosine similarity over
/// aligned weight pairs.
pub use vectorizer::compare::{Compare, DefaultCompare};

/// Error type and result alias
pub use error::{Result, SimilarityError};

/// File I/O helpers used by the binary
pub use io::{read_text, write_text};
