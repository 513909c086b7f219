pub mod align;
pub mod compare;
pub mod language;
pub mod token;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::vectorizer::{
    align::AlignedPairs,
    compare::{Compare, DefaultCompare},
    language::Language,
    token::TermFrequency,
    tokenizer::Tokenizer,
};

/// Options for one comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Tokenization strategy for both documents.
    /// `None` detects it from the original document.
    pub language: Option<Language>,
}

impl CompareOptions {
    pub fn with_language(language: Language) -> Self {
        CompareOptions { language: Some(language) }
    }
}

/// Result of comparing two documents
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    /// cosine similarity, 0.0~1.0
    pub score: f64,
    /// strategy used for both documents
    pub language: Language,
    /// tokens of the original document
    pub original_tokens: u64,
    /// tokens of the compared document
    pub compared_tokens: u64,
    /// distinct terms over both documents
    pub vocabulary: usize,
    /// distinct terms present in both documents
    pub shared_terms: usize,
}

impl SimilarityReport {
    /// `Similarity: 87.43%`
    pub fn to_output_line(&self) -> String {
        format_similarity(self.score)
    }
}

/// Term frequencies of one document under a given strategy
pub fn document_profile(text: &str, language: Language) -> TermFrequency {
    let tokens = language.tokenize(text);
    let tf = TermFrequency::from_tokens(&tokens);
    debug!(%language, tokens = tokens.len(), terms = tf.token_num(), "document vectorized");
    tf
}

/// Compares two documents.
///
/// The language is detected from `original` only and both documents are
/// tokenized the same way.
///
/// # Arguments
/// * `original` - original document text
/// * `compared` - document checked against the original
///
/// # Returns
/// * `Result<f64>` - cosine similarity of the TF vectors.
///   `SimilarityError::DegenerateVector` when both documents are empty.
pub fn calculate_similarity(original: &str, compared: &str) -> Result<f64> {
    calculate_similarity_with(original, compared, &CompareOptions::default())
        .map(|report| report.score)
}

/// Compares two documents with explicit options and returns the details
pub fn calculate_similarity_with(
    original: &str,
    compared: &str,
    options: &CompareOptions,
) -> Result<SimilarityReport> {
    let language = options.language.unwrap_or_else(|| Language::detect(original));
    debug!(%language, forced = options.language.is_some(), "tokenization strategy selected");

    let original_tf = document_profile(original, language);
    let compared_tf = document_profile(compared, language);

    let aligned = AlignedPairs::<f64>::align(&original_tf.tf_map(), &compared_tf.tf_map());
    debug!(vocabulary = aligned.len(), shared = aligned.shared_len(), "vocabulary aligned");

    let score = <DefaultCompare as Compare<f64>>::cosine_similarity(aligned.weights())?;
    Ok(SimilarityReport {
        score,
        language,
        original_tokens: original_tf.token_total_count(),
        compared_tokens: compared_tf.token_total_count(),
        vocabulary: aligned.len(),
        shared_terms: aligned.shared_len(),
    })
}

/// Formats a score as the output line, e.g. `Similarity: 87.43%`
pub fn format_similarity(score: f64) -> String {
    format!("Similarity: {:.2}%", score * 100.0)
}
