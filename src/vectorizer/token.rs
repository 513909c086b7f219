use indexmap::IndexMap;
use num::{Float, NumCast};
use serde::{Deserialize, Serialize};

/// TermFrequency
/// Counts how often each term occurs in one document and derives
/// max-normalized term frequencies from those counts.
///
/// Terms keep the order of their first occurrence.
///
/// # Examples
/// ```
/// use tf_similarity::vectorizer::token::TermFrequency;
/// let mut tf = TermFrequency::new();
/// tf.add_tokens(&["hello", "world", "hello", "hello"]);
///
/// assert_eq!(tf.tf_token::<f64>("hello"), 1.0);
/// assert_eq!(tf.tf_token::<f64>("world"), 1.0 / 3.0);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

/// Adding tokens
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Builds the counts of one document.
    ///
    /// A sequence holding only the empty token is what an empty document
    /// splits into; it is counted as no tokens at all.
    ///
    /// # Arguments
    /// * `tokens` - token sequence of the document
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where T: AsRef<str>
    {
        let mut tf = TermFrequency::new();
        if let [only] = tokens {
            if only.as_ref().is_empty() {
                return tf;
            }
        }
        tf.add_tokens(tokens);
        tf
    }

    /// adds one token
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    /// adds every token of the slice
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where T: AsRef<str>
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }
}

/// TF calculation
impl TermFrequency {
    /// TF of one term
    ///
    /// # Arguments
    /// * `max_count` - count of the most frequent term
    /// * `count` - count of the term
    ///
    /// # Returns
    /// * `f64` - count / max_count (0.0~1.0)
    #[inline]
    pub fn tf_calc(max_count: u32, count: u32) -> f64 {
        if count == 0 || max_count == 0 {
            return 0.0;
        }
        count as f64 / max_count as f64
    }

    /// TF of every term in first-occurrence order
    ///
    /// # Returns
    /// * `IndexMap<String, N>` - term -> weight, empty when no tokens were added
    pub fn tf_map<N>(&self) -> IndexMap<String, N>
    where N: Float {
        let max_count = self.most_frequent_token_count();
        self.token_count
            .iter()
            .map(|(token, &count)| (token.clone(), Self::cast(Self::tf_calc(max_count, count))))
            .collect()
    }

    /// TF of one term, 0 when absent
    #[inline]
    pub fn tf_token<N>(&self, token: &str) -> N
    where N: Float {
        let max_count = self.most_frequent_token_count();
        let count = self.token_count.get(token).copied().unwrap_or(0);
        Self::cast(Self::tf_calc(max_count, count))
    }

    #[inline]
    fn cast<N: Float>(value: f64) -> N {
        <N as NumCast>::from(value).unwrap_or_else(N::zero)
    }
}

/// Statistics
impl TermFrequency {
    /// count of one term
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// highest count over all terms, 0 when empty
    #[inline]
    pub fn most_frequent_token_count(&self) -> u32 {
        self.token_count.values().copied().max().unwrap_or(0)
    }

    /// terms sharing the highest count
    pub fn most_frequent_tokens(&self) -> Vec<&str> {
        let max_count = self.most_frequent_token_count();
        self.token_count
            .iter()
            .filter(|(_, count)| **count == max_count && **count > 0)
            .map(|(token, _)| token.as_str())
            .collect()
    }

    /// number of distinct terms
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    /// number of tokens added, duplicates included
    #[inline]
    pub fn token_total_count(&self) -> u64 {
        self.total_token_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    /// distinct terms / total tokens
    #[inline]
    pub fn unique_token_ratio(&self) -> f64 {
        if self.total_token_count == 0 {
            return 0.0;
        }
        self.token_count.len() as f64 / self.total_token_count as f64
    }

    /// resets all counts
    #[inline]
    pub fn clear(&mut self) {
        self.token_count.clear();
        self.total_token_count = 0;
    }
}

/// Token sequence -> term -> max-normalized frequency
///
/// # Arguments
/// * `tokens` - token sequence of one document
///
/// # Returns
/// * `IndexMap<String, f64>` - weights in (0, 1], empty for an empty document
pub fn vectorize<T>(tokens: &[T]) -> IndexMap<String, f64>
where T: AsRef<str>
{
    TermFrequency::from_tokens(tokens).tf_map()
}
