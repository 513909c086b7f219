use indexmap::IndexMap;
use num::Float;

/// Union vocabulary of two documents.
/// Each term maps to `(weight in doc1, weight in doc2)`; a term missing
/// from one document gets 0 on that side.
///
/// Order: terms of the first map, then terms only the second map has.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedPairs<N>
where N: Float
{
    pairs: IndexMap<String, (N, N)>,
}

impl<N> AlignedPairs<N>
where N: Float
{
    /// Merges two term -> weight maps
    ///
    /// # Arguments
    /// * `first` - weights of the first document
    /// * `second` - weights of the second document
    pub fn align(first: &IndexMap<String, N>, second: &IndexMap<String, N>) -> Self {
        let mut pairs = IndexMap::with_capacity(first.len() + second.len());
        for (term, &w1) in first {
            let w2 = second.get(term).copied().unwrap_or_else(N::zero);
            pairs.insert(term.clone(), (w1, w2));
        }
        for (term, &w2) in second {
            if !first.contains_key(term) {
                pairs.insert(term.clone(), (N::zero(), w2));
            }
        }
        AlignedPairs { pairs }
    }

    /// weight pair of one term
    #[inline]
    pub fn get(&self, term: &str) -> Option<(N, N)> {
        self.pairs.get(term).copied()
    }

    /// paired weights in vocabulary order
    #[inline]
    pub fn weights(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.pairs.values().copied()
    }

    /// terms in vocabulary order
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.keys().map(String::as_str)
    }

    /// number of terms shared by both documents
    pub fn shared_len(&self) -> usize {
        self.pairs
            .values()
            .filter(|(a, b)| !a.is_zero() && !b.is_zero())
            .count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// drops the terms, keeping only the paired weights
    pub fn into_weights(self) -> Vec<(N, N)> {
        self.pairs.into_values().collect()
    }
}

/// Aligns two term -> weight maps and returns the paired weights
pub fn align<N>(first: &IndexMap<String, N>, second: &IndexMap<String, N>) -> Vec<(N, N)>
where N: Float {
    AlignedPairs::align(first, second).into_weights()
}
