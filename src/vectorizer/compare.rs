use num::Float;

use crate::error::{Result, SimilarityError};

pub trait Compare<N>
where
    N: Float,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(pairs: impl Iterator<Item = (N, N)>) -> f64;
    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    fn cosine_similarity(pairs: impl Iterator<Item = (N, N)>) -> Result<f64>;
}

#[derive(Debug)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Float,
{
    #[inline]
    fn dot(pairs: impl Iterator<Item = (N, N)>) -> f64 {
        pairs.map(|(a, b)| to_f64(a) * to_f64(b)).sum()
    }

    /// Both vectors zero (nothing to compare) is an error.
    /// Exactly one zero vector gives 0.0.
    fn cosine_similarity(pairs: impl Iterator<Item = (N, N)>) -> Result<f64> {
        let mut norm_a = 0_f64;
        let mut norm_b = 0_f64;
        let mut dot = 0_f64;
        for (a, b) in pairs {
            let (a, b) = (to_f64(a), to_f64(b));
            norm_a += a * a;
            norm_b += b * b;
            dot += a * b;
        }
        match (norm_a == 0.0, norm_b == 0.0) {
            (true, true) => Err(SimilarityError::DegenerateVector),
            (true, false) | (false, true) => Ok(0.0),
            (false, false) => Ok(dot / (norm_a.sqrt() * norm_b.sqrt())),
        }
    }
}

#[inline(always)]
fn to_f64<N: Float>(v: N) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

/// cosine similarity over aligned weight pairs, see `Compare::cosine_similarity`
pub fn cosine<N>(pairs: &[(N, N)]) -> Result<f64>
where N: Float {
    <DefaultCompare as Compare<N>>::cosine_similarity(pairs.iter().copied())
}
