//! Similarity measures over raw embedding vectors.
//!
//! All functions require `a.len() == b.len()`. Callers that receive vectors
//! from the outside world must check [`same_dimension`] first.

/// Returns `true` when both vectors can be compared.
pub fn same_dimension(a: &[f32], b: &[f32]) -> bool {
    a.len() == b.len()
}

/// Computes `Σ aᵢ·bᵢ`.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "dot_product: dimension mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a vector.
pub fn magnitude(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Computes `dot(a, b) / (‖a‖·‖b‖)`.
///
/// The result lies in `[-1, 1]` for well-formed input. A zero-magnitude
/// vector yields NaN; callers treat NaN as an undefined similarity.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    dot_product(a, b) / (magnitude(a) * magnitude(b))
}

/// Computes `sqrt(Σ(aᵢ-bᵢ)²)`.
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "euclidean_distance: dimension mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}
