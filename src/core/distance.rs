use crate::models::{FeatureVector, WeightVector};

/// Weighted Euclidean distance between two feature vectors
///
/// `sqrt(Σ w_i · (a_i − b_i)²)` over all axes.
///
/// # Arguments
/// * `a` - Adopter vector
/// * `b` - Animal vector
/// * `weights` - Per-axis weights
///
/// # Returns
/// Distance, smaller is more similar. When the vector lengths disagree with
/// each other or with the weights, the unweighted distance over the shared
/// components is returned instead.
#[inline]
pub fn weighted_euclidean(a: &FeatureVector, b: &FeatureVector, weights: &WeightVector) -> f64 {
    let w = weights.as_slice();
    if a.len() != b.len() || a.len() != w.len() {
        tracing::warn!(
            "Feature vector length mismatch (adopter: {}, animal: {}, weights: {}), using unweighted distance",
            a.len(),
            b.len(),
            w.len()
        );
        return euclidean(a, b);
    }

    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .zip(w)
        .map(|((x, y), w)| w * (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Plain Euclidean distance over the components both vectors have
#[inline]
pub fn euclidean(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Convert a distance into a similarity in (0, 1]
#[inline]
pub fn similarity(distance: f64) -> f64 {
    1.0 / (1.0 + distance)
}
