use crate::core::{
    distance::{similarity, weighted_euclidean},
    filters::HardFilter,
    vector::{adopter_vector, animal_vector, DEFAULT_HOURS_CAP},
};
use crate::models::{AdopterProfile, AnimalCandidate, FeatureVector, RankedResult, WeightVector};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub results: Vec<RankedResult>,
    pub total_candidates: usize,
    /// Candidates the hard filter ruled out; they rank after every survivor
    pub excluded: usize,
}

/// Content-based ranker: weighted nearest neighbours over feature vectors
///
/// # Pipeline
/// 1. Hard-filter pre-pass (optional, never empties the pool)
/// 2. Vectorize adopter and candidates
/// 3. Weighted Euclidean distance
/// 4. Stable ascending sort and truncation
/// 5. Backfill from excluded candidates, by distance, when too few survive
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: WeightVector,
    hours_cap: u32,
    hard_filter: Option<HardFilter>,
}

impl Ranker {
    pub fn new(weights: WeightVector) -> Self {
        Self {
            weights,
            hours_cap: DEFAULT_HOURS_CAP,
            hard_filter: Some(HardFilter::default()),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(WeightVector::default())
    }

    pub fn with_hours_cap(mut self, hours_cap: u32) -> Self {
        self.hours_cap = hours_cap;
        self
    }

    /// Replace the hard filter; `None` disables it
    pub fn with_hard_filter(mut self, hard_filter: Option<HardFilter>) -> Self {
        self.hard_filter = hard_filter;
        self
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Rank candidates against an adopter profile
    ///
    /// # Arguments
    /// * `profile` - The adopter's stored preferences
    /// * `candidates` - Candidate pool in catalog order (newest first)
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// RankOutcome with `min(limit, candidates.len())` results. Candidates
    /// that pass the hard filter come first, ordered by ascending distance;
    /// excluded candidates only fill the remaining slots. Ties keep their
    /// catalog order.
    pub fn rank(
        &self,
        profile: &AdopterProfile,
        candidates: Vec<AnimalCandidate>,
        limit: usize,
    ) -> RankOutcome {
        let total_candidates = candidates.len();

        let (preferred, rejected) = match &self.hard_filter {
            Some(filter) => {
                let outcome = filter.apply(profile, candidates);
                if outcome.discarded {
                    tracing::debug!(
                        "Hard filter would exclude all {} candidates, ranking the full pool",
                        total_candidates
                    );
                } else if outcome.excluded() > 0 {
                    tracing::debug!(
                        "Hard filter excluded {} of {} candidates",
                        outcome.excluded(),
                        total_candidates
                    );
                }
                (outcome.candidates, outcome.rejected)
            }
            None => (candidates, Vec::new()),
        };
        let excluded = rejected.len();

        let user = adopter_vector(profile, self.hours_cap);

        let mut scored = self.score(&user, preferred);
        if scored.len() < limit && !rejected.is_empty() {
            tracing::debug!(
                "Backfilling {} of {} slots from excluded candidates",
                (limit - scored.len()).min(excluded),
                limit
            );
            scored.extend(self.score(&user, rejected));
        }
        scored.truncate(limit);

        let results = scored
            .into_iter()
            .enumerate()
            .map(|(i, (distance, animal))| RankedResult {
                rank: i + 1,
                distance,
                score: similarity(distance),
                animal,
            })
            .collect();

        RankOutcome {
            results,
            total_candidates,
            excluded,
        }
    }

    /// Distances for a group of candidates, ascending
    fn score(&self, user: &FeatureVector, pool: Vec<AnimalCandidate>) -> Vec<(f64, AnimalCandidate)> {
        let mut scored: Vec<(f64, AnimalCandidate)> = pool
            .into_iter()
            .map(|animal| {
                let distance = weighted_euclidean(user, &animal_vector(&animal), &self.weights);
                (distance, animal)
            })
            .collect();

        // sort_by is stable, so equal distances keep catalog order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(housing: &str, children: bool, hours: i32, lifestyle: &str) -> AdopterProfile {
        AdopterProfile {
            housing_type: Some(housing.to_string()),
            has_children: Some(children),
            weekly_hours_available: Some(hours),
            lifestyle: Some(lifestyle.to_string()),
            updated_at: None,
        }
    }

    fn ids(outcome: &RankOutcome) -> Vec<i64> {
        outcome.results.iter().map(|r| r.animal.id).collect()
    }

    #[test]
    fn test_cat_first_for_busy_calm_apartment() {
        let ranker = Ranker::with_default_weights().with_hard_filter(None);
        let adopter = profile("apartment", false, 3, "calm");
        let candidates = vec![
            AnimalCandidate::new(1, "Rex", "dog").with_size("large"),
            AnimalCandidate::new(2, "Mia", "cat").with_size("small"),
        ];

        let outcome = ranker.rank(&adopter, candidates, 10);

        assert_eq!(ids(&outcome), vec![2, 1]);
        assert!(outcome.results[0].distance < outcome.results[1].distance);
    }

    #[test]
    fn test_dog_first_for_active_family_house() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("house", true, 25, "active");
        let candidates = vec![
            AnimalCandidate::new(1, "Mia", "cat")
                .with_size("small")
                .with_good_with_children(false),
            AnimalCandidate::new(2, "Rex", "dog")
                .with_size("large")
                .with_good_with_children(true),
        ];

        let outcome = ranker.rank(&adopter, candidates, 10);

        assert_eq!(ids(&outcome), vec![2, 1]);
    }

    #[test]
    fn test_ranks_are_one_based_and_scores_descend() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("house", true, 30, "sporty");
        let candidates = vec![
            AnimalCandidate::new(1, "A", "cat"),
            AnimalCandidate::new(2, "B", "dog").with_size("large"),
            AnimalCandidate::new(3, "C", "dog").with_size("small").with_age("10"),
        ];

        let outcome = ranker.rank(&adopter, candidates, 10);

        let ranks: Vec<usize> = outcome.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        for pair in outcome.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("house", false, 20, "moderate");
        let candidates: Vec<AnimalCandidate> = (1..=4)
            .map(|i| AnimalCandidate::new(i, format!("Twin {}", i), "dog").with_size("medium"))
            .collect();

        let outcome = ranker.rank(&adopter, candidates, 10);

        assert_eq!(ids(&outcome), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::with_default_weights();
        let candidates: Vec<AnimalCandidate> = (0..5)
            .map(|i| AnimalCandidate::new(i, format!("Pet {}", i), "cat"))
            .collect();

        let outcome = ranker.rank(&AdopterProfile::default(), candidates, 2);

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.total_candidates, 5);
    }

    #[test]
    fn test_hard_filter_excludes_before_ranking() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("apartamento", false, 2, "calmo");
        let candidates = vec![
            AnimalCandidate::new(1, "Rex", "cachorro").with_size("grande"),
            AnimalCandidate::new(2, "Mia", "gato"),
        ];

        let outcome = ranker.rank(&adopter, candidates, 1);

        assert_eq!(ids(&outcome), vec![2]);
        assert_eq!(outcome.excluded, 1);
    }

    #[test]
    fn test_excluded_candidates_fill_remaining_slots() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("apartment", false, 2, "calm");
        // The rabbit is closer by distance but ruled out for a busy apartment
        let candidates = vec![
            AnimalCandidate::new(1, "Pipoca", "rabbit"),
            AnimalCandidate::new(2, "Bidu", "dog").with_size("small").with_age("4"),
            AnimalCandidate::new(3, "Thor", "dog").with_size("large"),
        ];

        let unfiltered = ranker.clone().with_hard_filter(None).rank(&adopter, candidates.clone(), 3);
        assert_eq!(ids(&unfiltered)[0], 1);

        let outcome = ranker.rank(&adopter, candidates, 3);

        assert_eq!(ids(&outcome), vec![2, 1, 3]);
        assert_eq!(outcome.excluded, 2);
        let ranks: Vec<usize> = outcome.results.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_hard_filter_discarded_when_everything_excluded() {
        let ranker = Ranker::with_default_weights();
        let adopter = profile("apartment", false, 1, "calm");
        let candidates = vec![
            AnimalCandidate::new(1, "Rex", "dog").with_size("large"),
            AnimalCandidate::new(2, "Thor", "dog").with_size("medium"),
        ];

        let outcome = ranker.rank(&adopter, candidates, 10);

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.excluded, 0);
    }

    #[test]
    fn test_empty_pool() {
        let outcome = Ranker::default().rank(&AdopterProfile::default(), vec![], 5);
        assert!(outcome.results.is_empty());
    }
}
