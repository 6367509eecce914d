//! Maximal Marginal Relevance re-ranking.
//!
//! Greedily picks entries maximizing
//! `λ · final_score − (1 − λ) · max_similarity_to_selected`, reading
//! entry-to-entry similarity from the precomputed matrix.

use crate::recommend::scoring::ScoredEntry;
use crate::recommend::similarity::SimilarityMatrix;

pub const DEFAULT_LAMBDA: f64 = 0.7;

/// Re-ranks a score-ordered list down to `top_k` entries.
///
/// Lists shorter than `top_k` come back unchanged. Otherwise the first
/// (highest scoring) entry seeds the selection.
pub fn apply_mmr<'a>(
    ranked: Vec<ScoredEntry<'a>>,
    top_k: usize,
    lambda: f64,
    similarity: &SimilarityMatrix,
) -> Vec<ScoredEntry<'a>> {
    if top_k == 0 {
        return Vec::new();
    }
    if ranked.len() < top_k {
        return ranked;
    }

    let mut remaining = ranked;
    let mut selected = vec![remaining.remove(0)];

    while selected.len() < top_k && !remaining.is_empty() {
        let mut best: Option<(usize, f64)> = None;
        for (pos, candidate) in remaining.iter().enumerate() {
            let score = mmr_score(candidate, &selected, lambda, similarity);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        match best {
            Some((pos, _)) => selected.push(remaining.remove(pos)),
            None => break,
        }
    }

    selected
}

/// Marginal relevance of `candidate` given what is already selected.
pub fn mmr_score(
    candidate: &ScoredEntry<'_>,
    selected: &[ScoredEntry<'_>],
    lambda: f64,
    similarity: &SimilarityMatrix,
) -> f64 {
    let max_sim = selected
        .iter()
        .map(|s| similarity.get(candidate.entry.index, s.entry.index))
        .fold(0.0_f64, f64::max);
    lambda * candidate.final_score - (1.0 - lambda) * max_sim
}
