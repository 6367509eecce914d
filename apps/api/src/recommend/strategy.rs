//! Chooses how a request's scored catalog is turned into recommendations.
//!
//! One decision, three named strategies:
//! - `DirectMatch`: top score clears the threshold; MMR over the top 2k.
//! - `SteppingStone`: weak match, but the candidate's sector has a skill
//!   profile; rank entries by how many profile terms they contain.
//! - `DiverseFallback`: weak match and no usable profile; MMR over everything.

use serde::{Deserialize, Serialize};

use crate::recommend::diversity::apply_mmr;
use crate::recommend::reasons::{generate_reasons, stepping_stone_reasons};
use crate::recommend::scoring::ScoredEntry;
use crate::recommend::sector_profile::{SectorProfile, SectorProfiles};
use crate::recommend::similarity::SimilarityMatrix;

/// Tag reported to callers. `DiverseFallback` reports as `DirectMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    DirectMatch,
    SteppingStone,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::DirectMatch => "direct_match",
            RecommendationType::SteppingStone => "stepping_stone",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Strategy<'p> {
    DirectMatch,
    SteppingStone(&'p SectorProfile),
    DiverseFallback,
}

impl Strategy<'_> {
    pub fn recommendation_type(&self) -> RecommendationType {
        match self {
            Strategy::SteppingStone(_) => RecommendationType::SteppingStone,
            Strategy::DirectMatch | Strategy::DiverseFallback => RecommendationType::DirectMatch,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectMatch => "direct_match",
            Strategy::SteppingStone(_) => "stepping_stone",
            Strategy::DiverseFallback => "diverse_fallback",
        }
    }
}

/// Picks the strategy from the best final score (None for an empty catalog).
pub fn select_strategy<'p>(
    top_score: Option<f64>,
    threshold: f64,
    candidate_sector: Option<&str>,
    profiles: &'p SectorProfiles,
) -> Strategy<'p> {
    match top_score {
        Some(score) if score >= threshold => Strategy::DirectMatch,
        _ => match profiles.lookup(candidate_sector) {
            Some(profile) => Strategy::SteppingStone(profile),
            None => Strategy::DiverseFallback,
        },
    }
}

/// A selected entry with the reasons explaining it.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub scored: ScoredEntry<'a>,
    pub reasons: Vec<String>,
}

pub struct RankingContext<'m> {
    pub top_k: usize,
    pub mmr_lambda: f64,
    pub prompt_terms: usize,
    pub similarity: &'m SimilarityMatrix,
}

/// Runs the chosen strategy over the score-sorted list.
/// Returns the selections and the suggestion prompt.
pub fn execute<'a>(
    strategy: &Strategy<'_>,
    sorted: Vec<ScoredEntry<'a>>,
    ctx: &RankingContext<'_>,
) -> (Vec<Selection<'a>>, String) {
    match strategy {
        Strategy::DirectMatch => {
            let window: Vec<_> = sorted
                .into_iter()
                .take(ctx.top_k.saturating_mul(2))
                .collect();
            let picked = apply_mmr(window, ctx.top_k, ctx.mmr_lambda, ctx.similarity);
            (
                with_direct_reasons(picked),
                "Here are your top personalized recommendations!".to_string(),
            )
        }
        Strategy::DiverseFallback => {
            let picked = apply_mmr(sorted, ctx.top_k, ctx.mmr_lambda, ctx.similarity);
            (
                with_direct_reasons(picked),
                "We couldn't find a strong match. Here are some diverse options to explore."
                    .to_string(),
            )
        }
        Strategy::SteppingStone(profile) => {
            let picked = rank_stepping_stones(sorted, profile, ctx.top_k);
            let selections = picked
                .into_iter()
                .map(|scored| {
                    let reasons = stepping_stone_reasons(&scored, profile);
                    Selection { scored, reasons }
                })
                .collect();
            let skills: Vec<&str> = profile
                .top_terms
                .iter()
                .take(ctx.prompt_terms)
                .map(String::as_str)
                .collect();
            let prompt = format!(
                "To succeed in the {} sector, consider roles that build skills like: {}.",
                profile.sector,
                skills.join(", ")
            );
            (selections, prompt)
        }
    }
}

/// Orders entries by stepping-stone score (profile terms contained),
/// descending, catalog position breaking ties, and keeps `top_k`.
pub fn rank_stepping_stones<'a>(
    scored: Vec<ScoredEntry<'a>>,
    profile: &SectorProfile,
    top_k: usize,
) -> Vec<ScoredEntry<'a>> {
    let mut keyed: Vec<(usize, ScoredEntry<'a>)> = scored
        .into_iter()
        .map(|s| (profile.overlap(&s.entry.skills_processed), s))
        .collect();
    keyed.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .cmp(a_score)
            .then_with(|| a.entry.index.cmp(&b.entry.index))
    });
    keyed.into_iter().take(top_k).map(|(_, s)| s).collect()
}

fn with_direct_reasons(picked: Vec<ScoredEntry<'_>>) -> Vec<Selection<'_>> {
    picked
        .into_iter()
        .map(|scored| {
            let reasons = generate_reasons(&scored);
            Selection { scored, reasons }
        })
        .collect()
}
