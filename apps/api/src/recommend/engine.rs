//! The recommender service object: everything fitted at startup plus the
//! per-request `recommend` pipeline.
//!
//! Built once, immutable afterwards, shared across requests behind an `Arc`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigurationError;
use crate::models::internship::InternshipRow;
use crate::recommend::catalog::IndexedEntry;
use crate::recommend::diversity::DEFAULT_LAMBDA;
use crate::recommend::scoring::{
    score_entry, sort_by_final_score, CandidateProfile, PreparedCandidate, ScoredEntry,
};
use crate::recommend::sector_profile::SectorProfiles;
use crate::recommend::similarity::SimilarityMatrix;
use crate::recommend::strategy::{execute, select_strategy, RankingContext, RecommendationType};
use crate::recommend::vectorizer::{TfIdfModel, VectorizerParams};
use crate::recommend::weights::RecommenderConfig;

#[derive(Debug, Clone)]
pub struct EngineParams {
    /// Best final score below this switches to the fallback strategies.
    pub min_score_threshold: f64,
    pub mmr_lambda: f64,
    pub sector_top_terms: usize,
    pub prompt_terms: usize,
    pub vectorizer: VectorizerParams,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            min_score_threshold: 0.2,
            mmr_lambda: DEFAULT_LAMBDA,
            sector_top_terms: 10,
            prompt_terms: 3,
            vectorizer: VectorizerParams::default(),
        }
    }
}

/// One recommended internship as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub id: i64,
    pub sector: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub final_score: f64,
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub suggestion_prompt: String,
    pub results: Vec<RecommendationResult>,
}

pub struct Recommender {
    config: RecommenderConfig,
    params: EngineParams,
    entries: Vec<IndexedEntry>,
    model: TfIdfModel,
    similarity: SimilarityMatrix,
    sector_profiles: SectorProfiles,
}

impl Recommender {
    /// Normalizes the catalog, fits the vector space model, precomputes the
    /// similarity matrix and sector profiles.
    pub fn build(
        catalog: Vec<InternshipRow>,
        config: RecommenderConfig,
        params: EngineParams,
    ) -> Result<Self, ConfigurationError> {
        config.weights.validate()?;
        if catalog.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }

        let mut entries: Vec<IndexedEntry> = catalog
            .into_iter()
            .enumerate()
            .map(|(index, row)| IndexedEntry::new(index, row))
            .collect();

        let documents: Vec<&str> = entries.iter().map(|e| e.skills_processed.as_str()).collect();
        let fitted = TfIdfModel::fit(&documents, &params.vectorizer)?;
        for (entry, vector) in entries.iter_mut().zip(fitted.vectors) {
            entry.vector = vector;
        }

        let vectors: Vec<_> = entries.iter().map(|e| e.vector.clone()).collect();
        let similarity = SimilarityMatrix::from_vectors(&vectors);
        let sector_profiles = SectorProfiles::build(&entries, params.sector_top_terms);

        info!(
            "Recommender ready: {} internships, {} vocabulary terms, {} sectors profiled",
            entries.len(),
            fitted.model.vocabulary_len(),
            sector_profiles.len()
        );

        Ok(Self {
            config,
            params,
            entries,
            model: fitted.model,
            similarity,
            sector_profiles,
        })
    }

    pub fn recommend(&self, candidate: &CandidateProfile) -> Recommendation {
        let prepared = PreparedCandidate::new(candidate, &self.model);

        let mut scored = self.score_all(&prepared);
        sort_by_final_score(&mut scored);
        let top_score = scored.first().map(|s| s.final_score);

        let strategy = select_strategy(
            top_score,
            self.params.min_score_threshold,
            prepared.sector.as_deref(),
            &self.sector_profiles,
        );
        debug!(
            "strategy={} top_score={:?} top_k={}",
            strategy.name(),
            top_score,
            candidate.top_k
        );

        let ctx = RankingContext {
            top_k: candidate.top_k,
            mmr_lambda: self.params.mmr_lambda,
            prompt_terms: self.params.prompt_terms,
            similarity: &self.similarity,
        };
        let (selections, suggestion_prompt) = execute(&strategy, scored, &ctx);

        let results = selections
            .into_iter()
            .map(|selection| {
                let row = &selection.scored.entry.row;
                RecommendationResult {
                    id: row.id,
                    sector: row.sector.clone(),
                    skills: row.skills.clone(),
                    education: row.education.clone(),
                    location: row.location.clone(),
                    final_score: selection.scored.final_score,
                    match_reasons: selection.reasons,
                }
            })
            .collect();

        Recommendation {
            recommendation_type: strategy.recommendation_type(),
            suggestion_prompt,
            results,
        }
    }

    /// Scores every catalog entry, in catalog order.
    pub fn score_all(&self, candidate: &PreparedCandidate) -> Vec<ScoredEntry<'_>> {
        self.entries
            .iter()
            .map(|entry| score_entry(candidate, entry, &self.config))
            .collect()
    }

    pub fn contains_internship(&self, id: i64) -> bool {
        self.entries.iter().any(|e| e.row.id == id)
    }

    pub fn catalog_len(&self) -> usize {
        self.entries.len()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.model.vocabulary_len()
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }
}
