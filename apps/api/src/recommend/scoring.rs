//! Per-entry scoring: TF-IDF similarity plus soft-skill, sector, education and
//! location boosts. Each entry is scored independently of every other entry.

use crate::recommend::catalog::IndexedEntry;
use crate::recommend::normalize::{normalize_field, normalize_skills};
use crate::recommend::similarity::{cosine_similarity, SparseVector};
use crate::recommend::vectorizer::TfIdfModel;
use crate::recommend::weights::{RecommenderConfig, SoftSkills};

/// Per-request candidate input. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct CandidateProfile {
    pub skills: String,
    pub sector: Option<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub top_k: usize,
}

/// Candidate input in the same representation as catalog entries.
#[derive(Debug, Clone)]
pub struct PreparedCandidate {
    pub skills_processed: String,
    pub vector: SparseVector,
    /// Trimmed as given; used for lookups and prompts.
    pub sector: Option<String>,
    pub sector_key: Option<String>,
    pub education_key: Option<String>,
    pub location_key: Option<String>,
}

impl PreparedCandidate {
    pub fn new(profile: &CandidateProfile, model: &TfIdfModel) -> Self {
        let skills_processed = normalize_skills(Some(&profile.skills));
        let vector = model.transform(&skills_processed);
        Self {
            vector,
            skills_processed,
            sector: profile
                .sector
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            sector_key: normalize_field(profile.sector.as_deref()),
            education_key: normalize_field(profile.education.as_deref()),
            location_key: normalize_field(profile.location.as_deref()),
        }
    }
}

/// A catalog entry with its request-specific score components.
#[derive(Debug, Clone)]
pub struct ScoredEntry<'a> {
    pub entry: &'a IndexedEntry,
    pub skills_similarity: f64,
    pub soft_skill_boost: f64,
    pub soft_skill_category: Option<String>,
    pub sector_boost: f64,
    pub education_boost: f64,
    pub location_boost: f64,
    pub final_score: f64,
}

pub fn score_entry<'a>(
    candidate: &PreparedCandidate,
    entry: &'a IndexedEntry,
    config: &RecommenderConfig,
) -> ScoredEntry<'a> {
    let weights = &config.weights;

    let skills_similarity = cosine_similarity(&candidate.vector, &entry.vector);

    let soft_skill_category = match_soft_skill(
        &candidate.skills_processed,
        &entry.skills_processed,
        &config.soft_skills,
    );
    let soft_skill_boost = if soft_skill_category.is_some() {
        weights.soft_skill_boost
    } else {
        0.0
    };

    let sector_boost = boost_if(
        matches!(
            (&candidate.sector_key, &entry.sector_key),
            (Some(c), Some(e)) if c == e
        ),
        weights.sector_boost,
    );
    let education_boost = boost_if(
        matches!(
            (&candidate.education_key, &entry.education_key),
            (Some(c), Some(e)) if e.contains(c.as_str())
        ),
        weights.education_boost,
    );
    let location_boost = boost_if(
        matches!(
            (&candidate.location_key, &entry.location_key),
            (Some(c), Some(e)) if c == e
        ),
        weights.location_boost,
    );

    let final_score = skills_similarity * weights.skills_similarity
        + soft_skill_boost
        + sector_boost
        + education_boost
        + location_boost;

    ScoredEntry {
        entry,
        skills_similarity,
        soft_skill_boost,
        soft_skill_category: soft_skill_category.map(str::to_string),
        sector_boost,
        education_boost,
        location_boost,
        final_score,
    }
}

/// Name of the first category with a keyword in both texts.
pub fn match_soft_skill<'c>(
    candidate_text: &str,
    entry_text: &str,
    soft_skills: &'c SoftSkills,
) -> Option<&'c str> {
    soft_skills
        .categories()
        .iter()
        .find(|category| {
            let hit = |text: &str| category.keywords.iter().any(|kw| text.contains(kw.as_str()));
            hit(candidate_text) && hit(entry_text)
        })
        .map(|category| category.name.as_str())
}

/// Sorts by `final_score` descending; catalog position breaks ties.
pub fn sort_by_final_score(scored: &mut [ScoredEntry<'_>]) {
    scored.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.entry.index.cmp(&b.entry.index))
    });
}

fn boost_if(matched: bool, weight: f64) -> f64 {
    if matched {
        weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::internship::InternshipRow;
    use crate::recommend::vectorizer::VectorizerParams;
    use crate::recommend::weights::{SoftSkillCategory, Weights};

    fn config() -> RecommenderConfig {
        RecommenderConfig {
            weights: Weights {
                skills_similarity: 0.6,
                soft_skill_boost: 0.1,
                sector_boost: 0.15,
                education_boost: 0.1,
                location_boost: 0.15,
            },
            soft_skills: SoftSkills(vec![
                SoftSkillCategory {
                    name: "Communication".to_string(),
                    keywords: vec!["communication".to_string(), "presentation".to_string()],
                },
                SoftSkillCategory {
                    name: "Teamwork".to_string(),
                    keywords: vec!["teamwork".to_string(), "communication".to_string()],
                },
            ]),
        }
    }

    fn catalog() -> (TfIdfModel, Vec<IndexedEntry>) {
        let rows = vec![
            ("Technology", "Python; SQL; Data Analysis", "B.Tech Computer Science", "Bengaluru"),
            ("Technology", "Python; Machine Learning; teamwork", "B.Tech", "Pune"),
            ("Finance", "Excel; SQL; Communication", "B.Com or MBA", "Mumbai"),
            ("Finance", "Excel; Accounting", "B.Com", "Mumbai"),
            ("Marketing", "Presentation; Social Media", "BBA", "Delhi"),
        ];
        let mut entries: Vec<IndexedEntry> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (sector, skills, education, location))| {
                IndexedEntry::new(
                    i,
                    InternshipRow {
                        id: i as i64 + 1,
                        sector: Some(sector.to_string()),
                        skills: Some(skills.to_string()),
                        education: Some(education.to_string()),
                        location: Some(location.to_string()),
                    },
                )
            })
            .collect();
        let docs: Vec<&str> = entries.iter().map(|e| e.skills_processed.as_str()).collect();
        let fitted = TfIdfModel::fit(&docs, &VectorizerParams::default()).unwrap();
        for (entry, vector) in entries.iter_mut().zip(fitted.vectors) {
            entry.vector = vector;
        }
        (fitted.model, entries)
    }

    fn candidate(skills: &str) -> CandidateProfile {
        CandidateProfile {
            skills: skills.to_string(),
            top_k: 3,
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn test_skill_overlap_drives_similarity() {
        let (model, entries) = catalog();
        let prepared = PreparedCandidate::new(&candidate("python, sql"), &model);
        let scored = score_entry(&prepared, &entries[0], &config());
        assert!(scored.skills_similarity > 0.0);
        let unrelated = score_entry(&prepared, &entries[4], &config());
        assert_eq!(unrelated.skills_similarity, 0.0);
    }

    #[test]
    fn test_empty_skills_score_zero_similarity() {
        let (model, entries) = catalog();
        let prepared = PreparedCandidate::new(&candidate(""), &model);
        for entry in &entries {
            let scored = score_entry(&prepared, entry, &config());
            assert_eq!(scored.skills_similarity, 0.0);
            assert_eq!(scored.final_score, 0.0);
        }
    }

    #[test]
    fn test_sector_match_is_case_insensitive() {
        let (model, entries) = catalog();
        let mut profile = candidate("");
        profile.sector = Some("  finance ".to_string());
        let prepared = PreparedCandidate::new(&profile, &model);
        assert_eq!(score_entry(&prepared, &entries[2], &config()).sector_boost, 0.15);
        assert_eq!(score_entry(&prepared, &entries[0], &config()).sector_boost, 0.0);
    }

    #[test]
    fn test_education_is_substring_match() {
        let (model, entries) = catalog();
        let mut profile = candidate("");
        profile.education = Some("MBA".to_string());
        let prepared = PreparedCandidate::new(&profile, &model);
        assert_eq!(score_entry(&prepared, &entries[2], &config()).education_boost, 0.1);
        assert_eq!(score_entry(&prepared, &entries[3], &config()).education_boost, 0.0);
    }

    #[test]
    fn test_blank_preferences_give_no_boost() {
        let (model, entries) = catalog();
        let profile = CandidateProfile {
            skills: String::new(),
            sector: Some(" ".to_string()),
            education: Some("".to_string()),
            location: Some("\t".to_string()),
            top_k: 1,
        };
        let prepared = PreparedCandidate::new(&profile, &model);
        for entry in &entries {
            let scored = score_entry(&prepared, entry, &config());
            assert_eq!(scored.sector_boost + scored.education_boost + scored.location_boost, 0.0);
        }
    }

    #[test]
    fn test_location_exact_city_match() {
        let (model, entries) = catalog();
        let mut profile = candidate("");
        profile.location = Some("MUMBAI".to_string());
        let prepared = PreparedCandidate::new(&profile, &model);
        assert_eq!(score_entry(&prepared, &entries[3], &config()).location_boost, 0.15);
        assert_eq!(score_entry(&prepared, &entries[0], &config()).location_boost, 0.0);
    }

    #[test]
    fn test_first_soft_skill_category_wins() {
        let soft = config().soft_skills;
        // "communication" is listed in both categories
        assert_eq!(
            match_soft_skill("strong communication", "communication; excel", &soft),
            Some("Communication")
        );
        assert_eq!(
            match_soft_skill("teamwork", "python teamwork", &soft),
            Some("Teamwork")
        );
        assert_eq!(match_soft_skill("teamwork", "presentation", &soft), None);
    }

    #[test]
    fn test_soft_skill_boost_does_not_stack() {
        let (model, entries) = catalog();
        let prepared =
            PreparedCandidate::new(&candidate("communication teamwork presentation"), &model);
        let scored = score_entry(&prepared, &entries[2], &config());
        assert_eq!(scored.soft_skill_boost, 0.1);
        assert_eq!(scored.soft_skill_category.as_deref(), Some("Communication"));
    }

    #[test]
    fn test_final_score_never_below_weighted_similarity() {
        let (model, entries) = catalog();
        let profile = CandidateProfile {
            skills: "python sql excel communication".to_string(),
            sector: Some("Finance".to_string()),
            education: Some("b.com".to_string()),
            location: Some("Mumbai".to_string()),
            top_k: 5,
        };
        let prepared = PreparedCandidate::new(&profile, &model);
        let weights = config().weights;
        for entry in &entries {
            let scored = score_entry(&prepared, entry, &config());
            assert!(scored.final_score >= scored.skills_similarity * weights.skills_similarity);
        }
    }

    #[test]
    fn test_identical_entries_score_identically() {
        let (model, mut entries) = catalog();
        let mut twin = entries[3].clone();
        twin.index = entries.len();
        entries.push(twin);
        let prepared = PreparedCandidate::new(&candidate("excel accounting"), &model);
        let a = score_entry(&prepared, &entries[3], &config());
        let b = score_entry(&prepared, &entries[5], &config());
        assert_eq!(a.final_score, b.final_score);
    }

    #[test]
    fn test_sort_breaks_ties_by_catalog_position() {
        let (model, entries) = catalog();
        let prepared = PreparedCandidate::new(&candidate(""), &model);
        let mut scored: Vec<_> = entries
            .iter()
            .rev()
            .map(|e| score_entry(&prepared, e, &config()))
            .collect();
        sort_by_final_score(&mut scored);
        let order: Vec<usize> = scored.iter().map(|s| s.entry.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
