//! Human-readable justifications attached to each recommendation.

use crate::recommend::scoring::ScoredEntry;
use crate::recommend::sector_profile::SectorProfile;

const STRONG_MATCH_THRESHOLD: f64 = 0.4;
const GOOD_MATCH_THRESHOLD: f64 = 0.2;

/// Reasons for a direct match, in fixed priority order.
///
/// Education matches add to the score but deliberately produce no reason.
pub fn generate_reasons(scored: &ScoredEntry<'_>) -> Vec<String> {
    let mut reasons = Vec::new();

    if scored.skills_similarity > STRONG_MATCH_THRESHOLD {
        reasons.push("Strongly matches your technical skills.".to_string());
    } else if scored.skills_similarity > GOOD_MATCH_THRESHOLD {
        reasons.push("Good technical skill alignment.".to_string());
    }

    if scored.soft_skill_boost > 0.0 {
        match scored.soft_skill_category.as_deref() {
            Some(category) => reasons.push(format!("Matches your soft skills ({category}).")),
            None => reasons.push("Matches your soft skills.".to_string()),
        }
    }

    if scored.sector_boost > 0.0 {
        let sector = scored.entry.row.sector.as_deref().unwrap_or_default().trim();
        reasons.push(format!("It's in your preferred sector: {sector}."));
    }

    if scored.location_boost > 0.0 {
        let city = scored.entry.row.location.as_deref().unwrap_or_default().trim();
        reasons.push(format!("Located in your preferred city: {city}."));
    }

    if reasons.is_empty() {
        reasons.push("This is a potential opportunity to explore.".to_string());
    }

    reasons
}

/// Stepping-stone reason: names the highest ranked sector skill the entry
/// builds. Entries sharing no term with the profile get no reason.
pub fn stepping_stone_reasons(scored: &ScoredEntry<'_>, profile: &SectorProfile) -> Vec<String> {
    profile
        .first_match(&scored.entry.skills_processed)
        .map(|term| vec![format!("Builds key skill: {term}.")])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::internship::InternshipRow;
    use crate::recommend::catalog::IndexedEntry;

    fn entry() -> IndexedEntry {
        IndexedEntry::new(
            0,
            InternshipRow {
                id: 7,
                sector: Some("Finance".to_string()),
                skills: Some("Excel; Tally; Communication".to_string()),
                education: Some("B.Com".to_string()),
                location: Some("Mumbai".to_string()),
            },
        )
    }

    fn scored(entry: &IndexedEntry) -> ScoredEntry<'_> {
        ScoredEntry {
            entry,
            skills_similarity: 0.0,
            soft_skill_boost: 0.0,
            soft_skill_category: None,
            sector_boost: 0.0,
            education_boost: 0.0,
            location_boost: 0.0,
            final_score: 0.0,
        }
    }

    #[test]
    fn test_generic_reason_when_nothing_applies() {
        let e = entry();
        assert_eq!(
            generate_reasons(&scored(&e)),
            vec!["This is a potential opportunity to explore."]
        );
    }

    #[test]
    fn test_similarity_tiers() {
        let e = entry();
        let mut s = scored(&e);
        s.skills_similarity = 0.41;
        assert_eq!(generate_reasons(&s), vec!["Strongly matches your technical skills."]);
        s.skills_similarity = 0.4;
        assert_eq!(generate_reasons(&s), vec!["Good technical skill alignment."]);
        s.skills_similarity = 0.2;
        assert_eq!(
            generate_reasons(&s),
            vec!["This is a potential opportunity to explore."]
        );
    }

    #[test]
    fn test_reasons_keep_priority_order() {
        let e = entry();
        let mut s = scored(&e);
        s.skills_similarity = 0.5;
        s.soft_skill_boost = 0.1;
        s.soft_skill_category = Some("Communication".to_string());
        s.sector_boost = 0.15;
        s.location_boost = 0.15;
        assert_eq!(
            generate_reasons(&s),
            vec![
                "Strongly matches your technical skills.",
                "Matches your soft skills (Communication).",
                "It's in your preferred sector: Finance.",
                "Located in your preferred city: Mumbai.",
            ]
        );
    }

    #[test]
    fn test_education_boost_alone_gives_generic_reason() {
        let e = entry();
        let mut s = scored(&e);
        s.education_boost = 0.1;
        s.final_score = 0.1;
        assert_eq!(
            generate_reasons(&s),
            vec!["This is a potential opportunity to explore."]
        );
    }

    #[test]
    fn test_stepping_stone_reason_names_first_term() {
        let e = entry();
        let profile = SectorProfile {
            sector: "Finance".to_string(),
            top_terms: vec!["accounting".to_string(), "tally".to_string(), "excel".to_string()],
        };
        assert_eq!(
            stepping_stone_reasons(&scored(&e), &profile),
            vec!["Builds key skill: tally."]
        );
        let unrelated = SectorProfile {
            sector: "Finance".to_string(),
            top_terms: vec!["audit".to_string()],
        };
        assert!(stepping_stone_reasons(&scored(&e), &unrelated).is_empty());
    }
}
