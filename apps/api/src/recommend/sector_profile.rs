//! Per-sector skill hints for the stepping-stone fallback.
//!
//! Each sector's normalized skills are pooled into one blob and its most
//! frequent stop-word-free unigrams are kept, independent of the global
//! vocabulary.

use std::collections::HashMap;

use crate::recommend::catalog::IndexedEntry;
use crate::recommend::vectorizer::analyze;

#[derive(Debug, Clone, PartialEq)]
pub struct SectorProfile {
    /// Sector name as first seen in the catalog.
    pub sector: String,
    /// Most frequent first; alphabetical among equals.
    pub top_terms: Vec<String>,
}

impl SectorProfile {
    /// Number of the profile's terms contained in `skills_processed`.
    pub fn overlap(&self, skills_processed: &str) -> usize {
        self.top_terms
            .iter()
            .filter(|term| skills_processed.contains(term.as_str()))
            .count()
    }

    /// First (highest ranked) profile term contained in `skills_processed`.
    pub fn first_match(&self, skills_processed: &str) -> Option<&str> {
        self.top_terms
            .iter()
            .map(String::as_str)
            .find(|term| skills_processed.contains(term))
    }
}

/// Profiles keyed by lowercased, trimmed sector name.
#[derive(Debug, Clone, Default)]
pub struct SectorProfiles {
    by_sector: HashMap<String, SectorProfile>,
}

impl SectorProfiles {
    pub fn build(entries: &[IndexedEntry], top_n: usize) -> Self {
        let mut blobs: HashMap<&str, (String, Vec<&str>)> = HashMap::new();
        for entry in entries {
            let (Some(key), Some(display)) =
                (entry.sector_key.as_deref(), entry.row.sector.as_deref())
            else {
                continue;
            };
            blobs
                .entry(key)
                .or_insert_with(|| (display.trim().to_string(), Vec::new()))
                .1
                .push(entry.skills_processed.as_str());
        }

        let by_sector = blobs
            .into_iter()
            .map(|(key, (sector, skills))| {
                let top_terms = top_terms(&skills.join(" "), top_n);
                (key.to_string(), SectorProfile { sector, top_terms })
            })
            .collect();

        Self { by_sector }
    }

    /// Profile for a candidate's sector, if it has any terms.
    pub fn lookup(&self, sector: Option<&str>) -> Option<&SectorProfile> {
        let key = sector?.trim().to_lowercase();
        self.by_sector
            .get(&key)
            .filter(|profile| !profile.top_terms.is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_sector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sector.is_empty()
    }
}

fn top_terms(blob: &str, top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in blob.split_whitespace() {
        for term in analyze(word, 1) {
            *counts.entry(term).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(top_n).map(|(term, _)| term).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::internship::InternshipRow;

    fn entry(index: usize, sector: Option<&str>, skills: &str) -> IndexedEntry {
        IndexedEntry::new(
            index,
            InternshipRow {
                id: index as i64 + 1,
                sector: sector.map(str::to_string),
                skills: Some(skills.to_string()),
                education: None,
                location: None,
            },
        )
    }

    #[test]
    fn test_ranks_terms_by_frequency() {
        let entries = vec![
            entry(0, Some("Finance"), "excel; accounting; the audit"),
            entry(1, Some("Finance"), "Excel; Tally"),
            entry(2, Some("finance "), "excel accounting"),
            entry(3, Some("Tech"), "rust"),
        ];
        let profiles = SectorProfiles::build(&entries, 10);
        let finance = profiles.lookup(Some("FINANCE")).unwrap();
        assert_eq!(finance.sector, "Finance");
        assert_eq!(finance.top_terms, vec!["excel", "accounting", "audit", "tally"]);
        assert_eq!(profiles.len(), 2);
    }

    #[test]
    fn test_top_n_truncates() {
        let entries = vec![entry(0, Some("Tech"), "rust go java python sql")];
        let profiles = SectorProfiles::build(&entries, 2);
        assert_eq!(profiles.lookup(Some("tech")).unwrap().top_terms.len(), 2);
    }

    #[test]
    fn test_stop_word_only_sector_has_no_profile() {
        let entries = vec![entry(0, Some("Misc"), "the and of")];
        let profiles = SectorProfiles::build(&entries, 10);
        assert_eq!(profiles.len(), 1);
        assert!(profiles.lookup(Some("Misc")).is_none());
    }

    #[test]
    fn test_missing_sector_rows_are_skipped() {
        let entries = vec![entry(0, None, "rust"), entry(1, Some("  "), "go")];
        let profiles = SectorProfiles::build(&entries, 10);
        assert!(profiles.is_empty());
        assert!(profiles.lookup(None).is_none());
    }

    #[test]
    fn test_overlap_counts_substring_hits() {
        let profile = SectorProfile {
            sector: "Finance".to_string(),
            top_terms: vec!["excel".to_string(), "audit".to_string(), "tally".to_string()],
        };
        assert_eq!(profile.overlap("advanced excel auditing"), 2);
        assert_eq!(profile.first_match("tally and excel"), Some("excel"));
        assert_eq!(profile.first_match("python"), None);
    }
}
