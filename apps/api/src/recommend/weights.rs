//! Scoring weights and the soft-skills dictionary, loaded once from a JSON file.
//!
//! ```json
//! {
//!   "weights": {
//!     "skills_similarity": 0.6, "soft_skill_boost": 0.1,
//!     "sector_boost": 0.15, "education_boost": 0.1, "location_boost": 0.15
//!   },
//!   "soft_skills": { "communication": ["communication", "presentation"] }
//! }
//! ```

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConfigurationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weights {
    pub skills_similarity: f64,
    #[serde(default = "default_soft_skill_boost")]
    pub soft_skill_boost: f64,
    pub sector_boost: f64,
    pub education_boost: f64,
    pub location_boost: f64,
}

fn default_soft_skill_boost() -> f64 {
    0.1
}

impl Weights {
    /// Every weight must be finite and non-negative so boosts never lower a score.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let named = [
            ("skills_similarity", self.skills_similarity),
            ("soft_skill_boost", self.soft_skill_boost),
            ("sector_boost", self.sector_boost),
            ("education_boost", self.education_boost),
            ("location_boost", self.location_boost),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// A named group of keyword phrases, e.g. "teamwork" → ["team player", "collaboration"].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftSkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Soft-skill categories in file order. The first category matching both
/// sides wins, so order matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoftSkills(pub Vec<SoftSkillCategory>);

impl SoftSkills {
    pub fn categories(&self) -> &[SoftSkillCategory] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for SoftSkills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedCategories;

        impl<'de> Visitor<'de> for OrderedCategories {
            type Value = SoftSkills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to keyword list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SoftSkills, A::Error> {
                let mut categories = Vec::new();
                while let Some((name, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    let keywords: Vec<String> = keywords
                        .iter()
                        .map(|k| k.trim().to_lowercase())
                        .filter(|k| !k.is_empty())
                        .collect();
                    categories.push(SoftSkillCategory { name, keywords });
                }
                Ok(SoftSkills(categories))
            }
        }

        deserializer.deserialize_map(OrderedCategories)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub weights: Weights,
    #[serde(default)]
    pub soft_skills: SoftSkills,
}

impl RecommenderConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: RecommenderConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigurationError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.weights.validate()?;
        Ok(config)
    }
}
