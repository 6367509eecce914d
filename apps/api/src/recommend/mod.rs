// Internship recommendation core.
// Startup: normalize catalog → fit TF-IDF → similarity matrix → sector profiles.
// Per request: normalize → embed → score every entry → pick strategy → rank → reasons.

pub mod catalog;
pub mod diversity;
pub mod engine;
pub mod handlers;
pub mod normalize;
pub mod reasons;
pub mod scoring;
pub mod sector_profile;
pub mod similarity;
pub mod stop_words;
pub mod strategy;
pub mod vectorizer;
pub mod weights;

pub use engine::{EngineParams, Recommendation, RecommendationResult, Recommender};
