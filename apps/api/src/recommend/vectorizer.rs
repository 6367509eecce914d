//! TF-IDF vector space model over the catalog's normalized skills.
//!
//! Vocabulary: unigrams and bigrams built from tokens of two or more word
//! characters, after stop-word removal. Terms must occur in at least `min_df`
//! documents and at most `max_df` (a proportion) of them; the `max_features`
//! most frequent survivors are kept. Weights are raw term counts times the
//! smoothed IDF `ln((1 + n) / (1 + df)) + 1`, L2-normalized per document.

use std::collections::HashMap;

use crate::errors::ConfigurationError;
use crate::recommend::similarity::SparseVector;
use crate::recommend::stop_words::is_stop_word;

#[derive(Debug, Clone)]
pub struct VectorizerParams {
    pub max_features: usize,
    pub max_ngram: usize,
    pub min_df: usize,
    pub max_df: f64,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            max_features: 1000,
            max_ngram: 2,
            min_df: 2,
            max_df: 0.8,
        }
    }
}

/// Fitted vocabulary and IDF weights. Immutable once built.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    max_ngram: usize,
}

/// Result of fitting: the model together with the vectors it produced.
/// Keeping both in one value stops stale vectors outliving a re-fit.
#[derive(Debug, Clone)]
pub struct FittedCorpus {
    pub model: TfIdfModel,
    pub vectors: Vec<SparseVector>,
}

impl TfIdfModel {
    pub fn fit(
        documents: &[&str],
        params: &VectorizerParams,
    ) -> Result<FittedCorpus, ConfigurationError> {
        if documents.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }
        let n_docs = documents.len();

        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| term_counts(doc, params.max_ngram))
            .collect();

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for (term, &count) in doc {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                *corpus_freq.entry(term.as_str()).or_insert(0) += count;
            }
        }

        if doc_freq.is_empty() {
            return Err(ConfigurationError::EmptyVocabulary);
        }

        let max_doc_count = params.max_df * n_docs as f64;
        if max_doc_count < params.min_df as f64 {
            return Err(ConfigurationError::InconsistentDocumentFrequency {
                min_df: params.min_df,
                max_doc_count,
            });
        }

        let mut kept: Vec<(&str, usize)> = doc_freq
            .iter()
            .filter(|(_, df)| **df >= params.min_df && **df as f64 <= max_doc_count)
            .map(|(term, _)| (*term, corpus_freq[term]))
            .collect();

        if kept.is_empty() {
            return Err(ConfigurationError::NoTermsAfterPruning);
        }

        // Most frequent first; alphabetical among equals so the cut is stable.
        kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        kept.truncate(params.max_features);

        let mut terms: Vec<&str> = kept.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f64;
                ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let model = TfIdfModel {
            vocabulary,
            idf,
            max_ngram: params.max_ngram,
        };
        let vectors = counts.iter().map(|c| model.weigh(c)).collect();

        Ok(FittedCorpus { model, vectors })
    }

    /// Embeds normalized text into the fitted space. Unknown terms contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&term_counts(text, self.max_ngram))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn weigh(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let pairs = counts
            .iter()
            .filter_map(|(term, &count)| {
                self.vocabulary
                    .get(term)
                    .map(|&idx| (idx, count as f64 * self.idf[idx]))
            })
            .collect();
        let mut vector = SparseVector::from_pairs(pairs);
        vector.l2_normalize();
        vector
    }
}

/// Splits on anything that is not a word character and keeps tokens of two
/// or more characters.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .collect()
}

/// Stop-word filtered n-grams (1..=max_ngram) of a text, in order.
pub fn analyze(text: &str, max_ngram: usize) -> Vec<String> {
    let tokens: Vec<&str> = tokenize(text)
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .collect();

    let mut grams: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for n in 2..=max_ngram {
        grams.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    grams
}

fn term_counts(text: &str, max_ngram: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for gram in analyze(text, max_ngram) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}
