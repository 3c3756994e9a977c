//! TF-IDF vectorizer for text feature extraction.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::{ConfabError, Result};

/// TF-IDF vectorizer for text feature extraction.
///
/// Each document becomes a vector of raw term counts weighted by the smoothed
/// inverse document frequency `ln((1 + n) / (1 + df)) + 1`, then scaled to
/// unit L2 norm. Terms are indexed in sorted order, so two fits on the same
/// documents produce identical feature layouts.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each feature.
    idf: Vec<f64>,
    /// Total number of documents seen during fit.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
    fitted: bool,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .field("fitted", &self.fitted)
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
            fitted: false,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(ConfabError::insufficient_data(
                "cannot fit a vectorizer on zero documents",
            ));
        }

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        for doc in documents {
            let unique_terms: AHashSet<String> = self.analyzer.terms(doc)?.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(ConfabError::insufficient_data(
                "empty vocabulary: no document contains a term",
            ));
        }

        let mut terms: Vec<(String, usize)> = document_frequency.into_iter().collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let n = documents.len() as f64;
        let mut vocabulary = AHashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, (term, df)) in terms.into_iter().enumerate() {
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();
        self.fitted = true;

        log::debug!(
            "Fitted TF-IDF vectorizer: {} documents, {} terms",
            self.n_documents,
            self.vocabulary.len()
        );
        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms outside the vocabulary are ignored; a document with no known
    /// terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ConfabError::not_fitted(
                "TfIdfVectorizer::transform called before fit",
            ));
        }

        let mut features = vec![0.0; self.vocabulary.len()];
        for term in self.analyzer.terms(document)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                features[idx] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    /// Fit on `documents` and return their feature vectors.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of `term`, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }
}
