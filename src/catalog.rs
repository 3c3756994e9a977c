//! The intent catalog: the fixed set of intents the chatbot knows about.
//!
//! A catalog is built once (from JSON, a file, or the built-in data) and is
//! read-only afterwards. Tags are unique within a catalog; patterns of
//! different intents may overlap freely.
//!
//! # Examples
//!
//! ```
//! use confab::catalog::{Intent, IntentCatalog};
//!
//! let catalog = IntentCatalog::new(vec![
//!     Intent::new("greeting", ["Hi", "Hello"], ["Hi there"]),
//!     Intent::new("goodbye", ["Bye", "See you later"], ["Goodbye"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.responses_for("greeting").unwrap(), ["Hi there"]);
//! assert_eq!(catalog.all_training_pairs().len(), 4);
//! ```

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfabError, Result};

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../resources/intents.json");

/// A named conversational category with example phrasings and replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique identifier of the intent.
    pub tag: String,
    /// Example user utterances, used as training data.
    pub patterns: Vec<String>,
    /// Candidate replies.
    pub responses: Vec<String>,
}

impl Intent {
    /// Create a new intent.
    pub fn new<T, P, R>(tag: T, patterns: P, responses: R) -> Self
    where
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Intent {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// One training example: a pattern labelled with its intent's tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    /// Pattern text.
    pub pattern: String,
    /// Tag of the intent the pattern belongs to.
    pub tag: String,
}

/// An immutable collection of intents with unique tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Intent>", into = "Vec<Intent>")]
pub struct IntentCatalog {
    intents: Vec<Intent>,
    by_tag: AHashMap<String, usize>,
}

impl IntentCatalog {
    /// Create a catalog, rejecting duplicate tags.
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let mut by_tag = AHashMap::with_capacity(intents.len());
        for (idx, intent) in intents.iter().enumerate() {
            if by_tag.insert(intent.tag.clone(), idx).is_some() {
                return Err(ConfabError::duplicate_tag(intent.tag.clone()));
            }
        }

        Ok(IntentCatalog { intents, by_tag })
    }

    /// Parse a catalog from a JSON array of intents.
    pub fn from_json(json: &str) -> Result<Self> {
        let intents: Vec<Intent> = serde_json::from_str(json)?;
        Self::new(intents)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        log::debug!(
            "Loaded {} intents from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate (greeting, goodbye, thanks, about,
    /// help, age, weather, budget, credit_score).
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Candidate replies for `tag`.
    pub fn responses_for(&self, tag: &str) -> Result<&[String]> {
        self.get(tag)
            .map(|intent| intent.responses.as_slice())
            .ok_or_else(|| ConfabError::unknown_tag(tag))
    }

    /// Every pattern of every intent paired with its tag, in catalog order.
    pub fn all_training_pairs(&self) -> Vec<TrainingPair> {
        self.intents
            .iter()
            .flat_map(|intent| {
                intent.patterns.iter().map(|pattern| TrainingPair {
                    pattern: pattern.clone(),
                    tag: intent.tag.clone(),
                })
            })
            .collect()
    }

    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.by_tag.get(tag).map(|&idx| &self.intents[idx])
    }

    /// Check whether an intent with `tag` exists.
    pub fn contains(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// Tags in catalog order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(|intent| intent.tag.as_str())
    }

    /// All intents in catalog order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Number of intents.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the catalog has no intents.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Total number of patterns across all intents.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|intent| intent.patterns.len()).sum()
    }

    /// Check every intent against the catalog schema: a non-blank tag, at
    /// least one pattern and at least one response.
    pub fn validate(&self) -> Result<()> {
        for intent in &self.intents {
            if intent.tag.trim().is_empty() {
                return Err(ConfabError::invalid_catalog("intent with an empty tag"));
            }
            if intent.patterns.is_empty() {
                return Err(ConfabError::invalid_catalog(format!(
                    "intent '{}' has no patterns",
                    intent.tag
                )));
            }
            if intent.responses.is_empty() {
                return Err(ConfabError::invalid_catalog(format!(
                    "intent '{}' has no responses",
                    intent.tag
                )));
            }
        }
        Ok(())
    }

    /// Check that a classifier can be fitted on this catalog: at least two
    /// intents, each with patterns and responses.
    pub fn ensure_trainable(&self) -> Result<()> {
        if self.intents.len() < 2 {
            return Err(ConfabError::insufficient_data(format!(
                "need at least 2 distinct tags to fit a classifier, found {}",
                self.intents.len()
            )));
        }
        for intent in &self.intents {
            if intent.patterns.is_empty() {
                return Err(ConfabError::insufficient_data(format!(
                    "intent '{}' has no patterns",
                    intent.tag
                )));
            }
            if intent.responses.is_empty() {
                return Err(ConfabError::insufficient_data(format!(
                    "intent '{}' has no responses",
                    intent.tag
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Intent>> for IntentCatalog {
    type Error = ConfabError;

    fn try_from(intents: Vec<Intent>) -> Result<Self> {
        Self::new(intents)
    }
}

impl From<IntentCatalog> for Vec<Intent> {
    fn from(catalog: IntentCatalog) -> Self {
        catalog.intents
    }
}
