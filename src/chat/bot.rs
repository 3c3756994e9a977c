//! The chatbot: a catalog plus the classifier fitted on it.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::StandardAnalyzer;
use crate::catalog::IntentCatalog;
use crate::error::{ConfabError, Result};
use crate::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier, Prediction};

use super::selector::ResponseSelector;

/// A reply to one piece of user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Tag the input was routed to.
    pub tag: String,
    /// Classifier confidence in `tag`.
    pub confidence: f64,
    /// Chosen response text.
    pub text: String,
}

/// Fitted classifier and the catalog it was fitted on.
///
/// Immutable after construction; share it between sessions by reference.
pub struct Chatbot {
    catalog: IntentCatalog,
    classifier: Box<dyn IntentClassifier>,
}

impl Chatbot {
    /// Fit the ML-based classifier on `catalog` with the standard analyzer.
    pub fn new(catalog: IntentCatalog, config: ClassifierConfig) -> Result<Self> {
        let analyzer = Arc::new(StandardAnalyzer::new()?);
        let classifier = intent_classifier::new_ml_based(&catalog, analyzer, config)?;
        Ok(Self::with_classifier(catalog, classifier))
    }

    /// Use an already fitted classifier.
    pub fn with_classifier(catalog: IntentCatalog, classifier: Box<dyn IntentClassifier>) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    /// The catalog replies are drawn from.
    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Classify `text`. The tag is guaranteed to be in the catalog.
    pub fn classify(&self, text: &str) -> Result<Prediction> {
        let prediction = self.classifier.classify(text)?;
        if !self.catalog.contains(&prediction.tag) {
            return Err(ConfabError::unknown_tag(prediction.tag));
        }
        Ok(prediction)
    }

    /// Classify `text` and pick one of the matched intent's responses.
    pub fn reply<R: Rng>(&self, text: &str, selector: &mut ResponseSelector<R>) -> Result<Reply> {
        let prediction = self.classify(text)?;
        let responses = self.catalog.responses_for(&prediction.tag)?;
        let response = selector.select(responses)?.to_string();

        log::debug!(
            "Routed {text:?} to '{}' (confidence {:.3})",
            prediction.tag,
            prediction.confidence
        );
        Ok(Reply {
            tag: prediction.tag,
            confidence: prediction.confidence,
            text: response,
        })
    }
}

impl std::fmt::Debug for Chatbot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chatbot")
            .field("intents", &self.catalog.len())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Intent;
    use crate::chat::selector::tests::ZeroRng;

    /// Routes everything to one fixed tag.
    pub(crate) struct FixedClassifier(pub &'static str);

    impl IntentClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> Result<Prediction> {
            Ok(Prediction {
                tag: self.0.to_string(),
                confidence: 1.0,
                fallback: false,
            })
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    pub(crate) fn small_catalog() -> IntentCatalog {
        IntentCatalog::new(vec![
            Intent::new("greeting", ["Hi", "Hello"], ["Hi there"]),
            Intent::new("goodbye", ["Bye", "See you later"], ["Goodbye"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_reply() {
        let bot = Chatbot::new(small_catalog(), ClassifierConfig::default()).unwrap();
        let mut selector = ResponseSelector::seeded(0);

        let reply = bot.reply("Hello", &mut selector).unwrap();
        assert_eq!(reply.tag, "greeting");
        assert_eq!(reply.text, "Hi there");

        let reply = bot.reply("Bye", &mut selector).unwrap();
        assert_eq!(reply.tag, "goodbye");
        assert_eq!(reply.text, "Goodbye");
    }

    #[test]
    fn test_reply_comes_from_matched_intent() {
        let catalog = IntentCatalog::builtin().unwrap();
        let bot = Chatbot::new(catalog, ClassifierConfig::default()).unwrap();
        let mut selector = ResponseSelector::seeded(11);

        for text in ["Thanks a lot", "how old are you", "zzz", ""] {
            let reply = bot.reply(text, &mut selector).unwrap();
            let responses = bot.catalog().responses_for(&reply.tag).unwrap();
            assert!(responses.contains(&reply.text));
        }
    }

    #[test]
    fn test_reply_with_injected_rng() {
        let bot = Chatbot::new(IntentCatalog::builtin().unwrap(), ClassifierConfig::default())
            .unwrap();
        let mut selector = ResponseSelector::new(ZeroRng);
        assert_eq!(bot.reply("Thanks", &mut selector).unwrap().text, "You're welcome");
    }

    #[test]
    fn test_unknown_tag_from_classifier() {
        let bot = Chatbot::with_classifier(small_catalog(), Box::new(FixedClassifier("weather")));
        let mut selector = ResponseSelector::seeded(0);
        assert!(matches!(
            bot.reply("Hello", &mut selector),
            Err(ConfabError::UnknownTag(tag)) if tag == "weather"
        ));
    }

    #[test]
    fn test_chatbot_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chatbot>();
    }
}
