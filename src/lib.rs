//! # Confab
//!
//! A small intent-classification chatbot.
//!
//! A fixed [catalog](catalog) of intents, each with example phrasings and
//! canned replies, is used to fit a text classifier (TF-IDF features and a
//! multinomial logistic regression). At run time any user text is routed to
//! exactly one intent and one of its replies is picked at random.
//!
//! ## Modules
//!
//! - [`analysis`] - tokenization and normalization of text
//! - [`catalog`] - intents and the catalog schema
//! - [`ml`] - the intent classifier
//! - [`chat`] - reply selection, chat sessions and transcripts
//! - [`cli`] - the `confab` command line tool

pub mod analysis;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::catalog::{Intent, IntentCatalog};
    pub use crate::chat::{ChatSession, Chatbot, ResponseSelector, TurnOutcome};
    pub use crate::error::{ConfabError, Result};
    pub use crate::ml::intent_classifier::{ClassifierConfig, IntentClassifier, Prediction};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
