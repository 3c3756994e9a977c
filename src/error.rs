//! Error types for the Confab library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`ConfabError`] enum. Catalog and fit errors are meant to stop start-up;
//! once a [`Chatbot`](crate::chat::Chatbot) exists, classifying text never fails.
//!
//! # Examples
//!
//! ```
//! use confab::error::{ConfabError, Result};
//!
//! fn lookup(tag: &str) -> Result<()> {
//!     Err(ConfabError::unknown_tag(tag))
//! }
//!
//! match lookup("weather") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Confab operations.
#[derive(Error, Debug)]
pub enum ConfabError {
    /// I/O errors (reading catalogs, config files, the terminal)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A tag was looked up that no intent in the catalog carries
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// Two intents in one catalog share a tag
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// Not enough training data to fit a classifier
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A model was used before it was fitted
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// Catalog contents violate the catalog schema
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Classifier configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ConfabError.
pub type Result<T> = std::result::Result<T, ConfabError>;

impl ConfabError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ConfabError::Analysis(msg.into())
    }

    /// Create a new unknown tag error.
    pub fn unknown_tag<S: Into<String>>(tag: S) -> Self {
        ConfabError::UnknownTag(tag.into())
    }

    /// Create a new duplicate tag error.
    pub fn duplicate_tag<S: Into<String>>(tag: S) -> Self {
        ConfabError::DuplicateTag(tag.into())
    }

    /// Create a new insufficient data error.
    pub fn insufficient_data<S: Into<String>>(msg: S) -> Self {
        ConfabError::InsufficientData(msg.into())
    }

    /// Create a new not fitted error.
    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        ConfabError::NotFitted(msg.into())
    }

    /// Create a new invalid catalog error.
    pub fn invalid_catalog<S: Into<String>>(msg: S) -> Self {
        ConfabError::InvalidCatalog(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ConfabError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ConfabError::Other(msg.into())
    }
}
