//! Conversation glue around the intent classifier.
//!
//! A [`Chatbot`] is built once at start-up and shared read-only. Every
//! conversation gets its own [`ChatSession`], which owns the transcript and
//! the random source used to pick replies.
//!
//! # Examples
//!
//! ```
//! use confab::catalog::{Intent, IntentCatalog};
//! use confab::chat::{ChatSession, Chatbot};
//! use confab::ml::intent_classifier::ClassifierConfig;
//!
//! let catalog = IntentCatalog::new(vec![
//!     Intent::new("greeting", ["Hi", "Hello"], ["Hi there"]),
//!     Intent::new("goodbye", ["Bye", "See you later"], ["Goodbye"]),
//! ])
//! .unwrap();
//! let bot = Chatbot::new(catalog, ClassifierConfig::default()).unwrap();
//!
//! let mut session = ChatSession::seeded(7);
//! assert_eq!(session.turn(&bot, "Hello").unwrap().reply, "Hi there");
//!
//! let outcome = session.turn(&bot, "Bye").unwrap();
//! assert_eq!(outcome.reply, "Goodbye");
//! assert!(outcome.ended);
//! assert!(session.transcript().is_empty());
//! ```

pub mod bot;
pub mod selector;
pub mod session;

pub use bot::{Chatbot, Reply};
pub use selector::ResponseSelector;
pub use session::{
    ChatSession, FAREWELL, Message, Speaker, TurnOutcome, is_end_of_conversation,
};
