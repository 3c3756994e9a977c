//! Per-conversation state: the transcript and the turn operation.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

use super::bot::Chatbot;
use super::selector::ResponseSelector;

/// Shown when the user ends the conversation.
pub const FAREWELL: &str = "Thank you for chatting with me. Have a great day!";

/// Inputs that end a conversation, compared case-insensitively.
const END_OF_CONVERSATION: [&str; 2] = ["goodbye", "bye"];

/// Whether `text` is an explicit end-of-conversation signal.
///
/// This looks at the raw text, not at the classified tag. Surrounding
/// whitespace is significant; callers reading lines strip it first.
pub fn is_end_of_conversation(text: &str) -> bool {
    let lowered = text.to_lowercase();
    END_OF_CONVERSATION.contains(&lowered.as_str())
}

/// Who said a line of the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "You"),
            Speaker::Bot => write!(f, "Chatbot"),
        }
    }
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn now(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// What a single turn produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Tag the input was routed to.
    pub tag: String,
    /// Reply to display.
    pub reply: String,
    /// The user ended the conversation; the transcript has been cleared.
    pub ended: bool,
}

/// State owned by one conversation.
///
/// Sessions are not shared: each one mutates its own transcript and draws
/// replies from its own random source.
#[derive(Debug)]
pub struct ChatSession<R: Rng = StdRng> {
    id: Uuid,
    transcript: Vec<Message>,
    selector: ResponseSelector<R>,
}

impl<R: Rng> ChatSession<R> {
    /// Start a session that picks replies with `selector`.
    pub fn new(selector: ResponseSelector<R>) -> Self {
        let id = Uuid::new_v4();
        log::debug!("Started chat session {id}");
        Self {
            id,
            transcript: Vec::new(),
            selector,
        }
    }

    /// Handle one user input: classify it, pick a reply and record both
    /// lines. On "bye"/"goodbye" the reply is still returned, then the
    /// transcript is cleared.
    pub fn turn(&mut self, bot: &Chatbot, text: &str) -> Result<TurnOutcome> {
        let reply = bot.reply(text, &mut self.selector)?;

        self.transcript.push(Message::now(Speaker::User, text));
        self.transcript.push(Message::now(Speaker::Bot, reply.text.clone()));

        let ended = is_end_of_conversation(text);
        if ended {
            log::info!(
                "Session {} ended by user after {} messages",
                self.id,
                self.transcript.len()
            );
            self.reset();
        }

        Ok(TurnOutcome {
            tag: reply.tag,
            reply: reply.text,
            ended,
        })
    }

    /// Clear the transcript.
    pub fn reset(&mut self) {
        self.transcript.clear();
    }

    /// Messages so far, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl ChatSession<StdRng> {
    /// A session with reproducible reply selection.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ResponseSelector::seeded(seed))
    }

    /// A session seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ResponseSelector::from_entropy())
    }
}
