//! Conversation management for memchat
//!
//! Holds per-user transcripts in memory, composes prompts from them and
//! drives one chat turn from a submitted form to the updated display.

pub mod chain;
pub mod store;
pub mod surface;

pub use chain::ConversationChain;
pub use store::{SessionStore, SharedTranscript, Transcript};
pub use surface::{ChatSurface, HistoryMode};
