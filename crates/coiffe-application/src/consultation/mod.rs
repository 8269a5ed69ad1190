//! Chat consultation flow.
//!
//! A turn runs `classify -> build prompt -> generate -> append`:
//!
//! - [`classifier`] asks the model whether the message is about products
//! - [`prompt`] assembles the generation prompt from cached session text
//! - [`session`] owns the conversation and schedules turns
//! - [`greeting`] renders the first assistant message
//!
//! The catalog section is sent only when the classifier answers YES.

pub mod classifier;
pub mod greeting;
pub mod prompt;
pub mod session;

pub use classifier::QueryClassifier;
pub use session::{
    ConsultationService, ConsultationSession, ConversationEvent, TurnOutcome, TurnState,
};
