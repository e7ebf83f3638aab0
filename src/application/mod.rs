//! Application layer - Use cases and orchestration.
//!
//! Services here are synchronous and stateless: they take corpus and
//! conversation snapshots and hand back new ones. The host decides where the
//! authoritative copies live.

pub mod services;

pub use services::{
    AnswerSynthesizer, ChatService, Exchange, KnowledgeService, RagService, Responses, Synthesis,
};
