mod chat;
mod document;
mod rag;
mod synthesis;

pub use chat::{ChatService, Exchange};
pub use document::KnowledgeService;
pub use rag::{RagService, DEFAULT_TOP_K};
pub use synthesis::{AnswerSynthesizer, Responses, Synthesis};
