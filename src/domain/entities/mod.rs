mod conversation;
mod document;

pub use conversation::{Conversation, Message, MessageRole};
pub use document::{Corpus, KnowledgeDocument, ScoredSentence};
