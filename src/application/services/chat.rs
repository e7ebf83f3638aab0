use tracing::instrument;

use crate::application::services::{AnswerSynthesizer, RagService};
use crate::domain::{Conversation, Corpus, Message};

/// Result of one `ask`: the new history snapshot and the assistant reply, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub history: Conversation,
    pub reply: Option<Message>,
}

/// Conversation engine: query in, annotated assistant reply out.
///
/// Holds no session state. Every call is a pure function of the query, the
/// history snapshot and the corpus snapshot it is given.
pub struct ChatService {
    rag: RagService,
    synthesizer: AnswerSynthesizer,
}

impl ChatService {
    pub fn new(rag: RagService, synthesizer: AnswerSynthesizer) -> Self {
        Self { rag, synthesizer }
    }

    pub fn rag(&self) -> &RagService {
        &self.rag
    }

    /// Appends the user query and the synthesized reply to `history`.
    /// A blank query leaves the history untouched and produces no reply.
    #[instrument(skip(self, history, corpus), fields(history = history.len(), documents = corpus.len()))]
    pub fn ask(&self, query: &str, mut history: Conversation, corpus: &Corpus) -> Exchange {
        if query.trim().is_empty() {
            return Exchange {
                history,
                reply: None,
            };
        }

        history.push(Message::user(query));

        let snippets = self.rag.retrieve(query, corpus.list());
        let synthesis = self.synthesizer.synthesize(&snippets, query);

        let reply = Message::assistant(synthesis.answer, synthesis.used_retrieval);
        history.push(reply.clone());

        tracing::info!(
            snippets = snippets.len(),
            used_knowledge_base = reply.used_knowledge_base,
            "reply generated"
        );

        Exchange {
            history,
            reply: Some(reply),
        }
    }

    /// Starts a fresh conversation.
    pub fn clear_history(&self, history: &Conversation) -> Conversation {
        tracing::info!(messages = history.len(), "conversation cleared");
        Conversation::default()
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(RagService::default(), AnswerSynthesizer::default())
    }
}
