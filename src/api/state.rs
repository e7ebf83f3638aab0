use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::{AnswerSynthesizer, ChatService, KnowledgeService, RagService};
use crate::domain::{ports::SnapshotStore, Conversation, Corpus, DomainError, SentenceScorer};
use crate::infrastructure::AppConfig;

/// The authoritative snapshots for one running host.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub corpus: Corpus,
    pub conversation: Conversation,
}

/// Shared handler state.
///
/// `session` is locked for the whole of every mutating request, snapshot write
/// included, so at most one `ask` is ever in flight.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub store: Arc<dyn SnapshotStore>,
    pub chat_service: Arc<ChatService>,
    pub knowledge_service: KnowledgeService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn SnapshotStore>, config: AppConfig) -> Self {
        let retrieval = &config.config.retrieval;
        let rag = RagService::new(
            SentenceScorer::new(retrieval.min_term_length),
            retrieval.top_k,
        );
        let synthesizer = AnswerSynthesizer::new(config.responses.clone());

        Self {
            session: Arc::new(Mutex::new(Session::default())),
            store,
            chat_service: Arc::new(ChatService::new(rag, synthesizer)),
            knowledge_service: KnowledgeService::new(),
            config: Arc::new(config),
        }
    }

    /// Builds the state and restores both snapshots from `store`.
    pub async fn load(store: Arc<dyn SnapshotStore>, config: AppConfig) -> Result<Self, DomainError> {
        let corpus = store.load_corpus().await?;
        let conversation = store.load_conversation().await?;
        tracing::info!(
            documents = corpus.len(),
            messages = conversation.len(),
            "session restored"
        );

        let state = Self::new(store, config);
        *state.session.lock().await = Session {
            corpus,
            conversation,
        };
        Ok(state)
    }
}
