use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::domain::{Corpus, KnowledgeDocument};

#[derive(Debug, Deserialize)]
pub struct CreateDocumentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreateDocumentResponse {
    pub document: Option<KnowledgeDocument>,
    pub documents: Vec<KnowledgeDocument>,
}

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<KnowledgeDocument>,
}

impl From<Corpus> for DocumentsResponse {
    fn from(corpus: Corpus) -> Self {
        Self {
            documents: corpus.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchDocumentsRequest {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchDocumentsResponse {
    pub snippets: Vec<String>,
}

pub async fn list_documents(State(state): State<AppState>) -> Json<DocumentsResponse> {
    let session = state.session.lock().await;
    Json(DocumentsResponse::from(session.corpus.clone()))
}

pub async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<CreateDocumentResponse>), StatusCode> {
    let mut session = state.session.lock().await;
    let (corpus, document) = state
        .knowledge_service
        .add_document(session.corpus.clone(), &request.content);

    let status = if document.is_some() {
        state.store.save_corpus(&corpus).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save corpus");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        session.corpus = corpus;
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(CreateDocumentResponse {
            document,
            documents: session.corpus.list().to_vec(),
        }),
    ))
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentsResponse>, StatusCode> {
    let mut session = state.session.lock().await;
    if session.corpus.get(id).is_some() {
        let corpus = state
            .knowledge_service
            .delete_document(session.corpus.clone(), id);
        state.store.save_corpus(&corpus).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save corpus");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        session.corpus = corpus;
    }

    Ok(Json(DocumentsResponse::from(session.corpus.clone())))
}

pub async fn clear_documents(
    State(state): State<AppState>,
) -> Result<Json<DocumentsResponse>, StatusCode> {
    let mut session = state.session.lock().await;
    let corpus = state
        .knowledge_service
        .clear_corpus(&session.corpus);

    state.store.save_corpus(&corpus).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to save corpus");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    session.corpus = corpus;

    Ok(Json(DocumentsResponse::from(session.corpus.clone())))
}

pub async fn search_documents(
    State(state): State<AppState>,
    Json(request): Json<SearchDocumentsRequest>,
) -> Json<SearchDocumentsResponse> {
    let session = state.session.lock().await;
    let rag = state.chat_service.rag();
    let documents = session.corpus.list();

    let snippets = match request.limit {
        Some(limit) => rag.retrieve_top_k(&request.query, documents, limit),
        None => rag.retrieve(&request.query, documents),
    };

    Json(SearchDocumentsResponse { snippets })
}
