//! Query endpoint: retrieval plus grounded generation

use axum::{extract::State, Json};

use crate::error::Result;
use crate::generation::{GeminiClient, PromptBuilder};
use crate::server::state::AppState;
use crate::types::query::QueryRequest;
use crate::types::response::{Citation, QueryResponse};

/// POST /query - answer a question from the indexed documents
pub async fn query_documents(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    // Credential precondition: fail before touching the store or the model.
    GeminiClient::api_key()?;

    tracing::info!("Query: {}", request.question);

    let results = state.retriever().retrieve(&request.question).await?;

    let context = PromptBuilder::build_context(&results);
    let prompt = PromptBuilder::build(&request.question, &context);
    let answer = state.llm().generate(&prompt).await?;

    let citations: Vec<Citation> = results
        .iter()
        .map(|r| Citation::from_entry(&r.entry))
        .collect();

    tracing::info!("Answered with {} citations", citations.len());

    Ok(Json(QueryResponse { answer, citations }))
}
