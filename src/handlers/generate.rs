// POST /generate and POST /api/generate handlers

use std::convert::Infallible;
use std::sync::Arc;

use warp::http::StatusCode;

use crate::llm::ChatProvider;
use crate::models::{ChatForm, ChatRequest, ChatResponse, ErrorResponse};

/// Fixed reply for empty or whitespace-only input; no provider call is made.
pub const EMPTY_INPUT_REPLY: &str = "Please enter a message first.";

/// Form endpoint used by the browser UI. Always replies 200; provider and
/// transport failures are embedded in the response text.
pub async fn generate_form_handler(
    provider: Arc<dyn ChatProvider>,
    form: ChatForm,
) -> Result<impl warp::Reply, Infallible> {
    println!("POST /generate: {}", form.user_input);

    let reply = match run_pipeline(&provider, &form.user_input).await {
        Ok(text) => text,
        Err(e) => format!("An error occurred: {}", e),
    };

    Ok(warp::reply::json(&ChatResponse { response: reply }))
}

/// JSON API endpoint. Replies 200 with `{"response": ...}` on success
/// (provider-level fallback strings included) and 500 with `{"error": ...}`
/// when an error escapes the pipeline.
pub async fn generate_api_handler(
    provider: Arc<dyn ChatProvider>,
    request: ChatRequest,
) -> Result<impl warp::Reply, Infallible> {
    println!("POST /api/generate: {}", request.user_input);

    match run_pipeline(&provider, &request.user_input).await {
        Ok(text) => Ok(warp::reply::with_status(
            warp::reply::json(&ChatResponse { response: text }),
            StatusCode::OK,
        )),
        Err(e) => {
            eprintln!("Error occurred: {}", e);
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorResponse {
                    error: format!("Internal server error: {}", e),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

/// Shared validate-then-generate pipeline for both endpoints.
///
/// Empty-after-trim input short-circuits with the fixed reply before any
/// outbound call is issued.
async fn run_pipeline(
    provider: &Arc<dyn ChatProvider>,
    user_input: &str,
) -> Result<String, crate::llm::LlmError> {
    if user_input.trim().is_empty() {
        return Ok(EMPTY_INPUT_REPLY.to_string());
    }
    provider.generate_reply(user_input).await
}
