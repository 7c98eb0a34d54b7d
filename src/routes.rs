// Route definitions

use std::sync::Arc;

use warp::Filter;

use crate::handlers;
use crate::llm::ChatProvider;

pub fn configure_routes(
    provider: Arc<dyn ChatProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let with_provider = warp::any().map(move || provider.clone());

    // POST /generate (form-encoded, browser UI)
    let generate_form = warp::path("generate")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_provider.clone())
        .and(warp::body::form())
        .and_then(handlers::generate_form_handler);

    // POST /api/generate (JSON)
    let generate_api = warp::path("api")
        .and(warp::path("generate"))
        .and(warp::path::end())
        .and(warp::post())
        .and(with_provider)
        .and(warp::body::json())
        .and_then(handlers::generate_api_handler);

    // The browser UI may be served from a different origin.
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["POST"])
        .allow_headers(vec!["content-type"]);

    generate_form.or(generate_api).with(cors)
}
