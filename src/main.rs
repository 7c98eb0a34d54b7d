use std::sync::Arc;

use mentalmate::config::Config;
use mentalmate::llm::{create_provider, ChatProvider};
use mentalmate::routes::configure_routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let provider: Arc<dyn ChatProvider> = Arc::from(create_provider(&config.provider));
    let routes = configure_routes(provider);

    println!("Starting server on http://0.0.0.0:{}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
