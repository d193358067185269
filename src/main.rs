use crate::app::AppState;
use crate::assistant::OpenAiCompletionProvider;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::domain::build_options;
use crate::prediction::HttpPredictor;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod assistant;
mod catalog;
mod compare;
mod config;
mod domain;
mod errors;
mod prediction;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_compare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(config = ?config, "Configuration loaded");

    // 2️⃣ Catalog + selection options
    let catalog = if config.catalog_paths.is_empty() {
        match Catalog::embedded() {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Embedded catalog is invalid");
                std::process::exit(1);
            }
        }
    } else {
        Catalog::from_paths(&config.catalog_paths)
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog is empty, there is nothing to compare");
    }
    let options = build_options(catalog.listings());
    tracing::info!(listings = catalog.len(), options = options.len(), "Catalog ready");

    // 3️⃣ External collaborators
    let predictor = match HttpPredictor::new(&config) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Prediction client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = predictor.endpoint_url(), "Prediction client ready");
    let provider = match OpenAiCompletionProvider::new(&config) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Completion client init failed");
            std::process::exit(1);
        }
    };
    tracing::info!(model = provider.model(), "Completion provider ready");
    if config.api_key.is_none() {
        tracing::warn!("COMPLETION_API_KEY not set, assistant will only give the fallback reply");
    }

    // 4️⃣ Runtime for in-flight prediction and completion calls
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "Tokio runtime init failed");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        runtime.handle().clone(),
        options,
        Arc::new(predictor),
        Arc::new(provider),
    ));

    // 5️⃣ Serve
    tracing::info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
