mod extract;
pub mod handlers;
pub mod types;

pub use extract::ValidatedJson;

use crate::{Result, config::Config, model};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

/// Loads the model according to `model.required` and assembles handler state.
pub async fn build_state(config: &Config) -> Result<handlers::AppState> {
    let model = match model::load(&config.model.path).await {
        Ok(model) => Some(model),
        Err(e) => {
            error!("{}", e);
            if config.model.required {
                return Err(e);
            }
            warn!("Serving without a model, every prediction will return an error");
            None
        }
    };

    Ok(handlers::AppState {
        model,
        response: config.response.clone(),
    })
}

pub fn app(state: handlers::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/predict", post(handlers::predict))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = app(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
