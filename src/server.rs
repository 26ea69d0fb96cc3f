use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, error, info, management::TokenManager};

/// Shared state for the request path: the token manager guarding the cached
/// access token, and the upstream API base URL.
#[derive(Clone)]
pub struct AppContext {
    pub token_manager: Arc<Mutex<TokenManager>>,
    pub api_url: String,
}

pub fn router(context: AppContext) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/now-playing", get(api::now_playing).layer(Extension(context)))
}

pub async fn start_api_server(addr: &str, context: AppContext) {
    let app = router(context);

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
