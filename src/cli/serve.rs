use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config,
    management::TokenManager,
    server::{AppContext, start_api_server},
    types::SpotifyCredentials,
};

pub async fn serve(address: Option<String>) {
    let credentials = SpotifyCredentials {
        client_id: config::spotify_client_id(),
        client_secret: config::spotify_client_secret(),
        refresh_token: config::spotify_refresh_token(),
    };

    let context = AppContext {
        token_manager: Arc::new(Mutex::new(TokenManager::new(
            credentials,
            config::spotify_apitoken_url(),
        ))),
        api_url: config::spotify_apiurl(),
    };

    let address = address.unwrap_or_else(config::server_addr);
    start_api_server(&address, context).await;
}
