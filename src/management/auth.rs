use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::types::{SpotifyCredentials, SpotifyError, Token, TokenResponse};

/// Holds the client credentials and the cached access token.
///
/// The manager is constructed once at startup and shared between request
/// handlers; the token lives only in process memory and starts out empty
/// after every restart.
pub struct TokenManager {
    credentials: SpotifyCredentials,
    token_url: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: SpotifyCredentials, token_url: String) -> Self {
        TokenManager {
            credentials,
            token_url,
            token: None,
        }
    }

    /// Creates a manager with a pre-seeded token, as if a refresh had
    /// already happened.
    pub fn with_token(credentials: SpotifyCredentials, token_url: String, token: Token) -> Self {
        TokenManager {
            credentials,
            token_url,
            token: Some(token),
        }
    }

    /// Returns a usable access token, refreshing it first when the cache is
    /// empty or past its expiry.
    pub async fn ensure_valid_token(&mut self) -> Result<String, SpotifyError> {
        match &self.token {
            Some(token) if !token.is_expired() => Ok(token.access_token.clone()),
            _ => {
                let token = self.refresh_token().await?;
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Ok(access_token)
            }
        }
    }

    async fn refresh_token(&self) -> Result<Token, SpotifyError> {
        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ));

        let client = Client::new();
        let res = client
            .post(&self.token_url)
            .header("Authorization", format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.credentials.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        if !res.status().is_success() {
            return Err(SpotifyError::Auth(format!(
                "token endpoint returned {}",
                res.status()
            )));
        }

        let body: TokenResponse = res
            .json()
            .await
            .map_err(|e| SpotifyError::Auth(e.to_string()))?;

        Ok(Token {
            access_token: body.access_token,
            expires_in: body.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
