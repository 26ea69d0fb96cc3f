use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{server::AppContext, spotify, warning};

pub async fn now_playing(Extension(context): Extension<AppContext>) -> Response {
    match spotify::player::get_currently_playing(
        Arc::clone(&context.token_manager),
        &context.api_url,
    )
    .await
    {
        Ok(now_playing) => (StatusCode::OK, Json(now_playing)).into_response(),
        Err(e) => {
            // Detail stays in the server log; clients get a fixed body.
            warning!("Failed to fetch currently playing track: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error" })),
            )
                .into_response()
        }
    }
}
