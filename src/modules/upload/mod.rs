use crate::state::AppState;
use axum::routing::post;
use axum::Router;

pub mod dto;
pub mod error;
pub mod events;
pub mod handler;
pub mod paths;
pub mod service;

/// Multipart field name the client must use for the audio file.
pub const AUDIO_FIELD: &str = "audioFile";

pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(handler::upload_audio))
}
