use super::dto::UploadResponse;
use super::error::UploadError;
use super::service::UploadService;
use crate::common::response::{ApiError, ApiResponse};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

/// Upload Audio File
/// Accepts one file under the `audioFile` field and converts it to MP3
#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File converted to MP3", body = ApiResponse<UploadResponse>),
        (status = 400, description = "No file field in request"),
        (status = 500, description = "Storage or transcode failure")
    ),
    tag = "Upload"
)]
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        let name = field.name().unwrap_or("").to_string();

        if name == super::AUDIO_FIELD {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            info!("Starting upload: {}", file_name);

            return match UploadService::process(state, field).await {
                Ok(res) => ApiResponse::success(res, "File converted to MP3 successfully")
                    .with_status(StatusCode::OK),
                Err(e) => ApiError(e.to_string(), e.status()).into_response(),
            };
        }
    }

    // Reject before anything touches disk or the encoder.
    let err = UploadError::MissingUpload(super::AUDIO_FIELD.to_string());
    ApiError(err.to_string(), err.status()).into_response()
}
