use crate::workers::transcoder::EncodeError;
use axum::http::StatusCode;
use thiserror::Error;

/// Terminal outcomes of an upload request. All of them end the request
/// with a single error response; none of them take the server down.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file found under field '{0}'")]
    MissingUpload(String),
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("transcode failed: {0}")]
    Encode(#[from] EncodeError),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::MissingUpload(_) => StatusCode::BAD_REQUEST,
            UploadError::Io(_) | UploadError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
