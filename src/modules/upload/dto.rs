use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Record of a finished upload, request-local.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub original_name: String,
    pub stored_path: String,
    pub received_at: OffsetDateTime,
}

#[derive(Serialize, ToSchema)]
pub struct UploadResponse {
    pub original_name: String,
    pub output_file: String,
}
