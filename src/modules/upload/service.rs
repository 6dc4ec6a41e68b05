use super::dto::{UploadResponse, UploadedFile};
use super::error::UploadError;
use super::events::TranscodeJob;
use super::paths;
use crate::common::upload::stream_to_disk;
use crate::state::AppState;
use axum::extract::multipart::Field;
use time::OffsetDateTime;
use tracing::info;

pub struct UploadService;

impl UploadService {
    /// Runs one upload through the whole pipeline: allocate names, persist
    /// the stream, hand the job to the transcoder and wait for its single
    /// terminal event. A storage failure never reaches the transcoder.
    pub async fn process(state: AppState, field: Field<'_>) -> Result<UploadResponse, UploadError> {
        let field_name = field.name().unwrap_or(super::AUDIO_FIELD).to_string();
        let original_name = field.file_name().unwrap_or("upload").to_string();

        let paths = paths::allocate(&field_name, &original_name);
        let input_path = state.storage.resolve(&paths.input);

        let size = stream_to_disk(field, &input_path).await?;

        let uploaded = UploadedFile {
            field_name,
            original_name: original_name.clone(),
            stored_path: paths.input.clone(),
            received_at: OffsetDateTime::now_utc(),
        };
        info!("Upload stored ({} bytes): {:?}", size, uploaded);

        let job = TranscodeJob::new(
            input_path.to_string_lossy().into_owned(),
            state.storage.resolve(&paths.output).to_string_lossy().into_owned(),
        );
        let handle = state.transcoder.spawn(job);

        match handle.wait().await {
            Ok(()) => Ok(UploadResponse {
                original_name,
                output_file: paths.output,
            }),
            Err(e) => {
                // a failed or killed encoder can leave a partial output
                state.storage.remove(&paths.output).await;
                Err(UploadError::Encode(e))
            }
        }
    }
}
