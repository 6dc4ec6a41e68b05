use axum::extract::multipart::Field;
use futures_util::StreamExt;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

/// Streams a multipart field to a file on disk, chunk by chunk.
///
/// On any stream or write error the partially written file is removed
/// best-effort before the error is returned, so a failed upload never
/// leaves a truncated file behind.
pub async fn stream_to_disk(mut field: Field<'_>, path: &Path) -> io::Result<u64> {
    let mut file = File::create(path).await?;
    let mut written: u64 = 0;

    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!("Stream error while receiving upload: {}", e);
                discard(&mut file, path).await;
                return Err(io::Error::other(e));
            }
        };

        if let Err(e) = file.write_all(&chunk).await {
            error!("Write error while storing upload: {}", e);
            discard(&mut file, path).await;
            return Err(e);
        }

        written += chunk.len() as u64;
    }

    file.flush().await?;
    debug!("Stored {} bytes at {}", written, path.display());

    Ok(written)
}

async fn discard(file: &mut File, path: &Path) {
    let _ = file.shutdown().await;
    let _ = tokio::fs::remove_file(path).await;
}
