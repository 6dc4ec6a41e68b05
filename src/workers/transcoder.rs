use crate::modules::upload::events::{JobState, TranscodeJob};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to launch encoder: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("encoder exited with {status}: {detail}")]
    Exit { status: ExitStatus, detail: String },
    #[error("encoder timed out after {0:?}")]
    Timeout(Duration),
    #[error("encoder finished without reporting a result")]
    Lost,
}

/// Resolves exactly once to the job's terminal outcome.
pub struct TranscodeHandle {
    rx: oneshot::Receiver<Result<(), EncodeError>>,
}

impl TranscodeHandle {
    /// Pairs a handle with the sender that resolves it, oneshot-style.
    pub fn channel() -> (oneshot::Sender<Result<(), EncodeError>>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { rx })
    }

    pub async fn wait(self) -> Result<(), EncodeError> {
        // A dropped sender would mean the encode task died without
        // reporting; surface that as a failure rather than hanging.
        self.rx.await.unwrap_or(Err(EncodeError::Lost))
    }
}

/// Encoding capability: one external encode per job, MP3 output, no retries.
/// Anything that can run a job to a terminal state can stand in for the
/// real ffmpeg subprocess (tests use mocks).
pub trait Transcoder: Send + Sync {
    /// Launches the encode and returns immediately; the caller observes
    /// completion through the handle.
    fn spawn(&self, job: TranscodeJob) -> TranscodeHandle;
}

#[derive(Clone)]
pub struct FfmpegTranscoder {
    ffmpeg_path: String,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(ffmpeg_path: &str, timeout: Duration) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.to_string(),
            timeout,
        }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn spawn(&self, mut job: TranscodeJob) -> TranscodeHandle {
        let (tx, handle) = TranscodeHandle::channel();
        let ffmpeg = self.ffmpeg_path.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let result = run_ffmpeg(&ffmpeg, timeout, &mut job).await;
            match &result {
                Ok(()) => info!("Transcode finished: {:?}", job),
                Err(e) => error!("Transcode failed: {:?}: {}", job, e),
            }
            let _ = tx.send(result);
        });

        handle
    }
}

async fn run_ffmpeg(
    ffmpeg: &str,
    timeout: Duration,
    job: &mut TranscodeJob,
) -> Result<(), EncodeError> {
    let child = Command::new(ffmpeg)
        .arg("-i")
        .arg(&job.input_path)
        .args(["-f", "mp3", "-y"])
        .arg(&job.output_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        // dropping the wait future on timeout must also reap the process
        .kill_on_drop(true)
        .spawn()
        .map_err(EncodeError::Spawn)?;

    job.state = JobState::Running;
    info!("Transcoding {} -> {}", job.input_path, job.output_path);

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            job.state = JobState::Failed;
            return Err(EncodeError::Spawn(e));
        }
        Err(_) => {
            job.state = JobState::Failed;
            return Err(EncodeError::Timeout(timeout));
        }
    };

    if output.status.success() {
        job.state = JobState::Succeeded;
        Ok(())
    } else {
        job.state = JobState::Failed;
        Err(EncodeError::Exit {
            status: output.status,
            detail: last_stderr_line(&output.stderr),
        })
    }
}

// ffmpeg prints its banner and progress to stderr; only the final line
// carries the actual error.
fn last_stderr_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("no diagnostic output")
        .trim()
        .to_string()
}
