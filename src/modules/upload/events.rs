use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// One encode of one uploaded file. Lives only for the duration of the
/// request that created it; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeJob {
    pub input_path: String,
    pub output_path: String,
    pub state: JobState,
}

impl TranscodeJob {
    pub fn new(input_path: String, output_path: String) -> Self {
        Self {
            input_path,
            output_path,
            state: JobState::Pending,
        }
    }
}
