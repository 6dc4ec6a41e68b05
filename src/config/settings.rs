use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub audio_dir: String,
    pub ffmpeg_path: String,
    #[serde(skip)]
    pub encode_timeout: Duration,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            audio_dir: env::get_or(EnvKey::AudioDir, "audio"),
            ffmpeg_path: env::get_or(EnvKey::FfmpegPath, "ffmpeg"),
            encode_timeout: Duration::from_secs(env::get_parsed(EnvKey::EncodeTimeoutSecs, 300)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
