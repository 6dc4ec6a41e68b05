use audio_transcoder::app;
use audio_transcoder::config::settings::AppConfig;
use audio_transcoder::infrastructure::storage::local::LocalStorage;
use audio_transcoder::state::AppState;
use audio_transcoder::workers::transcoder::FfmpegTranscoder;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = AppConfig::new();

    let storage = LocalStorage::new(&config.audio_dir);
    storage.ensure_root().await?;

    let transcoder = Arc::new(FfmpegTranscoder::new(
        &config.ffmpeg_path,
        config.encode_timeout,
    ));

    let state = AppState::new(config.clone(), storage, transcoder);
    let app = app::create_app(state).await;

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
