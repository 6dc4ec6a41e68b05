use crate::config::settings::AppConfig;
use crate::infrastructure::storage::local::LocalStorage;
use crate::workers::transcoder::Transcoder;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: LocalStorage,
    pub transcoder: Arc<dyn Transcoder>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: LocalStorage,
        transcoder: Arc<dyn Transcoder>,
    ) -> Self {
        Self {
            config,
            storage,
            transcoder,
        }
    }
}
