use std::sync::Arc;

use crate::config_manager::Config;
use crate::translate::TranslationHandler;

/// Everything a request handler needs. Built once in `main`, read-only after.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<TranslationHandler>,
}

impl AppState {
    pub fn new(config: Config, translator: TranslationHandler) -> Self {
        Self {
            config: Arc::new(config),
            translator: Arc::new(translator),
        }
    }
}
