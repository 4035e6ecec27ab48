use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::meals::MealJournal;

/// Shared handles handed to every handler. The journal is one process-wide
/// store behind a lock; critical sections are short and never held across
/// I/O.
#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<RwLock<MealJournal>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self {
            journal: Arc::new(RwLock::new(MealJournal::new())),
            config,
        })
    }

    pub fn fake() -> Self {
        Self {
            journal: Arc::new(RwLock::new(MealJournal::new())),
            config: Arc::new(AppConfig {
                host: "127.0.0.1".into(),
                port: 0,
            }),
        }
    }
}
