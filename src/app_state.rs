use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        LocalAccessCodeRepository, LocalMaterialRepository, LocalQuestionRepository,
        LocalSessionRepository,
    },
    services::{AuthService, ContentService, QuizEngine},
    storage::{JsonFileStore, KeyValueStore},
};

/// The root coordinator. Opens the store, wires the services, restores any
/// persisted session, and owns the single gate and engine instances for the
/// whole process lifetime.
pub struct AppState {
    pub config: Config,
    pub auth: AuthService,
    pub content: ContentService,
    pub quiz: QuizEngine,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&config.storage_path)?);
        Self::with_store(config, store)
    }

    /// Same wiring over an arbitrary store; tests pass a `MemoryStore`.
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let sessions = Arc::new(LocalSessionRepository::new(store.clone()));
        let used_codes = Arc::new(LocalAccessCodeRepository::new(store.clone()));
        let materials = Arc::new(LocalMaterialRepository::new(store.clone()));
        let questions = Arc::new(LocalQuestionRepository::new(store));

        let mut auth = AuthService::new(sessions, used_codes);
        auth.restore_session();

        let content = ContentService::new(materials, questions);
        let quiz = QuizEngine::new(content.questions());

        Ok(Self {
            config,
            auth,
            content,
            quiz,
        })
    }
}
