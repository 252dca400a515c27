use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::User;
use crate::repositories::read_json;
use crate::storage::KeyValueStore;

const SESSION_KEY: &str = "user";

pub trait SessionRepository: Send + Sync {
    fn load(&self) -> Option<User>;
    fn save(&self, user: &User) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Keeps the single persisted session under the `user` key.
pub struct LocalSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionRepository for LocalSessionRepository {
    fn load(&self) -> Option<User> {
        read_json(self.store.as_ref(), SESSION_KEY)
    }

    fn save(&self, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(SESSION_KEY, &raw)
    }

    fn clear(&self) -> AppResult<()> {
        self.store.remove(SESSION_KEY)
    }
}
