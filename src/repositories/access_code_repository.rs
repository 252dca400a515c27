use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::UsedAccessCode;
use crate::repositories::read_json;
use crate::storage::KeyValueStore;

const USED_CODES_KEY: &str = "usedAccessCodes";

pub trait AccessCodeRepository: Send + Sync {
    /// First stored binding whose code matches, ignoring case.
    fn find_by_code(&self, code: &str) -> Option<UsedAccessCode>;

    /// Appends unconditionally. Repeat logins by the same email produce
    /// duplicate records; the list is never deduplicated.
    fn record(&self, binding: UsedAccessCode) -> AppResult<()>;

    fn all(&self) -> Vec<UsedAccessCode>;
}

pub struct LocalAccessCodeRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalAccessCodeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl AccessCodeRepository for LocalAccessCodeRepository {
    fn find_by_code(&self, code: &str) -> Option<UsedAccessCode> {
        self.all().into_iter().find(|b| b.matches_code(code))
    }

    fn record(&self, binding: UsedAccessCode) -> AppResult<()> {
        let mut bindings = self.all();
        bindings.push(binding);
        let raw = serde_json::to_string(&bindings)?;
        self.store.set(USED_CODES_KEY, &raw)
    }

    fn all(&self) -> Vec<UsedAccessCode> {
        read_json(self.store.as_ref(), USED_CODES_KEY).unwrap_or_default()
    }
}
