pub mod access_code_repository;
pub mod material_repository;
pub mod question_repository;
pub mod session_repository;

pub use access_code_repository::{AccessCodeRepository, LocalAccessCodeRepository};
pub use material_repository::{LocalMaterialRepository, MaterialRepository};
pub use question_repository::{LocalQuestionRepository, QuestionRepository};
pub use session_repository::{LocalSessionRepository, SessionRepository};

use serde::de::DeserializeOwned;

use crate::storage::KeyValueStore;

/// Decodes the JSON payload under `key`, treating a malformed payload the
/// same as an absent one. Corruption is logged and recovered from locally,
/// never surfaced.
pub(crate) fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding malformed payload under '{}': {}", key, err);
            None
        }
    }
}
