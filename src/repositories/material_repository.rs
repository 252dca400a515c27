use std::sync::Arc;

use crate::data;
use crate::errors::AppResult;
use crate::models::domain::Material;
use crate::repositories::read_json;
use crate::storage::KeyValueStore;

const MATERIALS_KEY: &str = "learnhub_materials";

pub trait MaterialRepository: Send + Sync {
    fn list(&self) -> Vec<Material>;

    /// Appends and persists the full list back.
    fn add(&self, material: Material) -> AppResult<Material>;
}

/// Materials under `learnhub_materials`, falling back to the bundled
/// defaults until something is written.
pub struct LocalMaterialRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalMaterialRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl MaterialRepository for LocalMaterialRepository {
    fn list(&self) -> Vec<Material> {
        read_json(self.store.as_ref(), MATERIALS_KEY).unwrap_or_else(data::default_materials)
    }

    fn add(&self, material: Material) -> AppResult<Material> {
        let mut materials = self.list();
        materials.push(material.clone());
        let raw = serde_json::to_string(&materials)?;
        self.store.set(MATERIALS_KEY, &raw)?;
        Ok(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::test_utils::fixtures::test_material;

    fn repository() -> (Arc<MemoryStore>, LocalMaterialRepository) {
        let store = Arc::new(MemoryStore::new());
        let repository = LocalMaterialRepository::new(store.clone());
        (store, repository)
    }

    #[test]
    fn list_falls_back_to_bundled_defaults() {
        let (_store, repository) = repository();
        assert_eq!(repository.list(), data::default_materials());
    }

    #[test]
    fn add_persists_defaults_plus_new_material() {
        let (store, repository) = repository();
        let added = repository.add(test_material("m-10", "Physics")).unwrap();

        let listed = repository.list();
        assert_eq!(listed.len(), data::default_materials().len() + 1);
        assert_eq!(listed.last(), Some(&added));
        assert!(store.get("learnhub_materials").is_some());
    }

    #[test]
    fn malformed_payload_falls_back_to_defaults() {
        let (store, repository) = repository();
        store.set("learnhub_materials", "[{]").unwrap();

        assert_eq!(repository.list(), data::default_materials());
    }
}
