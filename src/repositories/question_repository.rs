use std::sync::Arc;

use crate::data;
use crate::errors::AppResult;
use crate::models::domain::Question;
use crate::repositories::read_json;
use crate::storage::KeyValueStore;

const QUESTIONS_KEY: &str = "learnhub_questions";

pub trait QuestionRepository: Send + Sync {
    fn list(&self) -> Vec<Question>;

    /// Appends and persists the full list back.
    fn add(&self, question: Question) -> AppResult<Question>;
}

/// Questions under `learnhub_questions`, falling back to the bundled
/// defaults until something is written.
pub struct LocalQuestionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LocalQuestionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl QuestionRepository for LocalQuestionRepository {
    fn list(&self) -> Vec<Question> {
        read_json(self.store.as_ref(), QUESTIONS_KEY).unwrap_or_else(data::default_questions)
    }

    fn add(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.list();
        questions.push(question.clone());
        let raw = serde_json::to_string(&questions)?;
        self.store.set(QUESTIONS_KEY, &raw)?;
        Ok(question)
    }
}
