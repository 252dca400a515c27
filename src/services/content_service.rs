use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::data;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Material, Question};
use crate::models::dto::{NewMaterial, NewQuestion};
use crate::repositories::{MaterialRepository, QuestionRepository};

/// Read and append access to the portal's learning content.
pub struct ContentService {
    materials: Arc<dyn MaterialRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl ContentService {
    pub fn new(
        materials: Arc<dyn MaterialRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            materials,
            questions,
        }
    }

    pub fn subjects(&self) -> &'static [&'static str] {
        &data::SUBJECTS
    }

    pub fn materials(&self) -> Vec<Material> {
        self.materials.list()
    }

    pub fn materials_by_subject(&self, subject: &str) -> Vec<Material> {
        self.materials
            .list()
            .into_iter()
            .filter(|m| m.subject == subject)
            .collect()
    }

    pub fn material(&self, id: &str) -> AppResult<Material> {
        self.materials
            .list()
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Material with id '{}' not found", id)))
    }

    pub fn questions(&self) -> Vec<Question> {
        self.questions.list()
    }

    pub fn add_material(&self, new: NewMaterial, created_by: &str) -> AppResult<Material> {
        new.validate()?;

        let material = Material {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            image_url: new.image_url,
            pdf_url: new.pdf_url,
            video_url: new.video_url,
            subject: new.subject,
            created_by: Some(created_by.to_string()),
            created_at: Some(Utc::now()),
        };

        self.materials.add(material)
    }

    pub fn add_question(&self, new: NewQuestion, created_by: &str) -> AppResult<Question> {
        new.validate()?;

        if new.correct_answer >= new.options.len() {
            return Err(AppError::ValidationError(format!(
                "correct_answer {} is out of range for {} options",
                new.correct_answer,
                new.options.len()
            )));
        }

        let question = Question {
            id: Uuid::new_v4().to_string(),
            text: new.text,
            options: new.options,
            correct_answer: new.correct_answer,
            explanation: new.explanation,
            subject: new.subject,
            created_by: Some(created_by.to_string()),
            created_at: Some(Utc::now()),
        };

        self.questions.add(question)
    }
}
