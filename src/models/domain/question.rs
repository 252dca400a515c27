use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multiple-choice question. `correct_answer` is a 0-based index into
/// `options`, which always has at least one entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn correct_option_text(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            id: "q-1".to_string(),
            text: "Which planet is closest to the sun?".to_string(),
            options: vec![
                "Venus".to_string(),
                "Mercury".to_string(),
                "Mars".to_string(),
            ],
            correct_answer: 1,
            explanation: "Mercury orbits at roughly 58 million km.".to_string(),
            subject: "Physics".to_string(),
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn question_round_trip_serialization() {
        let question = sample_question();

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(question, parsed);
    }

    #[test]
    fn question_uses_camel_case_keys() {
        let json = serde_json::to_string(&sample_question()).expect("question should serialize");
        assert!(json.contains("\"correctAnswer\":1"));
    }

    #[test]
    fn test_correct_option_text() {
        let question = sample_question();
        assert_eq!(question.correct_option_text(), "Mercury");
    }
}
