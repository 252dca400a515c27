use crate::models::domain::Question;

/// Mutable state of one quiz attempt. Never persisted; a subject change or
/// reset discards it wholesale.
///
/// Invariant: while a subject is active, `answers.len()` equals the filtered
/// question count and every `Some(i)` is a valid option index for question i.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_question_index: usize,
    pub answers: Vec<Option<usize>>,
    pub showing_review: bool,
    pub selected_answer: Option<usize>,
    pub selected_subject: String,
}

impl QuizState {
    pub fn for_subject(subject: &str, question_count: usize) -> Self {
        QuizState {
            current_question_index: 0,
            answers: vec![None; question_count],
            showing_review: false,
            selected_answer: None,
            selected_subject: subject.to_string(),
        }
    }
}

/// Outcome of a `next()` call, surfaced to the caller so the presentation
/// layer can react without inspecting engine internals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizAdvance {
    /// Moved forward one question.
    Advanced,
    /// Grading was requested with unanswered questions left; the engine
    /// jumped to the first of them. A warning, not an error.
    Incomplete { first_unanswered: usize },
    /// Every question answered; the attempt entered review.
    Review,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Per-question grading annotation for the review screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionReview {
    pub question: Question,
    pub user_answer: Option<usize>,
    pub is_correct: bool,
}

impl QuestionReview {
    pub fn new(question: Question, user_answer: Option<usize>) -> Self {
        let is_correct = user_answer == Some(question.correct_answer);
        QuestionReview {
            question,
            user_answer,
            is_correct,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// Text of the option the user picked, if any.
    pub fn answer_text(&self) -> Option<&str> {
        self.user_answer
            .and_then(|i| self.question.options.get(i))
            .map(String::as_str)
    }

    pub fn correct_answer_text(&self) -> &str {
        self.question.correct_option_text()
    }

    pub fn explanation(&self) -> &str {
        &self.question.explanation
    }
}
