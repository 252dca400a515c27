use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, QuestionReview, QuizAdvance, QuizState, ScoreSummary};

/// Drives one quiz attempt: subject selection, sequential navigation with
/// sticky answers, grading, and per-question review.
///
/// States: subject selection, in progress, review. `reset` returns to
/// subject selection from anywhere; `restart` replays the same subject.
pub struct QuizEngine {
    questions: Vec<Question>,
    filtered: Vec<Question>,
    selected_subject: Option<String>,
    state: QuizState,
    show_warning: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            filtered: Vec::new(),
            selected_subject: None,
            state: QuizState::default(),
            show_warning: false,
        }
    }

    /// Subjects that currently have at least one question, with counts, in
    /// first-seen order. Drives the subject-selection screen.
    pub fn available_subjects(&self) -> Vec<(String, usize)> {
        let mut subjects: Vec<(String, usize)> = Vec::new();
        for question in &self.questions {
            match subjects.iter_mut().find(|(s, _)| *s == question.subject) {
                Some((_, count)) => *count += 1,
                None => subjects.push((question.subject.clone(), 1)),
            }
        }
        subjects
    }

    /// Starts an attempt on `subject`. With no matching questions the engine
    /// stays in subject selection and reports the condition as a value.
    pub fn select_subject(&mut self, subject: &str) -> AppResult<()> {
        let filtered: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.subject == subject)
            .cloned()
            .collect();

        if filtered.is_empty() {
            return Err(AppError::NoQuestionsForSubject(subject.to_string()));
        }

        self.state = QuizState::for_subject(subject, filtered.len());
        self.filtered = filtered;
        self.selected_subject = Some(subject.to_string());
        self.show_warning = false;
        log::debug!("quiz started for subject '{}'", subject);
        Ok(())
    }

    /// Records the first answer for the current question. Re-selection,
    /// out-of-range indices, and calls without a current question are
    /// silently ignored.
    pub fn select_answer(&mut self, option_index: usize) {
        let index = self.state.current_question_index;
        let Some(question) = self.filtered.get(index) else {
            return;
        };
        if option_index >= question.options.len() {
            return;
        }
        if self.state.answers[index].is_some() {
            return;
        }

        self.state.answers[index] = Some(option_index);
        self.state.selected_answer = Some(option_index);
    }

    /// Advances, or on the last question either enters review or jumps back
    /// to the first unanswered question with a warning.
    pub fn next(&mut self) -> QuizAdvance {
        if self.filtered.is_empty() {
            return QuizAdvance::Advanced;
        }

        if self.state.current_question_index + 1 < self.filtered.len() {
            self.state.current_question_index += 1;
            self.state.selected_answer = None;
            return QuizAdvance::Advanced;
        }

        match self.state.answers.iter().position(Option::is_none) {
            Some(first_unanswered) => {
                self.show_warning = true;
                self.state.current_question_index = first_unanswered;
                self.state.showing_review = false;
                QuizAdvance::Incomplete { first_unanswered }
            }
            None => {
                self.state.showing_review = true;
                QuizAdvance::Review
            }
        }
    }

    pub fn previous(&mut self) {
        if self.state.current_question_index > 0 {
            self.state.current_question_index -= 1;
            self.state.selected_answer = None;
        }
    }

    /// Free navigation; also the review screen's "review this question"
    /// entry point. Clears the review flag and any pending warning.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.filtered.len() {
            return;
        }
        self.show_warning = false;
        self.state.current_question_index = index;
        self.state.showing_review = false;
        self.state.selected_answer = None;
    }

    /// Same subject, fresh attempt.
    pub fn restart(&mut self) {
        if let Some(subject) = self.selected_subject.clone() {
            self.state = QuizState::for_subject(&subject, self.filtered.len());
        }
        self.show_warning = false;
    }

    /// Back to subject selection; the attempt and subject are discarded.
    pub fn reset(&mut self) {
        self.filtered.clear();
        self.selected_subject = None;
        self.state = QuizState::default();
        self.show_warning = false;
    }

    /// Grades the attempt. Unanswered questions count as incorrect; an empty
    /// question set scores 0 rather than dividing by zero.
    pub fn score(&self) -> ScoreSummary {
        let total = self.filtered.len();
        let correct = self
            .filtered
            .iter()
            .zip(&self.state.answers)
            .filter(|(question, answer)| **answer == Some(question.correct_answer))
            .count();
        let percentage = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };

        ScoreSummary {
            correct,
            total,
            percentage,
        }
    }

    pub fn review(&self) -> Vec<QuestionReview> {
        self.filtered
            .iter()
            .zip(&self.state.answers)
            .map(|(question, answer)| QuestionReview::new(question.clone(), *answer))
            .collect()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.filtered.get(self.state.current_question_index)
    }

    pub fn filtered_questions(&self) -> &[Question] {
        &self.filtered
    }

    pub fn selected_subject(&self) -> Option<&str> {
        self.selected_subject.as_deref()
    }

    pub fn is_reviewing(&self) -> bool {
        self.state.showing_review
    }

    pub fn warning_visible(&self) -> bool {
        self.show_warning
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }
}
