use thiserror::Error;

use super::question::{AnswerOption, QuestionId};

pub const QUESTION_COUNT: usize = QuestionId::ALL.len();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is not an option of question {question}")]
pub struct InvalidOption {
    pub question: QuestionId,
    pub value: u8,
}

/// One optional answer per question. Unanswered questions hold `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseSet {
    values: [Option<u8>; QUESTION_COUNT],
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: QuestionId) -> Option<u8> {
        self.values[question.index()]
    }

    pub fn selected_option(&self, question: QuestionId) -> Option<&'static AnswerOption> {
        self.get(question)
            .and_then(|value| question.question().option_by_value(value))
    }

    /// Returns a copy with only `question` changed.
    pub fn select_option(&self, question: QuestionId, value: u8) -> Result<Self, InvalidOption> {
        if question.question().option_by_value(value).is_none() {
            return Err(InvalidOption { question, value });
        }
        let mut next = *self;
        next.values[question.index()] = Some(value);
        Ok(next)
    }

    pub fn reset(&self) -> Self {
        Self::new()
    }

    /// Sum of the weights of the selected options. Unanswered questions
    /// contribute nothing.
    pub fn total_score(&self) -> u32 {
        QuestionId::ALL
            .into_iter()
            .filter_map(|id| self.selected_option(id))
            .map(|option| u32::from(option.weight))
            .sum()
    }

    pub fn answered_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    pub fn all_answered(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    pub fn progress_fraction(&self) -> f64 {
        self.answered_count() as f64 / QUESTION_COUNT as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Option<u8>)> + '_ {
        QuestionId::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}
