use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Dependencies,
    Knowledge,
    Repetition,
    Complexity,
    Risk,
    Duration,
}

impl QuestionId {
    pub const ALL: [QuestionId; 6] = [
        QuestionId::Dependencies,
        QuestionId::Knowledge,
        QuestionId::Repetition,
        QuestionId::Complexity,
        QuestionId::Risk,
        QuestionId::Duration,
    ];

    pub fn index(self) -> usize {
        match self {
            QuestionId::Dependencies => 0,
            QuestionId::Knowledge => 1,
            QuestionId::Repetition => 2,
            QuestionId::Complexity => 3,
            QuestionId::Risk => 4,
            QuestionId::Duration => 5,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            QuestionId::Dependencies => "dependencies",
            QuestionId::Knowledge => "knowledge",
            QuestionId::Repetition => "repetition",
            QuestionId::Complexity => "complexity",
            QuestionId::Risk => "risk",
            QuestionId::Duration => "duration",
        }
    }

    pub fn question(self) -> &'static Question {
        &QUESTIONS[self.index()]
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown question '{0}'")]
pub struct UnknownQuestionId(pub String);

impl FromStr for QuestionId {
    type Err = UnknownQuestionId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        QuestionId::ALL
            .into_iter()
            .find(|id| id.key() == normalized)
            .ok_or_else(|| UnknownQuestionId(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u8,
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    pub description: &'static str,
    pub options: [AnswerOption; 3],
}

impl Question {
    pub fn option_by_value(&self, value: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Label lookup ignores case and surrounding whitespace.
    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        let label = label.trim();
        self.options
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(label))
    }
}

const fn option(label: &'static str, value: u8) -> AnswerOption {
    AnswerOption {
        label,
        value,
        weight: value,
    }
}

/// The fixed questionnaire, in display order.
pub static QUESTIONS: [Question; 6] = [
    Question {
        id: QuestionId::Dependencies,
        title: "Dependencies",
        description: "Does this feature rely on other stories or epics that are currently open or in progress?",
        options: [option("None", 1), option("Few", 2), option("Many", 3)],
    },
    Question {
        id: QuestionId::Knowledge,
        title: "Knowledge",
        description: "What is the assignee's familiarity with the story's requirements and context?",
        options: [
            option("Nothing", 3),
            option("Something", 2),
            option("Everything", 1),
        ],
    },
    Question {
        id: QuestionId::Repetition,
        title: "Repetition",
        description: "How often has the assignee performed a similar story in the past?",
        options: [option("Never", 3), option("Few", 2), option("Many", 1)],
    },
    Question {
        id: QuestionId::Complexity,
        title: "Complexity",
        description: "To what extent is the story challenging or intricate to accomplish?",
        options: [option("Easy", 1), option("Medium", 2), option("Hard", 3)],
    },
    Question {
        id: QuestionId::Risk,
        title: "Risk",
        description: "What is the level of potential risks associated with the story's completion?",
        options: [option("Low", 1), option("Medium", 2), option("High", 3)],
    },
    Question {
        id: QuestionId::Duration,
        title: "Duration",
        description: "What is the expected time frame for completing the story?",
        options: [option("Minutes", 1), option("Hours", 2), option("Days", 3)],
    },
];

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}
