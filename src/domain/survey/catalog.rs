//! Fixed questionnaires and their weighted answer options.
//!
//! Both variants are compile-time constants. The fiber questionnaire carries
//! the chart labels used when interpreting any stored record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A selectable answer and the weight it contributes to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u32,
}

/// One question of a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Field name used in the stored record (`question1`, `question2`, ...).
    pub key: &'static str,
    /// Prompt shown to the respondent.
    pub text: &'static str,
    /// Short label used on the result chart.
    pub chart_label: Option<&'static str>,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Whether `value` is one of this question's option weights.
    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn allowed_values(&self) -> Vec<u32> {
        self.options.iter().map(|o| o.value).collect()
    }

    /// Highest weight any option of this question carries.
    pub fn max_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }
}

/// The questionnaires this service can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyVariant {
    /// Two five-point rating questions.
    Habits,
    /// Eight dietary-fiber intake frequency questions.
    Fiber,
}

impl SurveyVariant {
    pub const ALL: [SurveyVariant; 2] = [SurveyVariant::Habits, SurveyVariant::Fiber];

    /// URL path segment for this variant.
    pub fn slug(&self) -> &'static str {
        match self {
            SurveyVariant::Habits => "habits",
            SurveyVariant::Fiber => "fiber",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SurveyVariant::Habits => "프로젝트 봉사활동-식습관 제안",
            SurveyVariant::Fiber => "식이섬유 섭취 빈도 조사",
        }
    }

    /// Questions in display order.
    pub fn questions(&self) -> &'static [Question] {
        match self {
            SurveyVariant::Habits => &HABITS_QUESTIONS,
            SurveyVariant::Fiber => &FIBER_QUESTIONS,
        }
    }

    /// Looks up a question of this variant by its record key.
    pub fn question(&self, key: &str) -> Option<&'static Question> {
        self.questions().iter().find(|q| q.key == key)
    }

    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Highest total score a complete answer set can reach.
    pub fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_value).sum()
    }

    /// Prompt shown when a respondent submits before answering everything.
    pub fn incomplete_message(&self) -> &'static str {
        match self {
            SurveyVariant::Habits => "모든 질문에 답해주세요.",
            SurveyVariant::Fiber => "모든 문항에 응답해 주세요.",
        }
    }
}

impl fmt::Display for SurveyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for SurveyVariant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SurveyVariant::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| ValidationError::invalid_format("survey", format!("unknown survey '{}'", s)))
    }
}

/// Chart label for a question key, if the label dictionary knows it.
///
/// The dictionary is the fiber questionnaire's; it applies to every stored
/// record regardless of which form produced it.
pub fn chart_label(key: &str) -> Option<&'static str> {
    FIBER_QUESTIONS
        .iter()
        .find(|q| q.key == key)
        .and_then(|q| q.chart_label)
}

// ───────────────────────────────────────────────────────────────
// Habits questionnaire
// ───────────────────────────────────────────────────────────────

const RATING_OPTIONS: [AnswerOption; 5] = [
    AnswerOption { label: "매우 적음", value: 1 },
    AnswerOption { label: "적음", value: 2 },
    AnswerOption { label: "보통", value: 3 },
    AnswerOption { label: "많음", value: 4 },
    AnswerOption { label: "매우 많음", value: 5 },
];

static HABITS_QUESTIONS: [Question; 2] = [
    Question {
        key: "question1",
        text: "질문 1",
        chart_label: None,
        options: &RATING_OPTIONS,
    },
    Question {
        key: "question2",
        text: "질문 2",
        chart_label: None,
        options: &RATING_OPTIONS,
    },
];

// ───────────────────────────────────────────────────────────────
// Fiber questionnaire
// ───────────────────────────────────────────────────────────────

const fn frequency(weights: [u32; 4]) -> [AnswerOption; 4] {
    [
        AnswerOption { label: "거의 먹지 않는다", value: weights[0] },
        AnswerOption { label: "주 1~2회", value: weights[1] },
        AnswerOption { label: "주 3~4회", value: weights[2] },
        AnswerOption { label: "거의 매일", value: weights[3] },
    ]
}

const WEIGHTS_14: [AnswerOption; 4] = frequency([0, 4, 9, 14]);
const WEIGHTS_10: [AnswerOption; 4] = frequency([0, 3, 6, 10]);
const WEIGHTS_12: [AnswerOption; 4] = frequency([0, 4, 8, 12]);
const WEIGHTS_8: [AnswerOption; 4] = frequency([0, 2, 5, 8]);

static FIBER_QUESTIONS: [Question; 8] = [
    Question {
        key: "question1",
        text: "셀룰로오스를 함유한 배추는 얼마나 자주 섭취하나요?",
        chart_label: Some("셀룰로오스(배추)"),
        options: &WEIGHTS_14,
    },
    Question {
        key: "question2",
        text: "헤미셀룰로오스를 함유한 곡류, 콩류는 얼마나 자주 섭취하나요?",
        chart_label: Some("헤미셀룰로오스(곡류, 콩류)"),
        options: &WEIGHTS_10,
    },
    Question {
        key: "question3",
        text: "펙틴(불용성)을 함유한 미숙과일, 감귤, 사과는 얼마나 자주 섭취하나요?",
        chart_label: Some("펙틴(불용성, 과일)"),
        options: &WEIGHTS_10,
    },
    Question {
        key: "question4",
        text: "리그닌을 함유한 코코아,콩류는 얼마나 자주 섭취하나요?",
        chart_label: Some("리그닌(코코아, 콩류)"),
        options: &WEIGHTS_8,
    },
    Question {
        key: "question5",
        text: "펙틴(수용성)을 함유한 배추, 배, 감 등의 과일과 채소는 얼마나 자주 섭취하나요?",
        chart_label: Some("펙틴(수용성, 과일/채소)"),
        options: &WEIGHTS_12,
    },
    Question {
        key: "question6",
        text: "글루코만난을 함유한 곤약은 얼마나 자주 섭취하나요?",
        chart_label: Some("글루코만난(곤약)"),
        options: &WEIGHTS_8,
    },
    Question {
        key: "question7",
        text: "Cereal gum을 함유한 보리, 오트밀, 귀리의 섭취는 얼마나 자주 섭취하나요?",
        chart_label: Some("Cereal gum(보리, 귀리)"),
        options: &WEIGHTS_14,
    },
    Question {
        key: "question8",
        text: "알긴산을 함유한 미역, 다시마는 얼마나 자주 섭취하나요?",
        chart_label: Some("알긴산(미역, 다시마)"),
        options: &WEIGHTS_14,
    },
];
