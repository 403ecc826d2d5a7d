use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod grading;
pub mod validation;

pub use validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    TrueFalse,
    MultiSelect,
    ShortAnswer,
}

impl QuestionType {
    /// Guesses the type from what an author typed. Clients use this as a default only, the
    /// submitted type is authoritative.
    #[must_use]
    pub fn infer(options: Option<&str>, answer: &str) -> Self {
        let answer = answer.trim().to_lowercase();
        if answer == "true" || answer == "false" {
            return Self::TrueFalse;
        }
        if options.is_some_and(|options| options.contains(validation::OPTION_DELIMITER)) {
            return Self::MultiSelect;
        }
        Self::ShortAnswer
    }
}

/// A question as linked into one course version.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuestion {
    pub course_question_id: Uuid,
    pub question_id: Uuid,
    pub question_sentence: String,
    /// `;` delimited
    pub options: Option<String>,
    pub answer: String,
    pub question_type: QuestionType,
}

impl CourseQuestion {
    #[must_use]
    pub fn option_list(&self) -> Vec<String> {
        self.options.as_deref().map(validation::split_options).unwrap_or_default()
    }

    #[must_use]
    pub fn is_correct(&self, given: &str) -> bool {
        grading::is_correct(self.question_type, &self.answer, &self.option_list(), given)
    }
}

/// Options arrive as a `;` delimited string from manual authoring and as a list from
/// structured generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionOptions {
    Delimited(String),
    List(Vec<String>),
}

impl QuestionOptions {
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Delimited(options) => validation::split_options(&options),
            Self::List(options) => options,
        }
    }
}

/// Question content that passed the authoring rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question_sentence: String,
    question_type: QuestionType,
    options: Vec<String>,
    answer: String,
}

impl NewQuestion {
    pub fn new(
        question_sentence: &str,
        question_type: QuestionType,
        options: Vec<String>,
        answer: &str,
    ) -> Result<Self, ValidationError> {
        let question_sentence = question_sentence.trim();
        if question_sentence.is_empty() {
            return Err(ValidationError::MissingField("questionSentence"));
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(ValidationError::MissingField("answer"));
        }

        let options: Vec<String> = match question_type {
            QuestionType::MultiSelect => options
                .into_iter()
                .map(|option| option.trim().to_owned())
                .filter(|option| !option.is_empty())
                .collect(),
            QuestionType::TrueFalse | QuestionType::ShortAnswer => Vec::new(),
        };

        validation::check_rules(question_type, &options, answer)?;

        Ok(Self {
            question_sentence: question_sentence.to_owned(),
            question_type,
            options,
            answer: answer.to_owned(),
        })
    }

    /// Parses the loosely typed request fields, `questionType` included.
    pub fn from_fields(
        question_sentence: Option<&str>,
        question_type: Option<&str>,
        options: Option<QuestionOptions>,
        answer: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let question_sentence = question_sentence.ok_or(ValidationError::MissingField("questionSentence"))?;
        let answer = answer.ok_or(ValidationError::MissingField("answer"))?;
        let question_type = question_type
            .map(str::trim)
            .filter(|question_type| !question_type.is_empty())
            .ok_or(ValidationError::MissingField("questionType"))?;
        let question_type = question_type
            .parse::<QuestionType>()
            .map_err(|_| ValidationError::UnknownQuestionType(question_type.to_owned()))?;

        Self::new(
            question_sentence,
            question_type,
            options.map(QuestionOptions::into_vec).unwrap_or_default(),
            answer,
        )
    }

    #[must_use]
    pub fn question_sentence(&self) -> &str {
        &self.question_sentence
    }

    #[must_use]
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Storage form of the options, `None` unless there is at least one.
    #[must_use]
    pub fn joined_options(&self) -> Option<String> {
        (!self.options.is_empty()).then(|| validation::join_options(&self.options))
    }
}
