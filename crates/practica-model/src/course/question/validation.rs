use thiserror::Error;

use super::QuestionType;

pub const OPTION_DELIMITER: char = ';';
pub const MAX_SHORT_ANSWER_CHARS: usize = 80;
pub const TRUE_FALSE_ANSWERS: [&str; 2] = ["True", "False"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing fields: {0}")]
    MissingField(&'static str),

    #[error("Unknown question type: {0}")]
    UnknownQuestionType(String),

    #[error("TRUE_FALSE answer must be 'True' or 'False'")]
    TrueFalseAnswer,

    #[error("MULTI_SELECT requires options")]
    MissingOptions,

    #[error("MULTI_SELECT options must not contain '{OPTION_DELIMITER}'")]
    OptionContainsDelimiter,

    #[error("MULTI_SELECT answer must be one of options")]
    AnswerNotInOptions,

    #[error("SHORT_ANSWER answer must be at most {MAX_SHORT_ANSWER_CHARS} characters")]
    AnswerTooLong,
}

/// Type specific rules every authored question has to satisfy.
pub fn check_rules(question_type: QuestionType, options: &[String], answer: &str) -> Result<(), ValidationError> {
    match question_type {
        QuestionType::TrueFalse => {
            if !TRUE_FALSE_ANSWERS.contains(&answer) {
                return Err(ValidationError::TrueFalseAnswer);
            }
        }
        QuestionType::MultiSelect => {
            if options.is_empty() {
                return Err(ValidationError::MissingOptions);
            }
            // options are stored delimiter-joined
            if options.iter().any(|option| option.contains(OPTION_DELIMITER)) {
                return Err(ValidationError::OptionContainsDelimiter);
            }
            if !options.iter().any(|option| option == answer) {
                return Err(ValidationError::AnswerNotInOptions);
            }
        }
        QuestionType::ShortAnswer => {
            if answer.is_empty() {
                return Err(ValidationError::MissingField("answer"));
            }
            if answer.chars().count() > MAX_SHORT_ANSWER_CHARS {
                return Err(ValidationError::AnswerTooLong);
            }
        }
    }
    Ok(())
}

#[must_use]
pub fn split_options(options: &str) -> Vec<String> {
    options
        .split(OPTION_DELIMITER)
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_owned)
        .collect()
}

#[must_use]
pub fn join_options(options: &[String]) -> String {
    options.join(&OPTION_DELIMITER.to_string())
}
