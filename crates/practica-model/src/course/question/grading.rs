use super::QuestionType;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compares a submitted answer against the stored one, ignoring case and surrounding
/// whitespace. Multi select answers also have to name one of the offered options.
#[must_use]
pub fn is_correct(question_type: QuestionType, answer: &str, options: &[String], given: &str) -> bool {
    let given = normalize(given);
    if given.is_empty() {
        return false;
    }

    match question_type {
        QuestionType::TrueFalse | QuestionType::ShortAnswer => given == normalize(answer),
        QuestionType::MultiSelect => {
            options.iter().any(|option| normalize(option) == given) && given == normalize(answer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_false_ignores_case() {
        assert!(is_correct(QuestionType::TrueFalse, "True", &[], "true"));
        assert!(is_correct(QuestionType::TrueFalse, "True", &[], "TRUE "));
        assert!(!is_correct(QuestionType::TrueFalse, "True", &[], "False"));
    }

    #[test]
    fn test_multi_select_requires_offered_option() {
        let options = vec!["Paris".to_owned(), "Rome".to_owned()];
        assert!(is_correct(QuestionType::MultiSelect, "Paris", &options, "paris"));
        assert!(!is_correct(QuestionType::MultiSelect, "Paris", &options, "Rome"));
        assert!(!is_correct(QuestionType::MultiSelect, "Paris", &[], "Paris"));
        assert!(!is_correct(QuestionType::MultiSelect, "Paris", &options, ""));
    }

    #[test]
    fn test_short_answer_trims() {
        assert!(is_correct(QuestionType::ShortAnswer, "paris", &[], "Paris "));
        assert!(!is_correct(QuestionType::ShortAnswer, "paris", &[], "Lyon"));
        assert!(!is_correct(QuestionType::ShortAnswer, "paris", &[], "   "));
    }
}
