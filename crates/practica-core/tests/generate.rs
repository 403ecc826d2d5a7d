mod common;

use crate::common::connect;
use async_trait::async_trait;
use practica_core::course;
use practica_core::generate::error::GenerateError;
use practica_core::generate::{
    CourseGenerator, GeneratedCoursePayload, GeneratedQuestion, GenerationRequest, generate_course,
};
use practica_model::course::question::{QuestionType, ValidationError};
use test_log::test;

struct StubGenerator(GeneratedCoursePayload);

#[async_trait]
impl CourseGenerator for StubGenerator {
    async fn generate(&self, _: &GenerationRequest) -> Result<GeneratedCoursePayload, GenerateError> {
        Ok(self.0.clone())
    }
}

fn true_false(index: usize) -> GeneratedQuestion {
    GeneratedQuestion {
        question_sentence: format!("Statement {index} holds."),
        question_type: "TRUE_FALSE".to_owned(),
        options: None,
        answer: "True".to_owned(),
    }
}

fn payload(questions: Vec<GeneratedQuestion>) -> GeneratedCoursePayload {
    GeneratedCoursePayload {
        course_name: Some("Generated".to_owned()),
        creator: Some("Model".to_owned()),
        questions,
    }
}

fn request(count: i64, course_name: Option<&str>, course_creator: Option<&str>) -> GenerationRequest {
    GenerationRequest::new(Some("Databases"), Some(count), course_name, course_creator).unwrap()
}

#[test(tokio::test)]
async fn test_extra_questions_are_dropped() {
    let db = &connect().await;
    let generator = StubGenerator(payload((0..5).map(true_false).collect()));

    let generated = generate_course(db, &generator, request(3, None, None)).await.unwrap();
    assert_eq!(generated.new_version_number, 1);

    let detail = course::get_course_detail(db, generated.course_id, None).await.unwrap();
    assert_eq!(detail.questions.len(), 3);
    assert_eq!(detail.questions[0].question_sentence, "Statement 0 holds.");
    assert_eq!(detail.questions[2].question_type, QuestionType::TrueFalse);
    assert_eq!(detail.course.course_name, "Generated");
    assert_eq!(detail.course.course_creator, "Model");
}

#[test(tokio::test)]
async fn test_fewer_questions_are_accepted() {
    let db = &connect().await;
    let generator = StubGenerator(payload(vec![true_false(0)]));

    let generated = generate_course(db, &generator, request(4, None, None)).await.unwrap();

    let detail = course::get_course_detail(db, generated.course_id, None).await.unwrap();
    assert_eq!(detail.questions.len(), 1);
}

#[test(tokio::test)]
async fn test_invalid_question_rejects_batch() {
    let db = &connect().await;
    let invalid = GeneratedQuestion {
        question_sentence: "Pick the key".to_owned(),
        question_type: "MULTI_SELECT".to_owned(),
        options: Some(vec!["Primary".to_owned(), "Secondary".to_owned()]),
        answer: "Tertiary".to_owned(),
    };
    let generator = StubGenerator(payload(vec![true_false(0), invalid]));

    let err = generate_course(db, &generator, request(2, None, None)).await.unwrap_err();
    assert!(matches!(err, GenerateError::InvalidQuestion(ValidationError::AnswerNotInOptions)));
    assert!(course::list_courses(db).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_option_with_delimiter_rejects_batch() {
    let db = &connect().await;
    let invalid = GeneratedQuestion {
        question_sentence: "Pick the separator".to_owned(),
        question_type: "MULTI_SELECT".to_owned(),
        options: Some(vec!["A;B".to_owned(), "C".to_owned()]),
        answer: "A;B".to_owned(),
    };
    let generator = StubGenerator(payload(vec![true_false(0), invalid]));

    let err = generate_course(db, &generator, request(2, None, None)).await.unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidQuestion(ValidationError::OptionContainsDelimiter)
    ));
    assert!(course::list_courses(db).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_empty_batch_is_an_error() {
    let db = &connect().await;
    let generator = StubGenerator(payload(vec![]));

    let err = generate_course(db, &generator, request(2, None, None)).await.unwrap_err();
    assert!(matches!(err, GenerateError::NoQuestions));
    assert_eq!(err.to_string(), "No questions produced");
}

#[test(tokio::test)]
async fn test_names_prefer_request_then_model_then_topic() {
    let db = &connect().await;

    let generator = StubGenerator(payload(vec![true_false(0)]));
    let generated = generate_course(db, &generator, request(1, Some("Chosen"), Some("Ada")))
        .await
        .unwrap();
    let detail = course::get_course_detail(db, generated.course_id, None).await.unwrap();
    assert_eq!(detail.course.course_name, "Chosen");
    assert_eq!(detail.course.course_creator, "Ada");

    let generator = StubGenerator(GeneratedCoursePayload {
        course_name: Some("  ".to_owned()),
        creator: None,
        questions: vec![true_false(0)],
    });
    let generated = generate_course(db, &generator, request(1, None, None)).await.unwrap();
    let detail = course::get_course_detail(db, generated.course_id, None).await.unwrap();
    assert_eq!(detail.course.course_name, "Databases — Basics");
    assert_eq!(detail.course.course_creator, "AI");
}

#[test(tokio::test)]
async fn test_long_names_are_truncated() {
    let db = &connect().await;
    let generator = StubGenerator(GeneratedCoursePayload {
        course_name: Some("n".repeat(300)),
        creator: Some("c".repeat(150)),
        questions: vec![true_false(0)],
    });

    let generated = generate_course(db, &generator, request(1, None, None)).await.unwrap();
    let detail = course::get_course_detail(db, generated.course_id, None).await.unwrap();
    assert_eq!(detail.course.course_name.chars().count(), 200);
    assert_eq!(detail.course.course_creator.chars().count(), 100);
}
