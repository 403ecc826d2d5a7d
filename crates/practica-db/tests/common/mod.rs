use practica_db::course::course::mutation::CourseData;
use practica_db::course::question::mutation::QuestionData;
use practica_entity::course::question::QuestionType;
use practica_test_helpers::setup_schema;
use sea_orm::{Database, DbConn};

pub async fn connect() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

pub fn course_data(course_name: &str, course_creator: &str) -> CourseData {
    CourseData {
        course_name: course_name.to_owned(),
        course_creator: course_creator.to_owned(),
        created_by: course_creator.to_owned(),
    }
}

pub fn short_answer(question_sentence: &str, answer: &str) -> QuestionData {
    QuestionData {
        question_sentence: question_sentence.to_owned(),
        question_type: QuestionType::ShortAnswer,
        options: None,
        answer: answer.to_owned(),
    }
}
