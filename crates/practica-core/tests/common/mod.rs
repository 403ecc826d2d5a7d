use practica_core::course::{self, NewCourse};
use practica_model::course::question::{NewQuestion, QuestionType};
use practica_test_helpers::setup_schema;
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

pub async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    db
}

pub async fn create_course(db: &DatabaseConnection, course_name: &str) -> Uuid {
    let course = NewCourse::new(Some(course_name), Some("Ada"), None).unwrap();
    course::create_course(db, course).await.unwrap().course_id
}

pub fn short_answer(question_sentence: &str, answer: &str) -> NewQuestion {
    NewQuestion::new(question_sentence, QuestionType::ShortAnswer, vec![], answer).unwrap()
}

pub fn true_false(question_sentence: &str, answer: &str) -> NewQuestion {
    NewQuestion::new(question_sentence, QuestionType::TrueFalse, vec![], answer).unwrap()
}

pub fn multi_select(question_sentence: &str, options: &[&str], answer: &str) -> NewQuestion {
    let options = options.iter().map(|option| (*option).to_owned()).collect();
    NewQuestion::new(question_sentence, QuestionType::MultiSelect, options, answer).unwrap()
}
