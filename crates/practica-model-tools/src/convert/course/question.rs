use practica_entity::course::course_question::Model as CourseQuestionModel;
use practica_entity::course::question::Model as QuestionModel;
use practica_entity::course::question::QuestionType as QuestionTypeModel;
use practica_model::course::question::{CourseQuestion, QuestionType};

use crate::convert::{FromDbModel, FromModel};

impl FromDbModel<QuestionTypeModel> for QuestionType {
    fn from_db_model(model: QuestionTypeModel) -> Self {
        match model {
            QuestionTypeModel::TrueFalse => Self::TrueFalse,
            QuestionTypeModel::MultiSelect => Self::MultiSelect,
            QuestionTypeModel::ShortAnswer => Self::ShortAnswer,
        }
    }
}

impl FromModel<QuestionType> for QuestionTypeModel {
    fn from_model(model: QuestionType) -> Self {
        match model {
            QuestionType::TrueFalse => Self::TrueFalse,
            QuestionType::MultiSelect => Self::MultiSelect,
            QuestionType::ShortAnswer => Self::ShortAnswer,
        }
    }
}

impl FromDbModel<(CourseQuestionModel, QuestionModel)> for CourseQuestion {
    fn from_db_model((link, question): (CourseQuestionModel, QuestionModel)) -> Self {
        Self {
            course_question_id: link.id,
            question_id: question.id,
            question_sentence: question.question_sentence,
            options: question.options,
            answer: question.answer,
            question_type: FromDbModel::from_db_model(question.question_type),
        }
    }
}
