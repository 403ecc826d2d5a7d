use practica_entity::course::course_version::Model as CourseVersionModel;
use practica_entity::practice::practice_session::Model as PracticeSessionModel;
use practica_entity::practice::practice_session::SessionStatus as SessionStatusModel;
use practica_model::practice::session::{PracticeSession, SessionProgress, SessionStatus};

use crate::convert::{FromDbModel, FromModel};

impl FromDbModel<SessionStatusModel> for SessionStatus {
    fn from_db_model(model: SessionStatusModel) -> Self {
        match model {
            SessionStatusModel::InProgress => Self::InProgress,
            SessionStatusModel::Completed => Self::Completed,
        }
    }
}

impl FromModel<SessionStatus> for SessionStatusModel {
    fn from_model(model: SessionStatus) -> Self {
        match model {
            SessionStatus::InProgress => Self::InProgress,
            SessionStatus::Completed => Self::Completed,
        }
    }
}

impl FromDbModel<PracticeSessionModel> for SessionProgress {
    fn from_db_model(model: PracticeSessionModel) -> Self {
        Self {
            session_id: model.id,
            current_index: model.current_index,
            correct_count: model.correct_count,
            status: FromDbModel::from_db_model(model.status),
        }
    }
}

impl FromDbModel<(PracticeSessionModel, CourseVersionModel)> for PracticeSession {
    fn from_db_model((model, version): (PracticeSessionModel, CourseVersionModel)) -> Self {
        Self {
            session_id: model.id,
            current_index: model.current_index,
            correct_count: model.correct_count,
            total_questions: model.total_questions,
            status: FromDbModel::from_db_model(model.status),
            course_version: version.version,
        }
    }
}
