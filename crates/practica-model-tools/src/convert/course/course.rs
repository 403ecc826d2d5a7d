use practica_entity::course::course::Model as CourseModel;
use practica_model::course::course::{CourseInfo, CourseSummary};

use crate::convert::FromDbModel;

impl FromDbModel<CourseModel> for CourseInfo {
    fn from_db_model(model: CourseModel) -> Self {
        Self {
            course_id: model.id,
            course_name: model.course_name,
            course_creator: model.course_creator,
            created_by: model.created_by,
            updated_by: model.updated_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl FromDbModel<(CourseModel, Option<i32>)> for CourseSummary {
    fn from_db_model((model, latest_version): (CourseModel, Option<i32>)) -> Self {
        Self {
            course_id: model.id,
            course_name: model.course_name,
            course_creator: model.course_creator,
            created_at: model.created_at,
            latest_version,
        }
    }
}
