use practica_entity::course::course_version::Model as CourseVersionModel;
use practica_model::course::version::CourseVersion;

use crate::convert::FromDbModel;

impl FromDbModel<CourseVersionModel> for CourseVersion {
    fn from_db_model(model: CourseVersionModel) -> Self {
        Self {
            course_version_id: model.id,
            version: model.version,
        }
    }
}
