use practica_entity::user::Model as UserModel;
use practica_model::user::User;

use crate::convert::FromDbModel;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            user_id: model.id,
            name: model.name,
        }
    }
}
