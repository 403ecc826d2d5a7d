use async_trait::async_trait;
use practica_db::user;
use practica_model::user::User;
use practica_model_tools::convert::IntoModel;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Name required")]
    NameRequired,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Issues the opaque user ids every other operation is keyed by.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn ensure_user(&self, conn: &DatabaseConnection, name: &str) -> Result<User, IdentityError>;
}

/// Trusts the supplied display name and hands out one id per distinct name. There are no
/// credentials involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameIdentityProvider;

#[async_trait]
impl IdentityProvider for NameIdentityProvider {
    async fn ensure_user(&self, conn: &DatabaseConnection, name: &str) -> Result<User, IdentityError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IdentityError::NameRequired);
        }

        let user = user::Mutation::upsert_user_by_name(conn, name).await?;
        tracing::debug!(user_id = %user.id, "ensured user");
        Ok(user.into_model())
    }
}
