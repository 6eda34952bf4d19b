//! User database model

use sqlx::FromRow;

use community_core::{DomainError, User, UserRole};

use super::bad_enum;

/// Database model for the users table (socket-facing columns only)
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: String,
    pub role: String,
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = match model.role.as_str() {
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            other => return Err(bad_enum("users.role", other)),
        };

        Ok(User {
            id: model.id,
            name: model.name,
            role,
        })
    }
}
