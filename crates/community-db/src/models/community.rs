//! Community database model

use sqlx::FromRow;

use community_core::{Community, CommunityPrivacy, DomainError};

use super::bad_enum;

/// Database model for the communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub name: String,
    pub privacy: String,
    pub created_by: i64,
}

impl TryFrom<CommunityModel> for Community {
    type Error = DomainError;

    fn try_from(model: CommunityModel) -> Result<Self, Self::Error> {
        let privacy = match model.privacy.as_str() {
            "public" => CommunityPrivacy::Public,
            "private" => CommunityPrivacy::Private,
            other => return Err(bad_enum("communities.privacy", other)),
        };

        Ok(Community {
            id: model.id,
            name: model.name,
            privacy,
            created_by: model.created_by,
        })
    }
}
