use crate::error::ModelError;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ModelTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

pub const MAX_TEXT_LEN: usize = 140;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(140))")]
    pub text: String,
    pub timestamp: DateTimeUtc,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// A pending message by `user_id`, stamped now. Missing text is left for
    /// the database to reject on insert.
    pub fn compose(text: Option<&str>, user_id: i32) -> Result<Self, ModelError> {
        if let Some(text) = text {
            if text.chars().count() > MAX_TEXT_LEN {
                return Err(ModelError::validation(format!(
                    "message text is longer than {} characters",
                    MAX_TEXT_LEN
                )));
            }
        }

        Ok(ActiveModel {
            text: text.map_or(ActiveValue::NotSet, |t| Set(t.to_string())),
            timestamp: Set(Utc::now()),
            user_id: Set(user_id),
            ..Default::default()
        })
    }
}

impl Model {
    pub async fn author<C>(&self, db: &C) -> Result<Option<super::user::Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.find_related(super::user::Entity).one(db).await?)
    }

    pub async fn like_count<C>(&self, db: &C) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.find_related(super::likes::Entity).count(db).await?)
    }
}
