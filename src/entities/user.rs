use crate::auth::{hash_password, verify_password};
use crate::error::ModelError;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Linked, ModelTrait, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{follows, likes, message};

pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";
pub const DEFAULT_HEADER_IMAGE_URL: &str = "/static/images/warbler-hero.jpg";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub email: String,
    #[sea_orm(column_type = "Text", unique)]
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub image_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub header_image_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub bio: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub location: Option<String>,
    #[serde(skip_serializing)]
    #[sea_orm(column_type = "Text")]
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::message::Entity")]
    Messages,
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Users following a given user.
pub struct Followers;

impl Linked for Followers {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            follows::Relation::Followed.def().rev(),
            follows::Relation::Follower.def(),
        ]
    }
}

/// Users a given user follows.
pub struct Following;

impl Linked for Following {
    type FromEntity = Entity;
    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            follows::Relation::Follower.def().rev(),
            follows::Relation::Followed.def(),
        ]
    }
}

pub struct LikedMessages;

impl Linked for LikedMessages {
    type FromEntity = Entity;
    type ToEntity = message::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![likes::Relation::User.def().rev(), likes::Relation::Message.def()]
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

impl ActiveModel {
    /// Builds a pending user with a bcrypt-hashed password.
    ///
    /// Only the password is checked here. A missing username or email is left
    /// unset, so the database rejects the row when it is inserted.
    pub fn signup(
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, ModelError> {
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ModelError::validation("password must not be empty")),
        };

        let password_hash = hash_password(password)?;

        Ok(ActiveModel {
            username: username.map_or(ActiveValue::NotSet, |u| Set(u.to_string())),
            email: email.map_or(ActiveValue::NotSet, |e| Set(e.to_string())),
            image_url: Set(Some(image_url.unwrap_or(DEFAULT_IMAGE_URL).to_string())),
            password: Set(password_hash),
            ..Default::default()
        })
    }
}

impl Entity {
    /// Looks up `username` and checks `password` against the stored hash.
    ///
    /// Returns `Ok(None)` for an unknown user or a wrong password; only
    /// database failures are errors.
    pub async fn authenticate<C>(
        db: &C,
        username: &str,
        password: &str,
    ) -> Result<Option<Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        let user = Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await?;

        let Some(user) = user else {
            log::debug!("Authentication failed: no user named {}", username);
            return Ok(None);
        };

        if verify_password(password, &user.password) {
            Ok(Some(user))
        } else {
            log::debug!("Authentication failed: wrong password for {}", username);
            Ok(None)
        }
    }
}

impl Model {
    pub fn image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }

    pub fn header_image_url(&self) -> &str {
        self.header_image_url
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_IMAGE_URL)
    }

    /// This user's messages, newest first.
    pub async fn messages<C>(&self, db: &C) -> Result<Vec<message::Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        let messages = self
            .find_related(message::Entity)
            .order_by_desc(message::Column::Timestamp)
            .order_by_desc(message::Column::Id)
            .all(db)
            .await?;
        Ok(messages)
    }

    pub async fn followers<C>(&self, db: &C) -> Result<Vec<Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.find_linked(Followers).all(db).await?)
    }

    pub async fn following<C>(&self, db: &C) -> Result<Vec<Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.find_linked(Following).all(db).await?)
    }

    /// Is this user following `other`?
    pub async fn is_following<C>(&self, db: &C, other: &Model) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        let edge = follows::Entity::find_by_id((other.id, self.id))
            .one(db)
            .await?;
        Ok(edge.is_some())
    }

    /// Is `other` following this user?
    pub async fn is_followed_by<C>(&self, db: &C, other: &Model) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        let edge = follows::Entity::find_by_id((self.id, other.id))
            .one(db)
            .await?;
        Ok(edge.is_some())
    }

    /// Starts following `other`. Following someone twice is a no-op.
    pub async fn follow<C>(&self, db: &C, other: &Model) -> Result<(), ModelError>
    where
        C: ConnectionTrait,
    {
        if self.id == other.id {
            return Err(ModelError::validation("users cannot follow themselves"));
        }

        if self.is_following(db, other).await? {
            log::debug!("{} already follows {}", self.username, other.username);
            return Ok(());
        }

        follows::Entity::insert(follows::ActiveModel::edge(other.id, self.id))
            .exec_without_returning(db)
            .await?;

        log::info!("{} now follows {}", self.username, other.username);
        Ok(())
    }

    /// Stops following `other`. Returns whether an edge was removed.
    pub async fn unfollow<C>(&self, db: &C, other: &Model) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        let result = follows::Entity::delete_by_id((other.id, self.id))
            .exec(db)
            .await?;

        if result.rows_affected > 0 {
            log::info!("{} stopped following {}", self.username, other.username);
        }
        Ok(result.rows_affected > 0)
    }

    /// Home feed: this user's messages plus those of everyone they follow,
    /// newest first.
    pub async fn timeline<C>(&self, db: &C, limit: u64) -> Result<Vec<message::Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        let mut author_ids: Vec<i32> = self
            .following(db)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();
        author_ids.push(self.id);

        let messages = message::Entity::find()
            .filter(message::Column::UserId.is_in(author_ids))
            .order_by_desc(message::Column::Timestamp)
            .order_by_desc(message::Column::Id)
            .limit(limit)
            .all(db)
            .await?;
        Ok(messages)
    }

    pub async fn liked_messages<C>(&self, db: &C) -> Result<Vec<message::Model>, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.find_linked(LikedMessages).all(db).await?)
    }

    pub async fn has_liked<C>(&self, db: &C, message: &message::Model) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        let like = likes::Entity::find_by_id((self.id, message.id))
            .one(db)
            .await?;
        Ok(like.is_some())
    }

    /// Likes `message`, or removes the like if it is already there.
    /// Returns true when a like was added.
    pub async fn toggle_like<C>(&self, db: &C, message: &message::Model) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        if message.user_id == self.id {
            return Err(ModelError::validation("users cannot like their own messages"));
        }

        if self.has_liked(db, message).await? {
            likes::Entity::delete_by_id((self.id, message.id))
                .exec(db)
                .await?;
            log::info!("{} unliked message #{}", self.username, message.id);
            return Ok(false);
        }

        let like = likes::ActiveModel {
            user_id: Set(self.id),
            message_id: Set(message.id),
        };
        likes::Entity::insert(like).exec_without_returning(db).await?;

        log::info!("{} liked message #{}", self.username, message.id);
        Ok(true)
    }
}
