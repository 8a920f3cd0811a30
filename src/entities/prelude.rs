pub use super::follows::Entity as Follows;
pub use super::likes::Entity as Likes;
pub use super::message::Entity as Message;
pub use super::user::Entity as User;
