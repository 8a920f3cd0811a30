use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by the data model.
///
/// Validation failures are caught before anything touches the database.
/// Integrity failures are constraint rejections reported by the database
/// at commit time. A failed login is neither: see `user::Entity::authenticate`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("integrity violation: {0}")]
    Integrity(String),

    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("database error: {0}")]
    Database(#[source] DbErr),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ModelError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ModelError::Validation(_))
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, ModelError::Integrity(_))
    }
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        if is_constraint_violation(&err) {
            ModelError::Integrity(err.to_string())
        } else {
            ModelError::Database(err)
        }
    }
}

/// Unique and foreign key clashes are recognised by sea-orm itself. NOT NULL
/// failures are not, so fall back to the wording each backend uses.
fn is_constraint_violation(err: &DbErr) -> bool {
    if err.sql_err().is_some() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("not null constraint") // sqlite
        || msg.contains("violates not-null constraint") // postgres
        || msg.contains("cannot be null") // mysql
        || msg.contains("unique constraint")
        || msg.contains("foreign key constraint")
}
