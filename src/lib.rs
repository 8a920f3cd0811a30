pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;

pub use error::ModelError;
