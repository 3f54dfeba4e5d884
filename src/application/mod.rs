pub mod user_service;
pub mod error;

pub use user_service::*;
pub use error::*;
