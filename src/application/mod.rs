pub mod auth;
pub mod dto;
pub mod error;
pub mod ports;
pub mod services;
pub mod social;
pub mod users;

pub use error::{ApplicationError, ApplicationResult};
