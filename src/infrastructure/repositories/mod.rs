// src/infrastructure/repositories/mod.rs
mod postgres_article;
mod postgres_comment;
mod postgres_tag;
mod postgres_user;

pub use postgres_article::PostgresArticleRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::{PostgresProfileRepository, PostgresUserRepository};

use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_SLUG => DomainError::conflict("article slug"),
                    CNT_USER_EMAIL => DomainError::conflict("email"),
                    CNT_USER_USERNAME => DomainError::conflict("username"),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::conflict("record");
                    }
                    "23503" => {
                        return DomainError::not_found("referenced record");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
