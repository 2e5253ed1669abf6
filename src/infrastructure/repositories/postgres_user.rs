// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, NewUser, Profile, ProfileRepository, ProfileView, User, UserId, UserRepository,
    UserUpdate, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_USER: &str = "SELECT id, email, username, bio, image, password_hash, \
     created_at, updated_at FROM users";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    username: String,
    bio: String,
    image: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> DomainResult<User> {
        Ok(User {
            id: UserId::new(self.id)?,
            email: Email::new(self.email)?,
            username: Username::new(self.username)?,
            bio: self.bio,
            image: self.image,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl PostgresUserRepository {
    async fn fetch_one_by(&self, column: &str, value: &str) -> DomainResult<Option<User>> {
        let query = format!("{SELECT_USER} WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(UserRow::into_user).transpose()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, username, password_hash) VALUES ($1, $2, $3) \
             RETURNING id, email, username, bio, image, password_hash, created_at, updated_at",
        )
        .bind(new_user.email.as_str())
        .bind(new_user.username.as_str())
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.into_user()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.fetch_one_by("email", email.as_str()).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.fetch_one_by("username", username.as_str()).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let query = format!("{SELECT_USER} WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(UserRow::into_user).transpose()
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| DomainError::not_found("user"));
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE users SET updated_at = now()");
        if let Some(email) = &update.email {
            builder.push(", email = ");
            builder.push_bind(email.as_str().to_owned());
        }
        if let Some(username) = &update.username {
            builder.push(", username = ");
            builder.push_bind(username.as_str().to_owned());
        }
        if let Some(bio) = &update.bio {
            builder.push(", bio = ");
            builder.push_bind(bio.clone());
        }
        if let Some(image) = &update.image {
            builder.push(", image = ");
            builder.push_bind(image.clone());
        }
        if let Some(password_hash) = &update.password_hash {
            builder.push(", password_hash = ");
            builder.push_bind(password_hash.clone());
        }
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(
            " RETURNING id, email, username, bio, image, password_hash, created_at, updated_at",
        );

        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(UserRow::into_user)
            .transpose()?
            .ok_or_else(|| DomainError::not_found("user"))
    }
}

#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    username: String,
    bio: String,
    image: String,
    following: bool,
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_username(
        &self,
        username: &Username,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<ProfileView>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT u.id, u.username, u.bio, u.image, \
             CASE WHEN $2::bigint IS NULL THEN false \
             ELSE EXISTS (SELECT 1 FROM follows fo \
                 WHERE fo.follower_id = $2 AND fo.followee_id = u.id) \
             END AS following \
             FROM users u WHERE u.username = $1",
        )
        .bind(username.as_str())
        .bind(viewer.map(i64::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| {
            Ok(ProfileView {
                profile: Profile {
                    id: UserId::new(row.id)?,
                    username: Username::new(row.username)?,
                    bio: row.bio,
                    image: row.image,
                },
                following: row.following,
            })
        })
        .transpose()
    }
}
