use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, ProfileView, User, UserUpdate};
use crate::domain::user::value_objects::{Email, UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn update(&self, id: UserId, update: UserUpdate) -> DomainResult<User>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Resolve a profile by username. When a viewer is present the collaborator
    /// precomputes the viewer's follow relationship for this single profile.
    async fn find_by_username(
        &self,
        username: &Username,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<ProfileView>>;
}
