// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Mutex;

use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::{
    Email, NewUser, Profile, ProfileRepository, ProfileView, User, UserId, UserRepository,
    UserUpdate, Username,
};

#[derive(Default)]
struct UserState {
    next_id: i64,
    users: Vec<User>,
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    state: Mutex<UserState>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, user: User) {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(i64::from(user.id));
        state.users.push(user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|user| user.email == new_user.email) {
            return Err(DomainError::conflict("email"));
        }
        if state
            .users
            .iter()
            .any(|user| user.username == new_user.username)
        {
            return Err(DomainError::conflict("username"));
        }

        state.next_id += 1;
        let now = Utc::now();
        let stored = User {
            id: UserId::new(state.next_id)?,
            email: new_user.email,
            username: new_user.username,
            bio: String::new(),
            image: String::new(),
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        state.users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| &user.email == email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| DomainError::not_found("user"))?;

        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }
        if let Some(image) = update.image {
            user.image = image;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct InMemoryProfileRepo {
    profiles: Mutex<Vec<Profile>>,
    /// (follower_id, followee_id)
    follows: Mutex<HashSet<(i64, i64)>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_profile(&self, profile: Profile) {
        self.profiles.lock().unwrap().push(profile);
    }

    pub fn seed_follow(&self, follower: UserId, followee: UserId) {
        self.follows
            .lock()
            .unwrap()
            .insert((i64::from(follower), i64::from(followee)));
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_username(
        &self,
        username: &Username,
        viewer: Option<UserId>,
    ) -> DomainResult<Option<ProfileView>> {
        let profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles
            .iter()
            .find(|profile| &profile.username == username)
            .cloned()
        else {
            return Ok(None);
        };

        let following = viewer.is_some_and(|viewer| {
            self.follows
                .lock()
                .unwrap()
                .contains(&(i64::from(viewer), i64::from(profile.id)))
        });
        Ok(Some(ProfileView { profile, following }))
    }
}
