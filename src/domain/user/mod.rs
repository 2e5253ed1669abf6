pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, Profile, ProfileView, User, UserUpdate};
pub use repository::{ProfileRepository, UserRepository};
pub use value_objects::{Email, UserId, Username};
