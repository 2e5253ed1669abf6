pub mod articles;
pub mod comments;
pub mod users;

pub use articles::{ArticleDto, ProfileDto};
pub use comments::CommentDto;
pub use users::UserDto;
