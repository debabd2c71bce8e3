pub mod articles;
pub mod pagination;
pub mod questions;
pub mod sessions;
pub mod users;

pub use articles::{ArticleDto, ArticleSummaryDto, CommentDto, LikeStatusDto};
pub use pagination::Page;
pub use questions::QuestionDto;
pub use sessions::{AuthenticatedUser, SessionClaims};
pub use users::UserDto;
