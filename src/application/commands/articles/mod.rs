mod comment;
mod delete;
mod hit;
mod like;
mod save;
mod service;

pub use comment::SaveCommentCommand;
pub use save::SaveArticleCommand;
pub use service::ArticleCommandService;
