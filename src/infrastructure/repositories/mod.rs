mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_like;
mod postgres_question;
mod postgres_user;

pub use postgres_article::PostgresArticleRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_like::PostgresLikeRepository;
pub use postgres_question::PostgresQuestionRepository;
pub use postgres_user::PostgresUserRepository;
