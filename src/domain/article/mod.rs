pub mod comment;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use comment::{Comment, CommentWithMeta, NewComment};
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleReadRepository, ArticleWriteRepository, CommentRepository, LikeRepository,
};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, CommentContent, CommentId};
