pub mod entity;
pub mod repository;

pub use entity::{NewQuestion, Question, QuestionId, QuestionUpdate};
pub use repository::QuestionRepository;
