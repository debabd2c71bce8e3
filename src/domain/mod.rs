pub mod article;
pub mod category;
pub mod errors;
pub mod question;
pub mod user;
