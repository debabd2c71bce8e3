pub mod articles;
pub mod questions;
pub mod users;
