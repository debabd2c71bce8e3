pub mod admin;
pub mod articles;
pub mod auth;
pub mod comments;
pub mod questions;
pub mod users;
