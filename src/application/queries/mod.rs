pub mod articles;
pub mod questions;
