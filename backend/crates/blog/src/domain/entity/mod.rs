//! Entity Module

pub mod blog;
pub mod comment;

pub use blog::{Blog, BlogPatch};
pub use comment::Comment;
