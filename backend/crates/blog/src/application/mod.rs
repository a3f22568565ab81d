//! Application Layer
//!
//! Use cases and application services.

pub mod comment;
pub mod create;
pub mod like;
pub mod read;
pub mod update;

// Re-exports
pub use comment::{CommentInput, CommentUseCase};
pub use create::{CreateBlogInput, CreateBlogUseCase};
pub use like::{LikeOutput, LikeUseCase};
pub use read::{BlogDetail, ReadBlogUseCase};
pub use update::{UpdateBlogInput, UpdateBlogUseCase};
