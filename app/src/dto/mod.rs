pub mod auth;
pub mod comment;
pub mod page;
pub mod task;
pub mod user;
