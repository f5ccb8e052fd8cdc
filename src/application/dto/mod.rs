pub mod auth;
pub mod id;
pub mod post;
pub mod profile;
pub mod user;
