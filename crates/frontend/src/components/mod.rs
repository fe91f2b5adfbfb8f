pub mod auth;
pub mod feed;
pub mod header;
pub mod post;
