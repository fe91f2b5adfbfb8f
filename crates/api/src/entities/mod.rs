pub mod favorite;
pub mod post;
pub mod user;

pub use favorite::FavoriteAction;
pub use post::{Like, Post, PostAuthor};
pub use user::{LoginRequest, RegisterRequest, User};
