#![forbid(unsafe_code)]

pub mod components;
pub mod date;
pub mod handlers;
pub mod html;
pub mod routes;
pub mod state;
pub mod toast;

pub use components::{
    auth::{AuthForm, AuthMode, AuthPage},
    feed::{Click, FeedPage, Outcome},
    post::ClickTarget,
};
pub use routes::Route;
