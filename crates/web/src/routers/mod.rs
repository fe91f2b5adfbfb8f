mod auth;
mod feed;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(&state.config.assets.dir);

    Router::new()
        .route("/", get(feed::http_get_posts))
        .route("/users/:id", get(feed::http_get_user_posts))
        .route("/feed/:post_id/:target", post(feed::http_post_click))
        .route("/auth", get(auth::http_get_auth).post(auth::http_post_auth))
        .route("/auth/toggle", post(auth::http_post_toggle))
        .route("/logout", post(auth::http_post_logout))
        .nest_service("/assets", assets)
        .with_state(state)
}
