use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use frontend::{AuthForm, Route};

use crate::{errors::AppError, render_page, AppState};

pub async fn http_get_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, session) = state
        .sessions
        .resolve(jar, state.config.web.secure_cookies)
        .await;
    let session = session.lock().await;

    if session.user.is_some() {
        return Ok((jar, Redirect::to(&Route::Posts.path())).into_response());
    }

    let html = render_page(&state.config.web.title, &session.auth.to_html())?;
    Ok((jar, Html(html)).into_response())
}

pub async fn http_post_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<AuthForm>,
) -> Result<impl IntoResponse, AppError> {
    let (jar, session) = state
        .sessions
        .resolve(jar, state.config.web.secure_cookies)
        .await;
    let mut session = session.lock().await;

    match session.auth.submit(state.api.as_ref(), form).await {
        Some(user) => {
            session.sign_in(user);
            Ok((jar, Redirect::to(&Route::Posts.path())).into_response())
        }
        None => {
            let html = render_page(&state.config.web.title, &session.auth.to_html())?;
            Ok((jar, Html(html)).into_response())
        }
    }
}

pub async fn http_post_toggle(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, session) = state
        .sessions
        .resolve(jar, state.config.web.secure_cookies)
        .await;
    session.lock().await.auth.toggle_mode();

    (jar, Redirect::to(&Route::Auth.path()))
}

pub async fn http_post_logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let jar = state.sessions.end(jar).await;

    (jar, Redirect::to(&Route::Posts.path()))
}
