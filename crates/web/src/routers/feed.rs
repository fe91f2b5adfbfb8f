use std::sync::Arc;

use api::entities::Post;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use frontend::{Click, ClickTarget, FeedPage, Outcome};

use crate::{errors::AppError, render_page, session::Session, AppState};

fn mount(session: &mut Session, posts: Vec<Post>, state: &AppState) -> Result<String, AppError> {
    let now = Utc::now();
    let page = FeedPage::mount(posts, session.user.clone(), session.token(), now);
    let html = render_page(&state.config.web.title, &page.to_html(now))?;
    session.feed = Some(page);
    Ok(html)
}

pub async fn http_get_posts(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (jar, session) = state
        .sessions
        .resolve(jar, state.config.web.secure_cookies)
        .await;
    let mut session = session.lock().await;

    let posts = state.api.posts(session.token().as_deref()).await?;
    let html = mount(&mut session, posts, &state)?;
    Ok((jar, Html(html)))
}

pub async fn http_get_user_posts(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (jar, session) = state
        .sessions
        .resolve(jar, state.config.web.secure_cookies)
        .await;
    let mut session = session.lock().await;

    let posts = state
        .api
        .user_posts(session.token().as_deref(), &user_id)
        .await?;
    let html = mount(&mut session, posts, &state)?;
    Ok((jar, Html(html)))
}

pub async fn http_post_click(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path((post_id, target)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let target: ClickTarget = target
        .parse()
        .map_err(|_| AppError::not_found("click target"))?;

    let Some(session) = state.sessions.from_jar(&jar).await else {
        return Ok(Redirect::to("/").into_response());
    };
    let mut session = session.lock().await;
    let Some(page) = session.feed.as_mut() else {
        return Ok(Redirect::to("/").into_response());
    };

    let now = Utc::now();
    match page.click(state.api.as_ref(), Click { post_id, target }, now).await {
        Outcome::Navigate(route) => Ok(Redirect::to(&route.path()).into_response()),
        Outcome::Render => {
            let html = render_page(&state.config.web.title, &page.to_html(now))?;
            Ok(Html(html).into_response())
        }
    }
}
