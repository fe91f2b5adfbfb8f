use std::{collections::HashMap, sync::Arc};

use api::entities::User;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Duration, Utc};
use frontend::{AuthPage, FeedPage};
use svix_ksuid::KsuidLike;
use tokio::sync::{Mutex, RwLock};

pub const SESSION_COOKIE: &str = "session";

/// Everything one browser tab sees: who is signed in and the mounted page.
#[derive(Default)]
pub struct Session {
    pub user: Option<User>,
    pub feed: Option<FeedPage>,
    pub auth: AuthPage,
}

impl Session {
    pub fn token(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.token.clone())
    }

    pub fn sign_in(&mut self, user: User) {
        log::info!("{} signed in", user.login);
        self.user = Some(user);
        self.feed = None;
        self.auth = AuthPage::default();
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.feed = None;
    }
}

struct Entry {
    session: Arc<Mutex<Session>>,
    last_seen: DateTime<Utc>,
}

pub struct Sessions {
    inner: RwLock<HashMap<String, Entry>>,
    idle: Duration,
}

impl Sessions {
    pub fn new(idle: Duration) -> Self {
        Sessions {
            inner: RwLock::new(HashMap::new()),
            idle,
        }
    }

    pub async fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        let now = Utc::now();
        let mut inner = self.inner.write().await;
        let entry = inner.get_mut(id)?;
        if now - entry.last_seen >= self.idle {
            inner.remove(id);
            return None;
        }

        entry.last_seen = now;
        Some(Arc::clone(&entry.session))
    }

    /// Starts a session, dropping every one that went idle first.
    pub async fn create(&self) -> (String, Arc<Mutex<Session>>) {
        let now = Utc::now();
        let id = svix_ksuid::Ksuid::new(None, None).to_string();
        let session = Arc::new(Mutex::new(Session::default()));

        let mut inner = self.inner.write().await;
        let before = inner.len();
        inner.retain(|_, entry| now - entry.last_seen < self.idle);
        if inner.len() < before {
            log::debug!("Dropped {} idle sessions", before - inner.len());
        }
        inner.insert(
            id.clone(),
            Entry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        (id, session)
    }

    pub async fn remove(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.inner
            .write()
            .await
            .remove(id)
            .map(|entry| entry.session)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn from_jar(&self, jar: &CookieJar) -> Option<Arc<Mutex<Session>>> {
        match jar.get(SESSION_COOKIE) {
            Some(cookie) => self.get(cookie.value()).await,
            None => None,
        }
    }

    /// Returns the session named by the cookie, starting a new one (and
    /// setting the cookie) when there is none.
    pub async fn resolve(&self, jar: CookieJar, secure: bool) -> (CookieJar, Arc<Mutex<Session>>) {
        if let Some(session) = self.from_jar(&jar).await {
            return (jar, session);
        }

        let (id, session) = self.create().await;
        let jar = jar.add(
            Cookie::build(SESSION_COOKIE, id)
                .path("/")
                .http_only(true)
                .secure(secure)
                .finish(),
        );
        (jar, session)
    }

    /// Signs the cookie's session out, forgets it and clears the cookie.
    pub async fn end(&self, jar: CookieJar) -> CookieJar {
        let Some(id) = jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string()) else {
            return jar;
        };
        if let Some(session) = self.remove(&id).await {
            session.lock().await.sign_out();
        }

        jar.remove(Cookie::build(SESSION_COOKIE, "").path("/").finish())
    }
}
