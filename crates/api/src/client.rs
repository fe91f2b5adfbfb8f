use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::{
    entities::{
        post::{PostResponse, PostsResponse},
        user::UserResponse,
        FavoriteAction, LoginRequest, Post, RegisterRequest, User,
    },
    error::{ApiError, LoginError, RegisterError},
};

/// Upstream Instapro API as seen by the client.
#[async_trait]
pub trait Api: Send + Sync {
    async fn posts(&self, token: Option<&str>) -> Result<Vec<Post>, ApiError>;

    async fn user_posts(&self, token: Option<&str>, user_id: &str)
        -> Result<Vec<Post>, ApiError>;

    /// Likes or unlikes a post. Repeating the same action is harmless upstream.
    async fn toggle_favorite(
        &self,
        token: Option<&str>,
        post_id: &str,
        action: FavoriteAction,
    ) -> Result<Post, ApiError>;

    async fn delete_post(&self, token: Option<&str>, post_id: &str) -> Result<(), ApiError>;

    async fn login_user(&self, form: &LoginRequest) -> Result<User, ApiError>;

    async fn register_user(&self, form: &RegisterRequest) -> Result<User, ApiError>;
}

pub struct HttpApi {
    client: Client,
    posts_url: String,
    user_url: String,
}

impl HttpApi {
    pub fn new(base_url: &Url, personal_key: &str) -> Result<Self, ApiError> {
        let base = base_url.as_str().trim_end_matches('/');
        let posts_url = format!("{}/api/v1/{}/instapro", base, personal_key);
        let user_url = format!("{}/api/user", base);
        // both must stay valid once ids are appended
        Url::parse(&posts_url)?;
        Url::parse(&user_url)?;

        Ok(HttpApi {
            client: Client::new(),
            posts_url,
            user_url,
        })
    }

    fn post_url(&self, post_id: &str, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => format!("{}/{}/{}", self.posts_url, post_id, suffix),
            None => format!("{}/{}", self.posts_url, post_id),
        }
    }

    fn authorized(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
        }
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn posts(&self, token: Option<&str>) -> Result<Vec<Post>, ApiError> {
        let request = Self::authorized(self.client.get(&self.posts_url), token);
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<PostsResponse>().await?.posts)
    }

    async fn user_posts(
        &self,
        token: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<Post>, ApiError> {
        let url = self.post_url("user-posts", Some(user_id));
        let request = Self::authorized(self.client.get(url), token);
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<PostsResponse>().await?.posts)
    }

    async fn toggle_favorite(
        &self,
        token: Option<&str>,
        post_id: &str,
        action: FavoriteAction,
    ) -> Result<Post, ApiError> {
        let url = self.post_url(post_id, Some(action.as_str()));
        log::debug!("{} post {}", action, post_id);
        let request = Self::authorized(self.client.post(url), token);
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<PostResponse>().await?.post)
    }

    async fn delete_post(&self, token: Option<&str>, post_id: &str) -> Result<(), ApiError> {
        let url = self.post_url(post_id, None);
        let request = Self::authorized(self.client.delete(url), token);
        Self::check(request.send().await?).await?;
        Ok(())
    }

    async fn login_user(&self, form: &LoginRequest) -> Result<User, ApiError> {
        let url = format!("{}/login", self.user_url);
        let response = self.client.post(url).json(form).send().await?;
        if response.status() == StatusCode::BAD_REQUEST {
            return Err(ApiError::Login(LoginError::wrong_credentials()));
        }
        let response = Self::check(response).await?;
        Ok(response.json::<UserResponse>().await?.user)
    }

    async fn register_user(&self, form: &RegisterRequest) -> Result<User, ApiError> {
        let response = self.client.post(&self.user_url).json(form).send().await?;
        if response.status() == StatusCode::BAD_REQUEST {
            let body = response.text().await?;
            return Err(ApiError::Register(RegisterError::from_body(&body)));
        }
        let response = Self::check(response).await?;
        Ok(response.json::<UserResponse>().await?.user)
    }
}
