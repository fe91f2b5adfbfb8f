use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub name: String,
}

// https://wedev-api.sky.pro/api/v1/:key/instapro
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub image_url: String,
    pub user: PostAuthor,
    /// Ordered by the time each like was given.
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.id == user_id)
    }

    pub fn owned_by(&self, user_id: &str) -> bool {
        self.user.id == user_id
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct PostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PostResponse {
    pub post: Post,
}
