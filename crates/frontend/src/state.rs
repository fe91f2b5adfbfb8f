use api::{
    entities::{FavoriteAction, Like, Post, User},
    ApiError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The upstream call succeeded but the post is gone from the local list.
    #[error("post {0} not found")]
    PostNotFound(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Every change to the post list goes through one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    LikeToggled {
        post_id: String,
        action: FavoriteAction,
        user: Like,
    },
    PostDeleted {
        post_id: String,
    },
}

#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl FeedState {
    pub fn new(posts: Vec<Post>, user: Option<User>, token: Option<String>) -> Self {
        FeedState { posts, user, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|user| !user.id.is_empty())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    /// Applies a message and returns the record it touched: the updated post
    /// for a like change, the removed one for a deletion.
    pub fn update(&mut self, msg: Msg) -> Result<Option<Post>, FeedError> {
        match msg {
            Msg::LikeToggled {
                post_id,
                action,
                user,
            } => {
                let post = self
                    .posts
                    .iter_mut()
                    .find(|post| post.id == post_id)
                    .ok_or(FeedError::PostNotFound(post_id))?;

                match action {
                    FavoriteAction::Like => {
                        if !post.liked_by(&user.id) {
                            post.likes.push(user);
                        }
                        post.is_liked = true;
                    }
                    FavoriteAction::Dislike => {
                        post.likes.retain(|like| like.id != user.id);
                        post.is_liked = false;
                    }
                }

                Ok(Some(post.clone()))
            }
            Msg::PostDeleted { post_id } => {
                let removed = self
                    .posts
                    .iter()
                    .position(|post| post.id == post_id)
                    .map(|index| self.posts.remove(index));
                Ok(removed)
            }
        }
    }
}
