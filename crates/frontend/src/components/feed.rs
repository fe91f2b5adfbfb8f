use api::{
    entities::{FavoriteAction, Post, User},
    Api,
};
use chrono::{DateTime, Utc};

use crate::{
    components::{
        header::render_header,
        post::{render_post, ClickTarget, PostView},
    },
    handlers::{handle_delete, handle_like},
    html::escape,
    routes::Route,
    state::FeedState,
    toast::Toast,
};

pub const LIKE_AUTH_REQUIRED: &str = "You must be authenticated to like a post.";
pub const DELETE_AUTH_REQUIRED: &str = "You must be authenticated to delete a post.";
pub const LIKE_FAILED: &str = "An error occurred while liking the post.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeContent {
    Post(PostView),
    Deleted,
}

/// One list item of a mounted feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostNode {
    pub post_id: String,
    pub content: NodeContent,
}

impl PostNode {
    pub fn view(&self) -> Option<&PostView> {
        match &self.content {
            NodeContent::Post(view) => Some(view),
            NodeContent::Deleted => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut PostView> {
        match &mut self.content {
            NodeContent::Post(view) => Some(view),
            NodeContent::Deleted => None,
        }
    }

    /// The item stays in the list, only its content goes.
    pub fn replace_with_placeholder(&mut self) {
        self.content = NodeContent::Deleted;
    }

    pub fn to_html(&self) -> String {
        let content = match &self.content {
            NodeContent::Post(view) => view.to_html(),
            NodeContent::Deleted => String::from(r#"<p class="tooltip">Post deleted</p>"#),
        };
        format!(
            r#"<li class="post-item" data-post-id="{}">{}</li>"#,
            escape(&self.post_id),
            content
        )
    }
}

/// What a feed page currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mount {
    pub header: String,
    pub items: Vec<PostNode>,
    pub toast: Toast,
}

impl Mount {
    pub fn node(&self, post_id: &str) -> Option<&PostNode> {
        self.items.iter().find(|node| node.post_id == post_id)
    }

    pub fn node_mut(&mut self, post_id: &str) -> Option<&mut PostNode> {
        self.items.iter_mut().find(|node| node.post_id == post_id)
    }

    pub fn to_html(&self, now: DateTime<Utc>) -> String {
        let items: String = self.items.iter().map(PostNode::to_html).collect();
        format!(
            r#"<div class="page-container"><div class="header-container">{}</div><form method="post" class="posts-form"><ul class="posts">{}</ul></form>{}</div>"#,
            self.header,
            items,
            self.toast.to_html(now)
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Click {
    pub post_id: String,
    pub target: ClickTarget,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The page stays, re-serialize the mount.
    Render,
    Navigate(Route),
}

/// A mounted feed: the post list and the view rendered from it.
#[derive(Clone, Debug)]
pub struct FeedPage {
    pub state: FeedState,
    pub mount: Mount,
}

impl FeedPage {
    pub fn mount(
        posts: Vec<Post>,
        user: Option<User>,
        token: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let state = FeedState::new(posts, user, token);
        let is_authenticated = state.is_authenticated();
        let items = state
            .posts
            .iter()
            .map(|post| PostNode {
                post_id: post.id.clone(),
                content: NodeContent::Post(render_post(
                    post,
                    state.user_id(),
                    is_authenticated,
                    now,
                )),
            })
            .collect();

        let mount = Mount {
            header: render_header(state.user.as_ref()),
            items,
            toast: Toast::default(),
        };

        FeedPage { state, mount }
    }

    /// Handles a click on one part of a post. Only the clicked target reacts;
    /// a click on the like or delete button never reaches the author header.
    pub async fn click(&mut self, api: &dyn Api, click: Click, now: DateTime<Utc>) -> Outcome {
        self.mount.toast.tick(now);

        let Some(view) = self.mount.node(&click.post_id).and_then(PostNode::view) else {
            log::debug!("Click on {} of missing post {}", click.target, click.post_id);
            return Outcome::Render;
        };

        match click.target {
            ClickTarget::Author => Outcome::Navigate(Route::UserPosts {
                user_id: view.author_id.clone(),
            }),
            ClickTarget::Like => {
                self.like(api, &click.post_id, now).await;
                Outcome::Render
            }
            ClickTarget::Delete => {
                let can_delete = view.can_delete;
                self.delete(api, &click.post_id, can_delete, now).await;
                Outcome::Render
            }
        }
    }

    fn authenticated_user(&self) -> Option<User> {
        self.state
            .user
            .clone()
            .filter(|_| self.state.is_authenticated())
    }

    async fn like(&mut self, api: &dyn Api, post_id: &str, now: DateTime<Utc>) {
        let Some(user) = self.authenticated_user() else {
            self.mount.toast.show(LIKE_AUTH_REQUIRED, now);
            return;
        };
        let Some(post) = self.state.post(post_id) else {
            log::warn!("Like on post {} which is no longer listed", post_id);
            return;
        };

        let action = FavoriteAction::for_liked(post.is_liked);
        let token = self.state.token.clone();
        match handle_like(api, &user, post_id, action, token.as_deref(), &mut self.state).await {
            Ok(post) => {
                if let Some(view) = self.mount.node_mut(post_id).and_then(PostNode::view_mut) {
                    view.update_likes(post.is_liked, &post.likes);
                }
            }
            Err(err) => {
                log::error!("Like on post {} failed: {}", post_id, err);
                self.mount.toast.show(LIKE_FAILED, now);
            }
        }
    }

    async fn delete(
        &mut self,
        api: &dyn Api,
        post_id: &str,
        can_delete: bool,
        now: DateTime<Utc>,
    ) {
        if self.authenticated_user().is_none() {
            self.mount.toast.show(DELETE_AUTH_REQUIRED, now);
            return;
        }
        // Only the owner gets a delete button.
        if !can_delete {
            log::warn!(
                "Delete of post {} refused for non-owner {:?}",
                post_id,
                self.state.user_id()
            );
            return;
        }

        let token = self.state.token.clone();
        handle_delete(
            api,
            post_id,
            token.as_deref(),
            &mut self.state,
            &mut self.mount,
            now,
        )
        .await;
    }

    pub fn to_html(&self, now: DateTime<Utc>) -> String {
        self.mount.to_html(now)
    }
}
