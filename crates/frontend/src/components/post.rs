use std::{fmt, str::FromStr};

use api::entities::{FavoriteAction, Like, Post};
use chrono::{DateTime, Utc};

use crate::{date::format_relative, html::escape};

pub const LIKE_ACTIVE_ICON: &str = "/assets/images/like-active.svg";
pub const LIKE_INACTIVE_ICON: &str = "/assets/images/like-not-active.svg";

/// Clickable parts of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Author,
    Like,
    Delete,
}

impl ClickTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickTarget::Author => "author",
            ClickTarget::Like => "like",
            ClickTarget::Delete => "delete",
        }
    }

    pub fn action_path(&self, post_id: &str) -> String {
        format!("/feed/{}/{}", escape(post_id), self.as_str())
    }
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClickTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(ClickTarget::Author),
            "like" => Ok(ClickTarget::Like),
            "delete" => Ok(ClickTarget::Delete),
            other => Err(format!("unknown click target: {other}")),
        }
    }
}

pub fn likes_summary(likes: &[Like]) -> String {
    match likes {
        [] => String::from("no likes"),
        [first] => format!("Liked by {}", escape(&first.name)),
        [first, second] => format!(
            "Liked by {} and {}",
            escape(&first.name),
            escape(&second.name)
        ),
        [first, second, rest @ ..] => format!(
            "Liked by {}, {} and {} more",
            escape(&first.name),
            escape(&second.name),
            rest.len()
        ),
    }
}

fn like_icon(action: FavoriteAction) -> &'static str {
    match action {
        FavoriteAction::Dislike => LIKE_ACTIVE_ICON,
        FavoriteAction::Like => LIKE_INACTIVE_ICON,
    }
}

/// A rendered post. The like button and summary are kept apart from the rest
/// of the markup so they can be patched in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostView {
    pub post_id: String,
    pub author_id: String,
    header: String,
    image: String,
    pub like_action: FavoriteAction,
    pub likes_text: String,
    body: String,
    pub can_delete: bool,
}

pub fn render_post(
    post: &Post,
    current_user_id: Option<&str>,
    is_authenticated: bool,
    now: DateTime<Utc>,
) -> PostView {
    let author_name = escape(&post.user.name);

    let header = format!(
        r#"<button class="post-header" data-user-id="{}" formaction="{}"><img src="{}" class="post-header__user-image"><span class="post-header__user-name">{}</span></button>"#,
        escape(&post.user.id),
        ClickTarget::Author.action_path(&post.id),
        escape(&post.user.image_url),
        author_name,
    );
    let image = format!(
        r#"<div class="post-image-container"><img class="post-image" src="{}"></div>"#,
        escape(&post.image_url)
    );
    let body = format!(
        r#"<p class="post-text"><span class="user-name">{}</span> {}</p><p class="post-date">{}</p>"#,
        author_name,
        escape(&post.description),
        format_relative(post.created_at, now),
    );

    PostView {
        post_id: post.id.clone(),
        author_id: post.user.id.clone(),
        header,
        image,
        like_action: FavoriteAction::for_liked(post.is_liked),
        likes_text: likes_summary(&post.likes),
        body,
        can_delete: is_authenticated && current_user_id.is_some_and(|id| post.owned_by(id)),
    }
}

/// Markup for a single post.
pub fn render_post_html(
    post: &Post,
    current_user_id: Option<&str>,
    is_authenticated: bool,
    now: DateTime<Utc>,
) -> String {
    render_post(post, current_user_id, is_authenticated, now).to_html()
}

impl PostView {
    /// Rewrites the like button and the summary text, nothing else.
    pub fn update_likes(&mut self, is_liked: bool, likes: &[Like]) {
        self.like_action = FavoriteAction::for_liked(is_liked);
        self.likes_text = likes_summary(likes);
    }

    pub fn like_icon(&self) -> &'static str {
        like_icon(self.like_action)
    }

    pub fn to_html(&self) -> String {
        let delete_button = if self.can_delete {
            format!(
                r#"<button class="delete-button" formaction="{}">-</button>"#,
                ClickTarget::Delete.action_path(&self.post_id)
            )
        } else {
            String::new()
        };

        format!(
            r#"<div class="post" data-post-id="{id}">{header}{image}<div class="post-likes"><button data-set-favorite="{action}" class="like-button" formaction="{like_path}"><img src="{icon}"></button><p class="post-likes-text">{likes}</p></div>{body}{delete_button}</div>"#,
            id = escape(&self.post_id),
            header = self.header,
            image = self.image,
            action = self.like_action,
            like_path = ClickTarget::Like.action_path(&self.post_id),
            icon = self.like_icon(),
            likes = self.likes_text,
            body = self.body,
            delete_button = delete_button,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::state::tests::post;

    fn likes(names: &[&str]) -> Vec<Like> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Like {
                id: i.to_string(),
                name: (*name).into(),
            })
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap()
    }

    #[test]
    fn summary_by_count() {
        assert_eq!(likes_summary(&likes(&[])), "no likes");
        assert_eq!(likes_summary(&likes(&["A"])), "Liked by A");
        assert_eq!(likes_summary(&likes(&["A", "B"])), "Liked by A and B");
        assert_eq!(
            likes_summary(&likes(&["A", "B", "C"])),
            "Liked by A, B and 1 more"
        );
        assert_eq!(
            likes_summary(&likes(&["A", "B", "C", "D", "E"])),
            "Liked by A, B and 3 more"
        );
    }

    #[test]
    fn free_text_is_escaped() {
        let mut post = post("1", "a", &[("x", "<i>'x'</i>")]);
        post.user.name = r#"<script>"evil" & co</script>"#.into();
        post.description = "<img src=x onerror='alert(1)'>".into();

        let html = render_post_html(&post, None, false, now());
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<i>"));
        assert!(!html.contains("onerror='"));
        assert!(!html.contains(r#""evil""#));
        assert!(!html.contains(" & co"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn like_button_reflects_state() {
        let mut post = post("1", "a", &[]);
        let html = render_post_html(&post, None, false, now());
        assert!(html.contains(r#"data-set-favorite="like""#));
        assert!(html.contains(LIKE_INACTIVE_ICON));

        post.is_liked = true;
        let html = render_post_html(&post, None, false, now());
        assert!(html.contains(r#"data-set-favorite="dislike""#));
        assert!(html.contains(LIKE_ACTIVE_ICON));
    }

    #[test]
    fn delete_button_only_for_owner() {
        let post = post("1", "a", &[]);
        assert!(render_post(&post, Some("a"), true, now()).can_delete);
        assert!(!render_post(&post, Some("b"), true, now()).can_delete);
        assert!(!render_post(&post, Some("a"), false, now()).can_delete);
        assert!(!render_post(&post, None, false, now()).can_delete);

        let html = render_post_html(&post, Some("a"), true, now());
        assert!(html.contains(r#"class="delete-button" formaction="/feed/1/delete""#));
    }

    #[test]
    fn renders_author_image_and_date() {
        let post = post("1", "a", &[]);
        let html = render_post_html(&post, None, false, now());
        assert!(html.contains(r#"data-user-id="a""#));
        assert!(html.contains(r#"formaction="/feed/1/author""#));
        assert!(html.contains("https://img.example/1.jpg"));
        assert!(html.contains(r#"<p class="post-date">about 1 hour ago</p>"#));
        assert!(html.contains("post 1"));
    }

    #[test]
    fn incremental_update_only_touches_likes() {
        let post = post("1", "a", &[]);
        let mut view = render_post(&post, Some("a"), true, now());
        let before = view.clone();

        view.update_likes(
            true,
            &[Like {
                id: "u1".into(),
                name: "Anna".into(),
            }],
        );

        assert_eq!(view.like_action, FavoriteAction::Dislike);
        assert_eq!(view.like_icon(), LIKE_ACTIVE_ICON);
        assert_eq!(view.likes_text, "Liked by Anna");
        assert_eq!(view.header, before.header);
        assert_eq!(view.image, before.image);
        assert_eq!(view.body, before.body);
        assert_eq!(view.can_delete, before.can_delete);
    }

    #[test]
    fn click_targets_parse() {
        assert_eq!("like".parse::<ClickTarget>(), Ok(ClickTarget::Like));
        assert_eq!(ClickTarget::Author.action_path("7"), "/feed/7/author");
        assert!("share".parse::<ClickTarget>().is_err());
    }
}
