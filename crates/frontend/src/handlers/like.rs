use api::{
    entities::{FavoriteAction, Post, User},
    Api,
};

use crate::state::{FeedError, FeedState, Msg};

/// Sends the like or unlike upstream, then applies it to the local record.
///
/// Nothing changes locally if the upstream call fails. A post that vanished
/// from the local list in the meantime is reported as
/// [`FeedError::PostNotFound`].
pub async fn handle_like(
    api: &dyn Api,
    user: &User,
    post_id: &str,
    action: FavoriteAction,
    token: Option<&str>,
    state: &mut FeedState,
) -> Result<Post, FeedError> {
    if let Err(err) = api.toggle_favorite(token, post_id, action).await {
        log::error!("Failed to {} post {}: {}", action, post_id, err);
        return Err(err.into());
    }

    state
        .update(Msg::LikeToggled {
            post_id: String::from(post_id),
            action,
            user: user.as_like(),
        })?
        .ok_or_else(|| FeedError::PostNotFound(String::from(post_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::fake::FakeApi,
        state::tests::{post, user},
    };

    #[tokio::test]
    async fn like_adds_viewer() {
        let api = FakeApi::default();
        let anna = user("u1", "Anna");
        let mut state = FeedState::new(vec![post("1", "a", &[])], Some(anna.clone()), None);

        let updated = handle_like(&api, &anna, "1", FavoriteAction::Like, Some("t"), &mut state)
            .await
            .unwrap();

        assert_eq!(updated.likes, vec![anna.as_like()]);
        assert!(updated.is_liked);
        assert_eq!(state.posts[0], updated);
        assert_eq!(api.calls(), vec!["like 1"]);
    }

    #[tokio::test]
    async fn failure_leaves_state_untouched() {
        let api = FakeApi::failing();
        let anna = user("u1", "Anna");
        let original = post("1", "a", &[("x", "Xena")]);
        let mut state = FeedState::new(vec![original.clone()], Some(anna.clone()), None);

        let result =
            handle_like(&api, &anna, "1", FavoriteAction::Like, None, &mut state).await;

        assert!(matches!(result, Err(FeedError::Api(_))));
        assert_eq!(state.posts, vec![original]);
    }

    #[tokio::test]
    async fn missing_post_is_reported() {
        let api = FakeApi::default();
        let anna = user("u1", "Anna");
        let mut state = FeedState::new(vec![], Some(anna.clone()), None);

        let result =
            handle_like(&api, &anna, "9", FavoriteAction::Dislike, None, &mut state).await;

        assert!(matches!(result, Err(FeedError::PostNotFound(id)) if id == "9"));
        assert_eq!(api.calls(), vec!["dislike 9"]);
    }
}
