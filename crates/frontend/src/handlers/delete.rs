use api::{entities::Post, Api};
use chrono::{DateTime, Utc};

use crate::{
    components::feed::Mount,
    state::{FeedState, Msg},
};

pub const DELETE_FAILED: &str = "An error occurred while deleting the post.";

/// Deletes a post upstream. On success the record leaves the list and its
/// mounted node shows the deleted placeholder; on failure only the toast
/// changes.
pub async fn handle_delete(
    api: &dyn Api,
    post_id: &str,
    token: Option<&str>,
    state: &mut FeedState,
    mount: &mut Mount,
    now: DateTime<Utc>,
) -> Option<Post> {
    if let Err(err) = api.delete_post(token, post_id).await {
        log::error!("Failed to delete post {}: {}", post_id, err);
        mount.toast.show(DELETE_FAILED, now);
        return None;
    }

    let removed = match state.update(Msg::PostDeleted {
        post_id: String::from(post_id),
    }) {
        Ok(removed) => removed,
        Err(err) => {
            log::error!("Failed to drop post {} locally: {}", post_id, err);
            None
        }
    };

    if let Some(node) = mount.node_mut(post_id) {
        node.replace_with_placeholder();
    }

    removed
}
