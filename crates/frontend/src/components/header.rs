use api::entities::User;

use crate::{html::escape, routes::Route};

pub fn render_header(user: Option<&User>) -> String {
    let actions = match user {
        Some(user) => format!(
            r#"<a class="header-button add-or-login-button" href="{}" title="Add a post"><div class="add-post-sign"></div></a><form method="post" action="/logout"><button class="header-button logout-button" title="Log out">{}</button></form>"#,
            Route::AddPost.path(),
            escape(&user.name)
        ),
        None => format!(
            r#"<a class="header-button add-or-login-button" href="{}">Sign in</a>"#,
            Route::Auth.path()
        ),
    };

    format!(
        r#"<div class="page-header"><a class="logo" href="{}">instapro</a>{}</div>"#,
        Route::Posts.path(),
        actions
    )
}
