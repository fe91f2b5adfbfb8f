#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Posts,
    UserPosts { user_id: String },
    Auth,
    AddPost,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Posts => String::from("/"),
            Route::UserPosts { user_id } => format!("/users/{}", urlencoding::encode(user_id)),
            Route::Auth => String::from("/auth"),
            Route::AddPost => String::from("/add-post"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn paths() {
        assert_eq!(Route::Posts.path(), "/");
        assert_eq!(
            Route::UserPosts {
                user_id: "u1".into()
            }
            .path(),
            "/users/u1"
        );
        assert_eq!(Route::Auth.path(), "/auth");
    }

    #[test]
    fn user_id_is_percent_encoded() {
        let route = Route::UserPosts {
            user_id: "a/b?c#d e".into(),
        };
        assert_eq!(route.path(), "/users/a%2Fb%3Fc%23d%20e");
    }
}
