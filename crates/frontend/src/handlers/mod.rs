pub mod delete;
pub mod like;

pub use delete::handle_delete;
pub use like::handle_like;

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use api::{
        entities::{FavoriteAction, LoginRequest, Post, RegisterRequest, User},
        error::{LoginError, RegisterError},
        Api, ApiError, StatusCode,
    };
    use async_trait::async_trait;

    /// In-memory upstream that records every call it receives.
    #[derive(Default)]
    pub struct FakeApi {
        pub fail: bool,
        pub calls: Mutex<Vec<String>>,
        pub user: Option<User>,
    }

    impl FakeApi {
        pub fn failing() -> Self {
            FakeApi {
                fail: true,
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "upstream down"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl Api for FakeApi {
        async fn posts(&self, _token: Option<&str>) -> Result<Vec<Post>, ApiError> {
            self.record(String::from("posts"))?;
            Ok(vec![])
        }

        async fn user_posts(
            &self,
            _token: Option<&str>,
            user_id: &str,
        ) -> Result<Vec<Post>, ApiError> {
            self.record(format!("user_posts {user_id}"))?;
            Ok(vec![])
        }

        async fn toggle_favorite(
            &self,
            _token: Option<&str>,
            post_id: &str,
            action: FavoriteAction,
        ) -> Result<Post, ApiError> {
            self.record(format!("{action} {post_id}"))?;
            Ok(crate::state::tests::post(post_id, "remote", &[]))
        }

        async fn delete_post(&self, _token: Option<&str>, post_id: &str) -> Result<(), ApiError> {
            self.record(format!("delete {post_id}"))
        }

        async fn login_user(&self, form: &LoginRequest) -> Result<User, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("login {}", form.login));
            match (&self.user, self.fail) {
                (Some(user), false) => Ok(user.clone()),
                _ => Err(ApiError::Login(LoginError {
                    message: String::from("Wrong login or password"),
                })),
            }
        }

        async fn register_user(&self, form: &RegisterRequest) -> Result<User, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("register {}", form.login));
            match (&self.user, self.fail) {
                (Some(user), false) => Ok(user.clone()),
                _ => Err(ApiError::Register(RegisterError {
                    error: String::from("User with this login already exists"),
                })),
            }
        }
    }
}
