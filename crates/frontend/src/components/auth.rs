use api::{
    entities::{LoginRequest, RegisterRequest, User},
    Api, ApiError,
};
use serde::Deserialize;

use crate::{
    components::header::render_header,
    html::{escape, strip_tags},
};

pub const ENTER_NAME: &str = "Enter your name";
pub const ENTER_LOGIN: &str = "Enter your login";
pub const ENTER_PASSWORD: &str = "Enter your password";
pub const CHOOSE_PHOTO: &str = "Choose a photo";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Fields posted by the sign in / sign up form.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug)]
enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthPage {
    pub mode: AuthMode,
    /// Photo chosen for registration, kept across failed attempts.
    pub image_url: String,
    pub error: Option<String>,
}

impl AuthPage {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.image_url.clear();
        self.error = None;
    }

    fn validate(&self, form: AuthForm) -> Result<AuthRequest, &'static str> {
        match self.mode {
            AuthMode::Login => {
                if form.login.is_empty() {
                    return Err(ENTER_LOGIN);
                }
                if form.password.is_empty() {
                    return Err(ENTER_PASSWORD);
                }
                Ok(AuthRequest::Login(LoginRequest {
                    login: form.login,
                    password: form.password,
                }))
            }
            AuthMode::Register => {
                let name = strip_tags(&form.name);
                let login = strip_tags(&form.login);
                let password = strip_tags(&form.password);

                if name.is_empty() {
                    return Err(ENTER_NAME);
                }
                if login.is_empty() {
                    return Err(ENTER_LOGIN);
                }
                if password.is_empty() {
                    return Err(ENTER_PASSWORD);
                }
                if form.image_url.is_empty() {
                    return Err(CHOOSE_PHOTO);
                }
                Ok(AuthRequest::Register(RegisterRequest {
                    login,
                    password,
                    name,
                    image_url: Some(form.image_url),
                }))
            }
        }
    }

    /// Signs in or registers. Invalid input never reaches the API; failures
    /// end up in [`AuthPage::error`].
    pub async fn submit(&mut self, api: &dyn Api, form: AuthForm) -> Option<User> {
        self.error = None;
        if self.mode == AuthMode::Register {
            self.image_url = form.image_url.clone();
        }

        let request = match self.validate(form) {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(String::from(message));
                return None;
            }
        };

        let result = match &request {
            AuthRequest::Login(form) => api.login_user(form).await,
            AuthRequest::Register(form) => api.register_user(form).await,
        };

        match result {
            Ok(user) => Some(user),
            Err(ApiError::Login(err)) => {
                log::warn!("Login failed: {}", err);
                self.error = Some(err.message);
                None
            }
            Err(ApiError::Register(err)) => {
                log::warn!("Registration failed: {}", err);
                self.error = Some(err.error);
                None
            }
            Err(err) => {
                log::error!("Authentication request failed: {}", err);
                self.error = Some(err.to_string());
                None
            }
        }
    }

    pub fn to_html(&self) -> String {
        let is_login = self.mode == AuthMode::Login;
        let (title, submit, footer, toggle) = if is_login {
            ("Sign in to&nbsp;Instapro", "Sign in", "No account?", "Sign up.")
        } else {
            ("Sign up to&nbsp;Instapro", "Sign up", "Already have an account?", "Sign in.")
        };
        let register_inputs = if is_login {
            String::new()
        } else {
            format!(
                r#"<input type="url" name="image_url" class="input" placeholder="Photo URL" value="{}" /><input type="text" name="name" class="input" placeholder="Name" />"#,
                escape(&self.image_url)
            )
        };

        format!(
            r#"<div class="page-container"><div class="header-container">{header}</div><div class="form"><h3 class="form-title">{title}</h3><form method="post" action="/auth" class="form-inputs">{register_inputs}<input type="text" name="login" class="input" placeholder="Login" /><input type="password" name="password" class="input" placeholder="Password" /><div class="form-error">{error}</div><button class="button" id="login-button">{submit}</button></form><div class="form-footer"><form method="post" action="/auth/toggle"><p class="form-footer-title">{footer} <button class="link-button" id="toggle-button">{toggle}</button></p></form></div></div></div>"#,
            header = render_header(None),
            error = self.error.as_deref().map(escape).unwrap_or_default(),
        )
    }
}
