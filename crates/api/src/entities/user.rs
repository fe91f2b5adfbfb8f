use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Like;

/// The signed-in viewer, as returned by the login and registration endpoints.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub token: String,
}

impl User {
    pub fn as_like(&self) -> Like {
        Like {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct UserResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_comes_from_underscore_field() {
        let user: User = serde_json::from_str(
            r#"{"_id": "u1", "name": "Anna", "login": "anna", "imageUrl": "", "token": "t"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(
            user.as_like(),
            Like {
                id: "u1".into(),
                name: "Anna".into()
            }
        );
    }

    #[test]
    fn register_request_skips_missing_image() {
        let body = RegisterRequest {
            login: "anna".into(),
            password: "secret".into(),
            name: "Anna".into(),
            image_url: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("imageUrl").is_none());
        assert_eq!(json["login"], "anna");
    }
}
