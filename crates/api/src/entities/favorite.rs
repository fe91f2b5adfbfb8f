use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteAction {
    Like,
    Dislike,
}

impl FavoriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteAction::Like => "like",
            FavoriteAction::Dislike => "dislike",
        }
    }

    /// The action a like button offers for a post in the given state.
    pub fn for_liked(is_liked: bool) -> Self {
        if is_liked {
            FavoriteAction::Dislike
        } else {
            FavoriteAction::Like
        }
    }
}

impl fmt::Display for FavoriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(FavoriteAction::Like),
            "dislike" => Ok(FavoriteAction::Dislike),
            other => Err(format!("unknown favorite action: {other}")),
        }
    }
}
