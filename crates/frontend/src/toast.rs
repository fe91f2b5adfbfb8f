use chrono::{DateTime, Duration, Utc};

use crate::html::escape;

pub const TOAST_SECONDS: i64 = 3;

/// Transient error overlay. A page owns exactly one; the latest message wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    pub visible: bool,
    pub message: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Toast {
    pub fn show(&mut self, message: &str, now: DateTime<Utc>) {
        self.message = String::from(message);
        self.visible = true;
        self.expires_at = Some(now + Duration::seconds(TOAST_SECONDS));
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => self.visible && now < expires_at,
            None => false,
        }
    }

    /// Hides the toast once its time is up.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.visible && !self.is_visible(now) {
            self.visible = false;
        }
    }

    pub fn to_html(&self, now: DateTime<Utc>) -> String {
        if !self.is_visible(now) {
            return String::new();
        }
        format!(
            r#"<div class="error-message" role="alert" data-expires-in="{}">{}</div>"#,
            self.remaining_ms(now),
            escape(&self.message)
        )
    }

    fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        self.expires_at
            .map(|expires_at| (expires_at - now).num_milliseconds().max(0))
            .unwrap_or(0)
    }
}
