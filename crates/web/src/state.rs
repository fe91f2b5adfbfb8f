use std::sync::Arc;

use api::Api;
use chrono::Duration;

use crate::{config::Config, session::Sessions};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn Api>,
    pub config: Config,
    pub sessions: Arc<Sessions>,
}

impl AppState {
    pub fn new(api: Arc<dyn Api>, config: Config) -> Self {
        let idle = Duration::minutes(config.web.session_idle_minutes);
        AppState {
            api,
            config,
            sessions: Arc::new(Sessions::new(idle)),
        }
    }
}
