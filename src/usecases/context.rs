use crate::{infra::config::AppConfig, usecases::compose::ComposePolicy};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn compose_policy(&self) -> ComposePolicy {
        ComposePolicy {
            short_body_len: self.config.delivery.short_body_len,
            exclude_self: self.config.delivery.exclude_self,
        }
    }
}
