use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, DeliveryConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub delivery: Option<FileDeliveryConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(delivery) = self.delivery {
            delivery.merge_into(&mut config.delivery);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDeliveryConfig {
    pub log_file: Option<PathBuf>,
    pub default_sender: Option<String>,
    pub short_body_len: Option<usize>,
    pub exclude_self: Option<bool>,
}

impl FileDeliveryConfig {
    fn merge_into(self, config: &mut DeliveryConfig) {
        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }

        if let Some(default_sender) = self.default_sender {
            config.default_sender = default_sender;
        }

        if let Some(short_body_len) = self.short_body_len {
            config.short_body_len = short_body_len;
        }

        if let Some(exclude_self) = self.exclude_self {
            config.exclude_self = exclude_self;
        }
    }
}
