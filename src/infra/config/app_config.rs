use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::message::DEFAULT_SHORT_BODY_LEN;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryConfig {
    /// Append-only file receiving one line per delivered copy.
    pub log_file: PathBuf,
    /// Sender used when none is given on the command line.
    pub default_sender: String,
    pub short_body_len: usize,
    /// Drop recipients equal to the sender before dispatch.
    pub exclude_self: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("send.log"),
            default_sender: "default@study.com".to_owned(),
            short_body_len: DEFAULT_SHORT_BODY_LEN,
            exclude_self: true,
        }
    }
}
