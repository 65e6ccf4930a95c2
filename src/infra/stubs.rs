//! Test doubles for the ports in `usecases::contracts` and `infra::contracts`.

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter, error::AppError},
    usecases::contracts::{Clock, DeliveryLog},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// In-memory delivery log that records every appended line.
#[derive(Debug, Default)]
pub struct MemoryDeliveryLog {
    pub lines: RefCell<Vec<String>>,
    pub fail_with: Option<std::io::ErrorKind>,
}

impl MemoryDeliveryLog {
    pub fn failing(kind: std::io::ErrorKind) -> Self {
        Self {
            lines: RefCell::new(Vec::new()),
            fail_with: Some(kind),
        }
    }
}

impl DeliveryLog for MemoryDeliveryLog {
    fn append(&self, lines: &[String]) -> Result<(), AppError> {
        if let Some(kind) = self.fail_with {
            return Err(AppError::DeliveryLogWrite {
                path: "memory".into(),
                source: std::io::Error::from(kind),
            });
        }

        self.lines.borrow_mut().extend_from_slice(lines);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn memory_log_collects_lines() {
        let log = MemoryDeliveryLog::default();

        log.append(&["a".to_owned()]).expect("append must succeed");
        log.append(&["b".to_owned()]).expect("append must succeed");

        assert_eq!(*log.lines.borrow(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn failing_memory_log_keeps_nothing() {
        let log = MemoryDeliveryLog::failing(std::io::ErrorKind::PermissionDenied);

        assert!(log.append(&["a".to_owned()]).is_err());
        assert!(log.lines.borrow().is_empty());
    }
}
