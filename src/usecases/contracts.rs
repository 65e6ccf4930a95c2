use chrono::NaiveDate;
use thiserror::Error;

use crate::{domain::message::Message, infra::error::AppError};

/// Source of the calendar date stamped on delivery copies.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Copies were produced but recording them failed. The copies are
    /// handed back so the caller does not lose them.
    #[error("{} copies produced but not logged: {}", .copies.len(), .source)]
    LogFailed {
        copies: Vec<Message>,
        #[source]
        source: AppError,
    },
}

impl DispatchError {
    /// Delivery copies produced before the failure.
    pub fn into_copies(self) -> Vec<Message> {
        match self {
            Self::LogFailed { copies, .. } => copies,
        }
    }
}

/// Turns one message into one delivery copy per recipient.
///
/// Implementations never mutate the message they are given.
pub trait Dispatcher {
    fn send(&self, message: &Message) -> Result<Vec<Message>, DispatchError>;
}

impl<T: Dispatcher + ?Sized> Dispatcher for &T {
    fn send(&self, message: &Message) -> Result<Vec<Message>, DispatchError> {
        (*self).send(message)
    }
}

/// Append-only text sink for delivery records.
pub trait DeliveryLog {
    /// Appends `lines` in order, each terminated by a newline.
    fn append(&self, lines: &[String]) -> Result<(), AppError>;
}

impl<T: DeliveryLog + ?Sized> DeliveryLog for &T {
    fn append(&self, lines: &[String]) -> Result<(), AppError> {
        (*self).append(lines)
    }
}
