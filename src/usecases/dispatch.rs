//! Fan-out of a prepared message into per-recipient delivery copies.
//!
//! `BasicDispatcher` produces the copies. `LoggingDispatcher` wraps any
//! dispatcher and records one line per copy in a `DeliveryLog`.

use chrono::NaiveDate;

use crate::{
    domain::message::Message,
    infra::clock::SystemClock,
    usecases::contracts::{Clock, DeliveryLog, DispatchError, Dispatcher},
};

/// Placeholder written when a copy carries no recipient.
pub const UNKNOWN_RECIPIENT: &str = "unknown";

#[derive(Debug, Clone, Default)]
pub struct BasicDispatcher<C = SystemClock> {
    clock: C,
}

impl BasicDispatcher {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> BasicDispatcher<C> {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Date stamped on copies produced now.
    pub fn send_date(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl<C: Clock> Dispatcher for BasicDispatcher<C> {
    fn send(&self, message: &Message) -> Result<Vec<Message>, DispatchError> {
        let send_date = self.send_date();
        let outcome = message.status.delivery_outcome();

        let copies: Vec<Message> = message
            .recipients
            .iter()
            .map(|recipient| message.delivery_copy(recipient, send_date, outcome))
            .collect();

        tracing::debug!(
            subject = %message.subject,
            source_status = %message.status,
            outcome = %outcome,
            copies = copies.len(),
            %send_date,
            "message dispatched"
        );

        Ok(copies)
    }
}

/// Dispatcher decorator that appends a delivery line per copy.
///
/// Copies are produced first and logged afterwards. A sink failure leaves
/// the log without the lines of that call and returns the copies inside
/// [`DispatchError::LogFailed`].
#[derive(Debug, Clone)]
pub struct LoggingDispatcher<D, L> {
    inner: D,
    log: L,
}

impl<D: Dispatcher, L: DeliveryLog> LoggingDispatcher<D, L> {
    pub fn new(inner: D, log: L) -> Self {
        Self { inner, log }
    }
}

impl<D: Dispatcher, L: DeliveryLog> Dispatcher for LoggingDispatcher<D, L> {
    fn send(&self, message: &Message) -> Result<Vec<Message>, DispatchError> {
        let copies = self.inner.send(message)?;
        let lines: Vec<String> = copies.iter().map(delivery_line).collect();

        if let Err(source) = self.log.append(&lines) {
            tracing::error!(
                error = %source,
                copies = copies.len(),
                "failed to append delivery log"
            );
            return Err(DispatchError::LogFailed { copies, source });
        }

        Ok(copies)
    }
}

/// Formats the delivery log line for one copy.
pub fn delivery_line(copy: &Message) -> String {
    let date = copy
        .send_date
        .map(|date| date.to_string())
        .unwrap_or_default();
    let recipient = copy
        .recipients
        .first()
        .map_or(UNKNOWN_RECIPIENT, |recipient| recipient.address());

    format!(
        "Date: {date}, From: {}, To: {recipient}, Subject: {}, Status: {}",
        copy.sender, copy.subject, copy.status
    )
}
