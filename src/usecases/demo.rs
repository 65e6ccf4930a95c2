//! Walkthrough of the message lifecycle, rendered as text lines.

use anyhow::Result;

use crate::{
    domain::{address::EmailAddress, message::Message, status::MessageStatus},
    usecases::contracts::Dispatcher,
};

const REJECTED_SAMPLES: [&str; 4] = [
    "userexample.com",
    "user@example.org",
    "@example.com",
    "user@.com",
];

/// Runs the demo scenarios. `plain` is used for the basic and invalid
/// message scenarios, `logging` for the final one.
pub fn run_demo(plain: &dyn Dispatcher, logging: &dyn Dispatcher) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    basic_usage(plain, &mut lines)?;
    invalid_message(plain, &mut lines)?;
    invalid_addresses(&mut lines);
    logged_delivery(logging, &mut lines)?;

    Ok(lines)
}

fn basic_usage(dispatcher: &dyn Dispatcher, lines: &mut Vec<String>) -> Result<()> {
    lines.push("== Basic usage".to_owned());

    let sender = EmailAddress::parse("alice@example.com")?;
    let recipients = [
        EmailAddress::parse("bob@example.com")?,
        EmailAddress::parse("charlie@example.ru")?,
    ];
    lines.push(format!("Sender: {sender} (masked {})", sender.masked()));

    let mut message = Message::new(
        "Quarterly Report",
        "Hello team,\n\tHere is the quarterly report.",
        sender,
        recipients,
    );
    lines.push(format!("Draft: {message}"));

    message.prepare();
    lines.push(format!("Prepared: {message}"));
    lines.push(format!(
        "Short body: {}",
        message.short_body.as_deref().unwrap_or_default()
    ));

    for copy in dispatcher.send(&message)? {
        lines.push(copy.sent_text());
        lines.push(format!("Status: {}", copy.status));
    }

    lines.push(format!(
        "Original after send: status={}, recipients={}, date={}",
        message.status,
        message.recipients.len(),
        message
            .send_date
            .map_or_else(|| "none".to_owned(), |date| date.to_string())
    ));

    Ok(())
}

fn invalid_message(dispatcher: &dyn Dispatcher, lines: &mut Vec<String>) -> Result<()> {
    lines.push("== Invalid message".to_owned());

    let mut message = Message::new(
        "",
        "Hello",
        EmailAddress::parse("alice@example.com")?,
        EmailAddress::parse("bob@example.com")?,
    );
    message.prepare();
    lines.push(format!("Prepared: {message}"));

    for copy in dispatcher.send(&message)? {
        lines.push(format!("Copy to {}: {}", copy.recipients_as_text(), copy.status));
    }

    Ok(())
}

fn invalid_addresses(lines: &mut Vec<String>) {
    lines.push("== Invalid addresses".to_owned());

    for raw in REJECTED_SAMPLES {
        if let Err(error) = EmailAddress::parse(raw) {
            lines.push(format!("{raw}: {error}"));
        }
    }
}

fn logged_delivery(dispatcher: &dyn Dispatcher, lines: &mut Vec<String>) -> Result<()> {
    lines.push("== Logged delivery".to_owned());

    let message = Message::new(
        "Test Email",
        "This is a test",
        EmailAddress::parse("alice@example.com")?,
        [
            EmailAddress::parse("bob@example.com")?,
            EmailAddress::parse("charlie@example.ru")?,
        ],
    )
    .with_status(MessageStatus::Ready);

    let copies = dispatcher.send(&message)?;
    lines.push(format!("Logged {} deliveries", copies.len()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        infra::stubs::{FixedClock, MemoryDeliveryLog},
        usecases::dispatch::{BasicDispatcher, LoggingDispatcher},
    };

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 11, 4).expect("valid date"))
    }

    #[test]
    fn demo_covers_all_scenarios() {
        let plain = BasicDispatcher::with_clock(clock());
        let log = MemoryDeliveryLog::default();
        let logging = LoggingDispatcher::new(BasicDispatcher::with_clock(clock()), &log);

        let lines = run_demo(&plain, &logging).expect("demo must run");

        let headings = [
            "== Basic usage",
            "== Invalid message",
            "== Invalid addresses",
            "== Logged delivery",
        ];
        for heading in headings {
            assert!(lines.iter().any(|line| line == heading), "missing {heading}");
        }
        let has = |expected: &str| lines.iter().any(|line| line == expected);
        assert!(has("Short body: Hello team..."));
        assert!(has("Copy to bob@example.com: failed"));
        assert!(has("Original after send: status=ready, recipients=2, date=none"));
        let rejections = lines
            .iter()
            .filter(|line| line.contains(": invalid email address: "))
            .count();
        assert_eq!(rejections, REJECTED_SAMPLES.len());
        assert_eq!(log.lines.borrow().len(), 2);
    }

    #[test]
    fn demo_stops_on_log_failure() {
        let plain = BasicDispatcher::with_clock(clock());
        let log = MemoryDeliveryLog::failing(std::io::ErrorKind::PermissionDenied);
        let logging = LoggingDispatcher::new(BasicDispatcher::with_clock(clock()), &log);

        assert!(run_demo(&plain, &logging).is_err());
    }
}
