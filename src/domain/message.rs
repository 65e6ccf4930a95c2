use std::fmt;

use chrono::NaiveDate;

use crate::domain::{
    address::EmailAddress,
    status::MessageStatus,
    text::{clean_text, preview},
};

/// Default preview length used by [`Message::prepare`].
pub const DEFAULT_SHORT_BODY_LEN: usize = 10;

/// Recipient list accepted by [`Message::new`]: one address or many.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipients(Vec<EmailAddress>);

impl From<EmailAddress> for Recipients {
    fn from(address: EmailAddress) -> Self {
        Self(vec![address])
    }
}

impl From<Vec<EmailAddress>> for Recipients {
    fn from(addresses: Vec<EmailAddress>) -> Self {
        Self(addresses)
    }
}

impl<const N: usize> From<[EmailAddress; N]> for Recipients {
    fn from(addresses: [EmailAddress; N]) -> Self {
        Self(addresses.into())
    }
}

impl FromIterator<EmailAddress> for Recipients {
    fn from_iter<I: IntoIterator<Item = EmailAddress>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub subject: String,
    pub body: String,
    pub sender: EmailAddress,
    pub recipients: Vec<EmailAddress>,
    pub send_date: Option<NaiveDate>,
    pub short_body: Option<String>,
    pub status: MessageStatus,
}

impl Message {
    /// Builds a draft. No validation happens here; see [`Message::prepare`].
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        sender: EmailAddress,
        recipients: impl Into<Recipients>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            sender,
            recipients: recipients.into().0,
            send_date: None,
            short_body: None,
            status: MessageStatus::Draft,
        }
    }

    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }

    pub fn recipients_as_text(&self) -> String {
        self.recipients
            .iter()
            .map(EmailAddress::address)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn clean_text(&mut self) -> &mut Self {
        self.subject = clean_text(&self.subject);
        self.body = clean_text(&self.body);
        self
    }

    pub fn compute_short_body(&mut self, max_chars: usize) -> &mut Self {
        self.short_body = Some(preview(&self.body, max_chars));
        self
    }

    /// Subject and body are non-blank and there is at least one recipient.
    /// The sender is always present by construction.
    pub fn is_valid(&self) -> bool {
        !self.subject.trim().is_empty()
            && !self.body.trim().is_empty()
            && !self.recipients.is_empty()
    }

    pub fn prepare(&mut self) -> &mut Self {
        self.prepare_with(DEFAULT_SHORT_BODY_LEN)
    }

    /// Cleans text, computes the preview and moves the message to `Ready`
    /// or `Invalid`.
    pub fn prepare_with(&mut self, short_body_len: usize) -> &mut Self {
        self.clean_text().compute_short_body(short_body_len);
        self.status = if self.is_valid() {
            MessageStatus::Ready
        } else {
            MessageStatus::Invalid
        };
        self
    }

    /// Independent copy addressed to a single recipient.
    pub fn delivery_copy(
        &self,
        recipient: &EmailAddress,
        send_date: NaiveDate,
        status: MessageStatus,
    ) -> Self {
        Self {
            subject: self.subject.clone(),
            body: self.body.clone(),
            sender: self.sender.clone(),
            recipients: vec![recipient.clone()],
            send_date: Some(send_date),
            short_body: self.short_body.clone(),
            status,
        }
    }

    /// Human-readable letter text: addressee line, subject line, preview.
    pub fn sent_text(&self) -> String {
        let date = self
            .send_date
            .map(|date| date.to_string())
            .unwrap_or_default();
        let preview = self.short_body.as_deref().unwrap_or(&self.body);

        format!(
            "Кому: {}, от {}\nТема: {}, дата {}\n{}",
            self.recipients_as_text(),
            self.sender,
            self.subject,
            date,
            preview
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message(subject='{}', from={}, to=[{}], status={})",
            self.subject,
            self.sender.masked(),
            self.recipients_as_text(),
            self.status
        )
    }
}
