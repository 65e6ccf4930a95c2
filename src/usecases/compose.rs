//! Use case for turning raw user input into a prepared message.
//!
//! Raw recipient strings are screened one by one: invalid entries are set
//! aside instead of aborting the whole message. The sender must be valid.

use thiserror::Error;

use crate::domain::{
    address::{EmailAddress, InvalidEmailAddress},
    message::Message,
};

/// Raw input for composing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeCommand {
    pub sender: String,
    pub recipients: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposePolicy {
    pub short_body_len: usize,
    /// Drop recipients equal to the sender.
    pub exclude_self: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("sender rejected: {0}")]
    InvalidSender(#[source] InvalidEmailAddress),
    #[error("no deliverable recipients ({rejected} rejected, {excluded} excluded as sender)")]
    NoRecipients { rejected: usize, excluded: usize },
}

/// Result of screening raw address strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressScreening {
    /// Valid addresses, normalized, in input order.
    pub accepted: Vec<EmailAddress>,
    pub rejected: Vec<InvalidEmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    pub message: Message,
    pub rejected: Vec<InvalidEmailAddress>,
    /// Recipients dropped because they matched the sender.
    pub excluded: Vec<EmailAddress>,
}

pub fn filter_valid_addresses<I, S>(raw: I) -> AddressScreening
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut screening = AddressScreening::default();

    for candidate in raw {
        match EmailAddress::parse(candidate.as_ref()) {
            Ok(address) => screening.accepted.push(address),
            Err(error) => {
                tracing::warn!(input = %error.input, "rejected invalid address");
                screening.rejected.push(error);
            }
        }
    }

    screening
}

/// Validates the sender, screens recipients and prepares the message.
///
/// Blank subject or body is not an error here: the message comes back with
/// `Invalid` status and will dispatch as failed copies.
pub fn compose_message(
    command: ComposeCommand,
    policy: &ComposePolicy,
) -> Result<ComposedMessage, ComposeError> {
    let sender = EmailAddress::parse(&command.sender).map_err(ComposeError::InvalidSender)?;
    let screening = filter_valid_addresses(&command.recipients);

    let (recipients, excluded): (Vec<_>, Vec<_>) = if policy.exclude_self {
        screening
            .accepted
            .into_iter()
            .partition(|recipient| *recipient != sender)
    } else {
        (screening.accepted, Vec::new())
    };

    if recipients.is_empty() {
        return Err(ComposeError::NoRecipients {
            rejected: screening.rejected.len(),
            excluded: excluded.len(),
        });
    }

    let mut message = Message::new(command.subject, command.body, sender, recipients);
    message.prepare_with(policy.short_body_len);

    tracing::info!(
        message = %message,
        rejected = screening.rejected.len(),
        excluded = excluded.len(),
        "message composed"
    );

    Ok(ComposedMessage {
        message,
        rejected: screening.rejected,
        excluded,
    })
}
