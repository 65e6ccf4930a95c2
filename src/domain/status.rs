use std::fmt;

/// Lifecycle of a message.
///
/// `Draft` becomes `Ready` or `Invalid` after preparation. `Sent` and
/// `Failed` are only ever assigned to per-recipient delivery copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageStatus {
    #[default]
    Draft,
    Ready,
    Invalid,
    Sent,
    Failed,
}

impl MessageStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::Invalid => "invalid",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }

    /// Status a delivery copy gets when dispatched from a message in `self`.
    pub fn delivery_outcome(self) -> Self {
        match self {
            Self::Ready => Self::Sent,
            _ => Self::Failed,
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
