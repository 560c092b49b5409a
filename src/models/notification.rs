use serde::{Deserialize, Serialize};

/// A transient toast shown to the visitor after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    /// Background gradient for the toast.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg,#00E5A8,#10B981)",
            Self::Error => "linear-gradient(135deg,#EF4444,#DC2626)",
            Self::Info => "linear-gradient(135deg,#3B82F6,#2563EB)",
            Self::Warning => "linear-gradient(135deg,#F59E0B,#D97706)",
        }
    }
}
