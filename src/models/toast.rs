//! Transient notification values

use std::time::Duration;

/// Default on-screen time before a toast dismisses itself
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity of a toast
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Error,
    Warning,
    Success,
    Info,
}

impl ToastStyle {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
            ToastStyle::Success => "✓",
            ToastStyle::Info => "ℹ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToastStyle::Error => "error",
            ToastStyle::Warning => "warning",
            ToastStyle::Success => "success",
            ToastStyle::Info => "info",
        }
    }
}

/// A notification to show to the user.
///
/// A zero `duration` keeps the toast up until it is dismissed by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub style: ToastStyle,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn new(style: ToastStyle, message: impl Into<String>) -> Self {
        Self {
            style,
            message: message.into(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastStyle::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastStyle::Error, message)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
