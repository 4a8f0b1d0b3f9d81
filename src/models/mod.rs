//! Data models for the release-note form
//!
//! This module contains the core value types:
//! - Distribution channels and their categories
//! - Toast notifications
//! - Enums for form focus

pub mod channel;
pub mod enums;
pub mod toast;

// Re-exports for convenient access
pub use channel::{BuildChannel, ChannelCategory};
pub use enums::FormField;
pub use toast::{Toast, ToastStyle, DEFAULT_TOAST_DURATION};
