//! Enums used for form navigation
//!
//! This module contains the focus targets of the release-note form and the
//! traversal order between them.

use super::channel::BuildChannel;

/// Form field that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Version,
    Status,
    Build(BuildChannel),
}

impl FormField {
    /// Focus order for the given visible channels: version, status, then builds
    pub fn traversal(visible: &[BuildChannel]) -> Vec<FormField> {
        let mut fields = vec![FormField::Version, FormField::Status];
        fields.extend(visible.iter().copied().map(FormField::Build));
        fields
    }

    /// Next field in `order`, wrapping to the first
    pub fn next_in(&self, order: &[FormField]) -> FormField {
        match order.iter().position(|f| f == self) {
            Some(i) => order[(i + 1) % order.len()],
            None => order.first().copied().unwrap_or(*self),
        }
    }

    /// Previous field in `order`, wrapping to the last
    pub fn prev_in(&self, order: &[FormField]) -> FormField {
        match order.iter().position(|f| f == self) {
            Some(i) => order[(i + order.len() - 1) % order.len()],
            None => order.first().copied().unwrap_or(*self),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Version => "Version",
            FormField::Status => "Status",
            FormField::Build(channel) => channel.display_name(),
        }
    }
}
