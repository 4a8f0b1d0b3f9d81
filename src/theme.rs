//! Theme module for release-note-tui
//!
//! Centralized color palette and styling constants. Badge and toast colors
//! are derived here so the UI code only matches on domain values.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::{ChannelCategory, ToastStyle};

/// Rounded border set used for every card
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color for cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color for the focused field (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary cyan accent color (#00d4aa)
pub const CYAN_PRIMARY: Color = Color::Rgb(0, 212, 170);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

/// Blue info color (#60a5fa)
pub const BLUE_INFO: Color = Color::Rgb(96, 165, 250);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color for labels, hints and disabled actions (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Badge color for a channel category
pub fn badge_color(category: ChannelCategory) -> Color {
    match category {
        ChannelCategory::Production => GREEN_SUCCESS,
        ChannelCategory::Dev => AMBER_WARNING,
        ChannelCategory::Test => BLUE_INFO,
    }
}

/// Accent color for a toast style
pub fn toast_color(style: ToastStyle) -> Color {
    match style {
        ToastStyle::Error => RED_ERROR,
        ToastStyle::Warning => AMBER_WARNING,
        ToastStyle::Success => GREEN_SUCCESS,
        ToastStyle::Info => BLUE_INFO,
    }
}
