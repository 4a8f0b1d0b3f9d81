//! Release-note state and text generation.
//!
//! `ReleaseNoteState` holds everything the form edits: version, review
//! status, one build number per channel and the dev-channel toggle. All
//! derived values (validity, visible channels, the rendered note) are
//! computed on read.
//!
//! # Invariants
//! - Every channel has a build-number entry; absence is the empty string.
//! - Only `version` and `include_dev_channels` are persisted, and they are
//!   written through to the store on every change.
//! - No operation fails. Invalid input turns actions into no-ops.

use std::time::Duration;

use log::{debug, info, warn};

use crate::clipboard::Clipboard;
use crate::models::{BuildChannel, DEFAULT_TOAST_DURATION, Toast};
use crate::prefs::PreferenceStore;
use crate::toast::Notifier;

pub const VERSION_KEY: &str = "version";
pub const INCLUDE_DEV_CHANNELS_KEY: &str = "includeDevChannels";

pub const DEFAULT_VERSION: &str = "2.35.0";
pub const DEFAULT_STATUS: &str = "Waiting for Review";

const TAG_PREFIX: &str = "UZ-V-";
const RELEASES_URL: &str = "https://github.com/SpaceBank/iOS-Space/releases/tag/";

pub const COPIED_MESSAGE: &str = "Release note copied to clipboard!";

/// Mutable state behind the release-note form
pub struct ReleaseNoteState {
    version: String,
    status: String,
    include_dev_channels: bool,
    build_numbers: [String; 5],
    preview_expanded: bool,
    toast_duration: Duration,
    prefs: Box<dyn PreferenceStore>,
}

impl ReleaseNoteState {
    /// Build the state, restoring persisted fields from `prefs`
    pub fn load(prefs: Box<dyn PreferenceStore>) -> Self {
        let version = prefs
            .get_string(VERSION_KEY)
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let include_dev_channels = prefs.get_bool(INCLUDE_DEV_CHANNELS_KEY).unwrap_or(true);
        debug!(
            "event=state_load module=release_note version={} include_dev={}",
            version, include_dev_channels
        );

        Self {
            version,
            status: DEFAULT_STATUS.to_string(),
            include_dev_channels,
            build_numbers: Default::default(),
            preview_expanded: false,
            toast_duration: DEFAULT_TOAST_DURATION,
            prefs,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, value: impl Into<String>) {
        self.version = value.into();
        if let Err(e) = self.prefs.set_string(VERSION_KEY, &self.version) {
            warn!("event=prefs_write_failed module=release_note key={VERSION_KEY} error={e}");
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, value: impl Into<String>) {
        self.status = value.into();
    }

    pub fn include_dev_channels(&self) -> bool {
        self.include_dev_channels
    }

    pub fn set_include_dev_channels(&mut self, include: bool) {
        self.include_dev_channels = include;
        if let Err(e) = self.prefs.set_bool(INCLUDE_DEV_CHANNELS_KEY, include) {
            warn!(
                "event=prefs_write_failed module=release_note key={INCLUDE_DEV_CHANNELS_KEY} error={e}"
            );
        }
    }

    pub fn toggle_include_dev_channels(&mut self) {
        self.set_include_dev_channels(!self.include_dev_channels);
    }

    pub fn preview_expanded(&self) -> bool {
        self.preview_expanded
    }

    pub fn set_preview_expanded(&mut self, expanded: bool) {
        self.preview_expanded = expanded;
    }

    pub fn toggle_preview_expanded(&mut self) {
        self.preview_expanded = !self.preview_expanded;
    }

    /// How long the "copied" toast stays on screen
    pub fn set_toast_duration(&mut self, duration: Duration) {
        self.toast_duration = duration;
    }

    /// Raw stored build number for `channel`
    pub fn build_number(&self, channel: BuildChannel) -> &str {
        &self.build_numbers[channel.index()]
    }

    /// Store `value` as-is; trimming only happens when validating/rendering
    pub fn set_build_number(&mut self, channel: BuildChannel, value: impl Into<String>) {
        self.build_numbers[channel.index()] = value.into();
    }

    /// Channels whose build-number fields are shown
    pub fn visible_channels(&self) -> &'static [BuildChannel] {
        if self.include_dev_channels {
            BuildChannel::all()
        } else {
            BuildChannel::excluding_dev()
        }
    }

    fn production_build_number(&self) -> &str {
        self.build_number(BuildChannel::Production).trim()
    }

    /// Version, status and production build are all non-blank
    pub fn is_valid(&self) -> bool {
        !self.version.trim().is_empty()
            && !self.status.trim().is_empty()
            && !self.production_build_number().is_empty()
    }

    /// The untrimmed production build number parses as an integer
    pub fn can_auto_fill(&self) -> bool {
        self.production_base().is_some()
    }

    fn production_base(&self) -> Option<i64> {
        self.build_number(BuildChannel::Production).parse().ok()
    }

    // Offsets are added in i128 so bases near i64::MAX still fill.
    fn auto_fill_values(&self) -> Option<Vec<(BuildChannel, i128)>> {
        let base = i128::from(self.production_base()?);
        Some(
            BuildChannel::auto_fill_order()
                .iter()
                .zip(1i128..)
                .map(|(channel, offset)| (*channel, base + offset))
                .collect(),
        )
    }

    pub fn reset_build_numbers(&mut self) {
        for value in self.build_numbers.iter_mut() {
            value.clear();
        }
        info!("event=reset_build_numbers module=release_note");
    }

    /// Derive the non-production build numbers from production.
    ///
    /// Hidden dev channels are filled too.
    pub fn auto_fill_build_numbers(&mut self) {
        let Some(values) = self.auto_fill_values() else {
            debug!("event=auto_fill_declined module=release_note");
            return;
        };
        for (channel, number) in values {
            debug!(
                "event=auto_fill_channel module=release_note channel={} value={}",
                channel.id(),
                number
            );
            self.set_build_number(channel, number.to_string());
        }
        info!(
            "event=auto_fill module=release_note base={}",
            self.build_number(BuildChannel::Production)
        );
    }

    pub fn tag(&self) -> String {
        format!("{TAG_PREFIX}{}", self.version)
    }

    pub fn tag_url(&self) -> String {
        format!("{RELEASES_URL}{}", self.tag())
    }

    fn build_line(&self, build_number: &str) -> String {
        format!("Build - v{}({})", self.version, build_number)
    }

    fn channel_block(&self, channels: &[BuildChannel]) -> String {
        channels
            .iter()
            .map(|channel| {
                format!(
                    "*{}*:\n{}\n",
                    channel.display_name(),
                    self.build_line(self.build_number(*channel))
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the release note text
    pub fn render_release_note(&self) -> String {
        let mut note = format!(
            "Tag - [{}]({})\n{}\n\n*Status - {}*",
            self.tag(),
            self.tag_url(),
            self.build_line(self.production_build_number()),
            self.status
        );

        if self.include_dev_channels {
            note.push_str("\n\n");
            note.push_str(&self.channel_block(BuildChannel::dev()));
        }

        note.push_str("\n\n");
        note.push_str(&self.channel_block(BuildChannel::test()));

        note
    }

    /// Copy the note to the clipboard and queue a toast.
    ///
    /// Returns `false` without side effects when the form is invalid.
    pub fn submit(&self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) -> bool {
        if !self.is_valid() {
            debug!("event=submit module=release_note status=blocked");
            return false;
        }

        let note = self.render_release_note();
        match clipboard.write_text(&note) {
            Ok(()) => {
                info!(
                    "event=submit module=release_note status=ok tag={} bytes={}",
                    self.tag(),
                    note.len()
                );
                notifier.notify(Toast::success(COPIED_MESSAGE).with_duration(self.toast_duration));
            }
            Err(e) => {
                warn!("event=submit module=release_note status=error error={e}");
                notifier.notify(Toast::error(format!("Could not copy release note: {e}")));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{FailingClipboard, RecordingClipboard};
    use crate::models::ToastStyle;
    use crate::prefs::{MemoryStore, PrefsError};
    use std::io;

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: Vec<Toast>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, toast: Toast) {
            self.toasts.push(toast);
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get_string(&self, _key: &str) -> Option<String> {
            None
        }
        fn get_bool(&self, _key: &str) -> Option<bool> {
            None
        }
        fn set_string(&mut self, _key: &str, _value: &str) -> Result<(), PrefsError> {
            Err(read_only_error())
        }
        fn set_bool(&mut self, _key: &str, _value: bool) -> Result<(), PrefsError> {
            Err(read_only_error())
        }
    }

    fn read_only_error() -> PrefsError {
        PrefsError::Io {
            path: "prefs.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
    }

    fn new_state() -> ReleaseNoteState {
        ReleaseNoteState::load(Box::new(MemoryStore::new()))
    }

    fn filled_state() -> ReleaseNoteState {
        let mut state = new_state();
        state.set_build_number(BuildChannel::Production, "100");
        state.auto_fill_build_numbers();
        state
    }

    const FULL_NOTE: &str = "Tag - [UZ-V-2.35.0](https://github.com/SpaceBank/iOS-Space/releases/tag/UZ-V-2.35.0)
Build - v2.35.0(100)

*Status - Waiting for Review*

*Dev Adhoc*:
Build - v2.35.0(101)

*Dev TestFlight*:
Build - v2.35.0(102)


*Test Adhoc*:
Build - v2.35.0(103)

*Test TestFlight*:
Build - v2.35.0(104)
";

    const NO_DEV_NOTE: &str = "Tag - [UZ-V-2.35.0](https://github.com/SpaceBank/iOS-Space/releases/tag/UZ-V-2.35.0)
Build - v2.35.0(100)

*Status - Waiting for Review*

*Test Adhoc*:
Build - v2.35.0(103)

*Test TestFlight*:
Build - v2.35.0(104)
";

    #[test]
    fn test_defaults() {
        let state = new_state();
        assert_eq!(state.version(), "2.35.0");
        assert_eq!(state.status(), "Waiting for Review");
        assert!(state.include_dev_channels());
        assert!(!state.preview_expanded());
        for channel in BuildChannel::all() {
            assert_eq!(state.build_number(*channel), "");
        }
    }

    #[test]
    fn test_load_restores_persisted_fields() {
        let store = MemoryStore::new()
            .with_string(VERSION_KEY, "2.41.0")
            .with_bool(INCLUDE_DEV_CHANNELS_KEY, false);
        let state = ReleaseNoteState::load(Box::new(store));
        assert_eq!(state.version(), "2.41.0");
        assert!(!state.include_dev_channels());
    }

    #[test]
    fn test_load_ignores_wrongly_typed_values() {
        let store = MemoryStore::new()
            .with_bool(VERSION_KEY, true)
            .with_string(INCLUDE_DEV_CHANNELS_KEY, "false");
        let state = ReleaseNoteState::load(Box::new(store));
        assert_eq!(state.version(), DEFAULT_VERSION);
        assert!(state.include_dev_channels());
    }

    #[test]
    fn test_setters_write_through() {
        let store = MemoryStore::new();
        let mut state = ReleaseNoteState::load(Box::new(store.clone()));

        state.set_version("2.36.0");
        state.set_include_dev_channels(false);
        state.set_status("Approved");

        assert_eq!(store.get_string(VERSION_KEY).as_deref(), Some("2.36.0"));
        assert_eq!(store.get_bool(INCLUDE_DEV_CHANNELS_KEY), Some(false));
        assert_eq!(store.get_string("status"), None);
    }

    #[test]
    fn test_failed_prefs_write_still_updates_state() {
        let mut state = ReleaseNoteState::load(Box::new(ReadOnlyStore));
        state.set_version("9.9.9");
        state.toggle_include_dev_channels();
        assert_eq!(state.version(), "9.9.9");
        assert!(!state.include_dev_channels());
    }

    #[test]
    fn test_visible_channels_always_include_production() {
        let mut state = new_state();
        assert_eq!(state.visible_channels(), BuildChannel::all());
        assert!(state.visible_channels().contains(&BuildChannel::Production));

        state.set_include_dev_channels(false);
        assert_eq!(state.visible_channels(), BuildChannel::excluding_dev());
        assert!(state.visible_channels().contains(&BuildChannel::Production));
    }

    #[test]
    fn test_is_valid_requires_all_three_fields() {
        let mut state = new_state();
        assert!(!state.is_valid());

        state.set_build_number(BuildChannel::Production, "100");
        assert!(state.is_valid());

        state.set_status("   ");
        assert!(!state.is_valid());
        state.set_status("In Review");

        state.set_version("\t ");
        assert!(!state.is_valid());
        state.set_version("2.35.0");

        state.set_build_number(BuildChannel::Production, "  ");
        assert!(!state.is_valid());
    }

    #[test]
    fn test_is_valid_ignores_other_channels() {
        let mut state = new_state();
        state.set_build_number(BuildChannel::Production, "7");
        state.set_build_number(BuildChannel::TestAdhoc, "");
        assert!(state.is_valid());
    }

    #[test]
    fn test_can_auto_fill_is_strict() {
        let mut state = new_state();
        assert!(!state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, "100");
        assert!(state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, " 100");
        assert!(!state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, "100 ");
        assert!(!state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, "1.5");
        assert!(!state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, "-3");
        assert!(state.can_auto_fill());
    }

    #[test]
    fn test_auto_fill_scenario() {
        let state = filled_state();
        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "101");
        assert_eq!(state.build_number(BuildChannel::DevTestFlight), "102");
        assert_eq!(state.build_number(BuildChannel::TestAdhoc), "103");
        assert_eq!(state.build_number(BuildChannel::TestTestFlight), "104");
        assert_eq!(state.build_number(BuildChannel::Production), "100");
    }

    #[test]
    fn test_auto_fill_updates_hidden_dev_channels() {
        let mut state = new_state();
        state.set_include_dev_channels(false);
        state.set_build_number(BuildChannel::Production, "10");
        state.auto_fill_build_numbers();
        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "11");
        assert_eq!(state.build_number(BuildChannel::DevTestFlight), "12");
    }

    #[test]
    fn test_auto_fill_non_numeric_is_noop() {
        let mut state = new_state();
        state.set_build_number(BuildChannel::DevAdhoc, "keep");
        state.set_build_number(BuildChannel::TestTestFlight, "me");
        state.set_build_number(BuildChannel::Production, "abc");

        assert!(!state.can_auto_fill());
        state.auto_fill_build_numbers();

        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "keep");
        assert_eq!(state.build_number(BuildChannel::DevTestFlight), "");
        assert_eq!(state.build_number(BuildChannel::TestTestFlight), "me");
    }

    #[test]
    fn test_auto_fill_near_i64_max() {
        let mut state = new_state();
        state.set_build_number(BuildChannel::Production, (i64::MAX - 1).to_string());
        assert!(state.can_auto_fill());

        state.set_build_number(BuildChannel::Production, "9223372036854775807");
        assert!(state.can_auto_fill());
        state.auto_fill_build_numbers();

        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "9223372036854775808");
        assert_eq!(state.build_number(BuildChannel::DevTestFlight), "9223372036854775809");
        assert_eq!(state.build_number(BuildChannel::TestAdhoc), "9223372036854775810");
        assert_eq!(state.build_number(BuildChannel::TestTestFlight), "9223372036854775811");
    }

    #[test]
    fn test_auto_fill_out_of_i64_range_declined() {
        let mut state = new_state();
        state.set_build_number(BuildChannel::Production, "9223372036854775808");
        assert!(!state.can_auto_fill());
        state.auto_fill_build_numbers();
        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "");
    }

    #[test]
    fn test_auto_fill_twice_gives_same_result() {
        let mut state = filled_state();
        state.set_build_number(BuildChannel::DevAdhoc, "999");
        state.auto_fill_build_numbers();
        let first: Vec<String> = BuildChannel::all()
            .iter()
            .map(|c| state.build_number(*c).to_string())
            .collect();
        state.auto_fill_build_numbers();
        let second: Vec<String> = BuildChannel::all()
            .iter()
            .map(|c| state.build_number(*c).to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(state.build_number(BuildChannel::DevAdhoc), "101");
    }

    #[test]
    fn test_reset_then_auto_fill_is_noop() {
        let mut state = filled_state();
        state.set_version("3.0.0");
        state.reset_build_numbers();
        state.auto_fill_build_numbers();

        for channel in BuildChannel::all() {
            assert_eq!(state.build_number(*channel), "");
        }
        assert_eq!(state.version(), "3.0.0");
        assert_eq!(state.status(), DEFAULT_STATUS);
        assert!(state.include_dev_channels());
    }

    #[test]
    fn test_tag_and_url() {
        let state = new_state();
        assert_eq!(state.tag(), "UZ-V-2.35.0");
        assert_eq!(
            state.tag_url(),
            "https://github.com/SpaceBank/iOS-Space/releases/tag/UZ-V-2.35.0"
        );
    }

    #[test]
    fn test_render_full_note() {
        assert_eq!(filled_state().render_release_note(), FULL_NOTE);
    }

    #[test]
    fn test_render_without_dev_channels() {
        let mut state = filled_state();
        state.set_include_dev_channels(false);
        let note = state.render_release_note();
        assert_eq!(note, NO_DEV_NOTE);
        assert!(!note.contains("Dev Adhoc"));
        assert!(note.contains("*Test Adhoc*"));
    }

    #[test]
    fn test_render_trims_production_only() {
        let mut state = filled_state();
        state.set_build_number(BuildChannel::Production, " 100 ");
        state.set_build_number(BuildChannel::TestAdhoc, " 7 ");
        let note = state.render_release_note();
        assert!(note.contains("Build - v2.35.0(100)\n"));
        assert!(note.contains("Build - v2.35.0( 7 )\n"));
    }

    #[test]
    fn test_render_is_pure() {
        let a = filled_state();
        let b = filled_state();
        assert_eq!(a.render_release_note(), b.render_release_note());
        assert_eq!(a.render_release_note(), a.render_release_note());
    }

    #[test]
    fn test_submit_copies_and_notifies() {
        let state = filled_state();
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();

        assert!(state.submit(&mut clipboard, &mut notifier));

        assert_eq!(clipboard.writes, vec![FULL_NOTE.to_string()]);
        assert_eq!(notifier.toasts.len(), 1);
        assert_eq!(notifier.toasts[0].style, ToastStyle::Success);
        assert_eq!(notifier.toasts[0].message, COPIED_MESSAGE);
    }

    #[test]
    fn test_submit_uses_configured_toast_duration() {
        let mut state = filled_state();
        state.set_toast_duration(Duration::from_secs(5));
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();

        state.submit(&mut clipboard, &mut notifier);
        assert_eq!(notifier.toasts[0].duration, Duration::from_secs(5));
    }

    #[test]
    fn test_submit_blocked_when_version_empty() {
        let mut state = filled_state();
        state.set_version("");
        let mut clipboard = RecordingClipboard::default();
        let mut notifier = RecordingNotifier::default();

        assert!(!state.is_valid());
        assert!(!state.submit(&mut clipboard, &mut notifier));
        assert!(clipboard.writes.is_empty());
        assert!(notifier.toasts.is_empty());
    }

    #[test]
    fn test_submit_clipboard_failure_raises_error_toast() {
        let state = filled_state();
        let mut notifier = RecordingNotifier::default();

        assert!(state.submit(&mut FailingClipboard, &mut notifier));
        assert_eq!(notifier.toasts.len(), 1);
        assert_eq!(notifier.toasts[0].style, ToastStyle::Error);
    }

    #[test]
    fn test_preview_toggle_is_session_only() {
        let store = MemoryStore::new();
        let mut state = ReleaseNoteState::load(Box::new(store.clone()));
        state.toggle_preview_expanded();
        assert!(state.preview_expanded());
        state.set_preview_expanded(false);
        assert!(!state.preview_expanded());
        assert_eq!(store.get_bool("previewExpanded"), None);
    }
}
