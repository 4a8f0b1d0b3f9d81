//! Distribution channels a build can be shipped through.
//!
//! The set is closed: one production channel plus two dev and two test
//! variants. Ordering of the slices returned here is the ordering used for
//! form fields, rendering and auto-fill.

/// Category of a channel, used for filtering and badge display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelCategory {
    Production,
    Dev,
    Test,
}

impl ChannelCategory {
    /// Short badge label shown next to a build-number field
    pub fn badge(&self) -> &'static str {
        match self {
            ChannelCategory::Production => "PROD",
            ChannelCategory::Dev => "DEV",
            ChannelCategory::Test => "TEST",
        }
    }
}

/// A distribution target for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuildChannel {
    Production,
    DevAdhoc,
    DevTestFlight,
    TestAdhoc,
    TestTestFlight,
}

const ALL: [BuildChannel; 5] = [
    BuildChannel::Production,
    BuildChannel::DevAdhoc,
    BuildChannel::DevTestFlight,
    BuildChannel::TestAdhoc,
    BuildChannel::TestTestFlight,
];

const EXCLUDING_DEV: [BuildChannel; 3] = [
    BuildChannel::Production,
    BuildChannel::TestAdhoc,
    BuildChannel::TestTestFlight,
];

const DEV: [BuildChannel; 2] = [BuildChannel::DevAdhoc, BuildChannel::DevTestFlight];

const TEST: [BuildChannel; 2] = [BuildChannel::TestAdhoc, BuildChannel::TestTestFlight];

// Offsets from the production build are positions in this list, starting at 1.
const AUTO_FILL_ORDER: [BuildChannel; 4] = [
    BuildChannel::DevAdhoc,
    BuildChannel::DevTestFlight,
    BuildChannel::TestAdhoc,
    BuildChannel::TestTestFlight,
];

impl BuildChannel {
    /// Every channel, production first
    pub fn all() -> &'static [BuildChannel] {
        &ALL
    }

    /// Production followed by the test channels
    pub fn excluding_dev() -> &'static [BuildChannel] {
        &EXCLUDING_DEV
    }

    pub fn dev() -> &'static [BuildChannel] {
        &DEV
    }

    pub fn test() -> &'static [BuildChannel] {
        &TEST
    }

    /// Non-production channels in the order auto-fill assigns offsets
    pub fn auto_fill_order() -> &'static [BuildChannel] {
        &AUTO_FILL_ORDER
    }

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            BuildChannel::Production => "production",
            BuildChannel::DevAdhoc => "dev_adhoc",
            BuildChannel::DevTestFlight => "dev_testflight",
            BuildChannel::TestAdhoc => "test_adhoc",
            BuildChannel::TestTestFlight => "test_testflight",
        }
    }

    /// Human label used in the form and in the rendered note
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildChannel::Production => "Production",
            BuildChannel::DevAdhoc => "Dev Adhoc",
            BuildChannel::DevTestFlight => "Dev TestFlight",
            BuildChannel::TestAdhoc => "Test Adhoc",
            BuildChannel::TestTestFlight => "Test TestFlight",
        }
    }

    pub fn category(&self) -> ChannelCategory {
        match self {
            BuildChannel::Production => ChannelCategory::Production,
            BuildChannel::DevAdhoc | BuildChannel::DevTestFlight => ChannelCategory::Dev,
            BuildChannel::TestAdhoc | BuildChannel::TestTestFlight => ChannelCategory::Test,
        }
    }

    /// Position in `all()`, usable as an array index
    pub fn index(&self) -> usize {
        match self {
            BuildChannel::Production => 0,
            BuildChannel::DevAdhoc => 1,
            BuildChannel::DevTestFlight => 2,
            BuildChannel::TestAdhoc => 3,
            BuildChannel::TestTestFlight => 4,
        }
    }
}
