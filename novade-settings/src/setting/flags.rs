//! Bitsets attached to every setting descriptor.

use bitflags::bitflags;

bitflags! {
    /// Semantic tags describing how the menu layer should treat a setting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SettingFlags: u64 {
        /// The value can be typed in directly instead of stepped.
        const ALLOW_INPUT     = 1 << 0;
        /// `min`/`max` are meaningful; string parsing clamps against them.
        const HAS_RANGE       = 1 << 1;
        /// An empty string is a legal value.
        const ALLOW_EMPTY     = 1 << 2;
        /// The path names a directory.
        const PATH_DIR        = 1 << 3;
        /// The path names a file.
        const PATH_FILE       = 1 << 4;
        /// The value selects a driver.
        const IS_DRIVER       = 1 << 5;
        /// Selecting the entry leaves the menu.
        const EXIT            = 1 << 6;
        /// The command trigger fires without waiting for confirmation.
        const CMD_APPLY_AUTO  = 1 << 7;
        /// OK opens the file/directory browser.
        const BROWSER_ACTION  = 1 << 8;
        /// Only shown in advanced mode.
        const ADVANCED        = 1 << 9;
        /// Only shown in advanced mode on appliance builds.
        const LAKKA_ADVANCED  = 1 << 10;
    }
}

bitflags! {
    /// String fields the registry owns and releases when the list is torn down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FreeFlags: u32 {
        const NAME   = 1 << 0;
        const SHORT  = 1 << 1;
        const VALUES = 1 << 2;
    }
}
