//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 4;
/// Highlight symbol shown beside the selected task.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Marker shown in front of important tasks.
pub const IMPORTANT_MARKER: &str = "!";
/// Glyph used for colour swatches.
pub const SWATCH: &str = "●";
/// Header indicator offering the light scheme (shown while dark is active).
pub const LIGHT_ICON: &str = "☀";
/// Header indicator offering the dark scheme (shown while light is active).
pub const DARK_ICON: &str = "☾";
/// Width percentage for the edit popup before clamping.
pub const EDIT_POPUP_WIDTH_PERCENT: u16 = 60;
/// Minimum width for the edit popup.
pub const EDIT_POPUP_MIN_WIDTH: u16 = 36;
/// Fixed height of the edit popup (three fields plus borders).
pub const EDIT_POPUP_HEIGHT: u16 = 8;
