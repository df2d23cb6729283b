//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in density-independent pixels and milliseconds. Hosts on
//! high-density screens resolve the slop through [`Dp::to_px`] with their
//! display density before handing it to the classifier.

use coverflow_ui_graphics::Dp;

/// Drag threshold.
///
/// If the pointer moves more than this distance from the initial press
/// position the touch sequence becomes a drag and no tap is reported on
/// release. Matches Android's `ViewConfiguration.TOUCH_SLOP` of 8dp.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// A press held at least this long without leaving the slop is a long press
/// and does not produce a single tap.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;
