// appshots/src/core/presets.rs
//! Fixed sizes and locations. Paths are relative to the project root
//! (the working directory the binary is started from).

use super::{Background, TargetSize};

/// Every screenshot size App Store Connect asks for.
pub const APP_STORE_SIZES: [TargetSize; 6] = [
    TargetSize::fixed(1242, 2688), // iPhone 6.5" portrait
    TargetSize::fixed(2688, 1242), // iPhone 6.5" landscape
    TargetSize::fixed(1284, 2778), // iPhone 6.7" portrait
    TargetSize::fixed(2778, 1284), // iPhone 6.7" landscape
    TargetSize::fixed(2064, 2752), // iPad Pro 13" portrait
    TargetSize::fixed(2752, 2064), // iPad Pro 13" landscape
];

pub const IPAD_SIZES: [TargetSize; 2] = [
    TargetSize::fixed(2064, 2752),
    TargetSize::fixed(2752, 2064),
];

pub const ASSETS_DIR: &str = "assets";
pub const OUTPUT_DIR: &str = "app_store_screenshots";

pub const SCREENSHOT_SOURCES: [&str; 3] = [
    "screenshot_chat_list.png",
    "screenshot_conversation.png",
    "screenshot_profile.png",
];

/// Dimension tags left on file names by earlier screenshot runs.
pub const KNOWN_DIMENSION_SUFFIXES: [&str; 2] = ["_1242x2688", "_1284x2778"];

/// Outputs of this size are preferred as iPad sources.
pub const IPAD_SOURCE_SUFFIX: &str = "_1242x2688.png";
pub const IPAD_MAX_SOURCES: usize = 3;
pub const IPAD_LABEL: &str = "iPad13";

pub const ICON_SOURCE: &str = "assets/app_icon_source.png";
pub const ICON_OUTPUT: &str = "assets/app_icon.png";
pub const ICON_SIZE: u32 = 1024;
/// Light grey; icons must not carry transparency.
pub const ICON_BACKGROUND: Background = Background([0xE8, 0xE8, 0xE8]);
