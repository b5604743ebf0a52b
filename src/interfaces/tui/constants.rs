//! TUI constants

/// Truncate displayed URLs beyond this length
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// Fixed profile link shown in the footer
pub const TWITTER_HANDLE: &str = "kyogenclash";
pub const TWITTER_LINK: &str = "https://twitter.com/kyogenclash";
