//! ANSI terminal color codes.
//!
//! With the `colorless` feature every constant is an empty string, so output
//! stays readable when it is redirected to a file.

#[cfg(not(feature = "colorless"))]
mod codes {
    pub const RESET: &str = "\x1b[0m";

    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BG_BLACK: &str = "\x1b[40m";
    pub const BG_RED: &str = "\x1b[41m";
    pub const BG_GREEN: &str = "\x1b[42m";
    pub const BG_YELLOW: &str = "\x1b[43m";
    pub const BG_BLUE: &str = "\x1b[44m";
    pub const BG_MAGENTA: &str = "\x1b[45m";
    pub const BG_CYAN: &str = "\x1b[46m";
    pub const BG_WHITE: &str = "\x1b[47m";
}

#[cfg(feature = "colorless")]
mod codes {
    pub const RESET: &str = "";

    pub const BLACK: &str = "";
    pub const RED: &str = "";
    pub const GREEN: &str = "";
    pub const YELLOW: &str = "";
    pub const BLUE: &str = "";
    pub const MAGENTA: &str = "";
    pub const CYAN: &str = "";
    pub const WHITE: &str = "";

    pub const BG_BLACK: &str = "";
    pub const BG_RED: &str = "";
    pub const BG_GREEN: &str = "";
    pub const BG_YELLOW: &str = "";
    pub const BG_BLUE: &str = "";
    pub const BG_MAGENTA: &str = "";
    pub const BG_CYAN: &str = "";
    pub const BG_WHITE: &str = "";
}

pub use codes::*;

/// Whether the color constants carry escape codes in this build.
#[must_use]
pub const fn enabled() -> bool {
    !cfg!(feature = "colorless")
}
