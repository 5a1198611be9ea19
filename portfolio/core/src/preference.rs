//! OS-Level Color Scheme Preference
//!
//! Terminals have no `prefers-color-scheme` media query. The closest common
//! signal is `COLORFGBG` (`"<fg>;<bg>"` or `"<fg>;<default>;<bg>"`), exported
//! by rxvt, Konsole, iTerm2 and others. The background index tells dark from
//! light.

/// Environment variable carrying the terminal's fg/bg color indices
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Read the "prefers dark" signal from the environment
///
/// Returns `None` when the terminal does not advertise its colors.
#[must_use]
pub fn detect_prefers_dark() -> Option<bool> {
    std::env::var(COLORFGBG_VAR)
        .ok()
        .and_then(|value| prefers_dark_from_colorfgbg(&value))
}

/// Interpret a `COLORFGBG` value
///
/// Background indices 0-6 and 8 are the dark ANSI colors; 7 and 9-15 are
/// light. Anything unparsable yields `None`.
#[must_use]
pub fn prefers_dark_from_colorfgbg(value: &str) -> Option<bool> {
    let bg = value.rsplit(';').next()?.trim();
    let index: u8 = bg.parse().ok()?;
    match index {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}
