//! Theme and Colors
//!
//! The two portfolio palettes: near-black with teal/violet/cyan accents for
//! dark mode, and a soft gray-50 sheet with deeper accents for light mode.
//!
//! During a theme change both palettes are on screen at once (the old
//! background slides out while the new one slides in), and foreground
//! colors are blended between them with [`Palette::blend`].

use portfolio_core::ThemeTransition;
use ratatui::style::Color;

// ============================================================================
// Dark Palette
// ============================================================================

/// Page background - almost black
pub const DARK_BG: Color = Color::Rgb(3, 3, 4);

/// Raised surfaces (editor panel, form fields)
pub const DARK_SURFACE: Color = Color::Rgb(17, 17, 22);

/// Body text
pub const DARK_TEXT: Color = Color::Rgb(229, 231, 235);

/// Secondary text
pub const DARK_MUTED: Color = Color::Rgb(148, 150, 160);

/// Hairlines and borders
pub const DARK_BORDER: Color = Color::Rgb(45, 46, 56);

// ============================================================================
// Light Palette
// ============================================================================

/// Page background - gray-50
pub const LIGHT_BG: Color = Color::Rgb(249, 250, 251);

/// Raised surfaces
pub const LIGHT_SURFACE: Color = Color::Rgb(255, 255, 255);

/// Body text
pub const LIGHT_TEXT: Color = Color::Rgb(17, 24, 39);

/// Secondary text
pub const LIGHT_MUTED: Color = Color::Rgb(107, 114, 128);

/// Hairlines and borders
pub const LIGHT_BORDER: Color = Color::Rgb(209, 213, 219);

// ============================================================================
// Accents
// ============================================================================

/// Signature teal
pub const TEAL: Color = Color::Rgb(45, 212, 191);

/// Teal that reads on a light background
pub const TEAL_DEEP: Color = Color::Rgb(13, 148, 136);

/// Violet highlight
pub const VIOLET: Color = Color::Rgb(167, 139, 250);

/// Violet for light mode
pub const VIOLET_DEEP: Color = Color::Rgb(124, 58, 237);

/// Cyan highlight
pub const CYAN: Color = Color::Rgb(34, 211, 238);

/// Cyan for light mode
pub const CYAN_DEEP: Color = Color::Rgb(8, 145, 178);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(74, 222, 128);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(248, 113, 113);

/// A full set of colors for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    /// Dark mode
    pub const fn dark() -> Self {
        Self {
            bg: DARK_BG,
            surface: DARK_SURFACE,
            text: DARK_TEXT,
            muted: DARK_MUTED,
            border: DARK_BORDER,
            accent: TEAL,
            accent_alt: VIOLET,
            highlight: CYAN,
            success: SUCCESS_GREEN,
            error: ERROR_RED,
        }
    }

    /// Light mode
    pub const fn light() -> Self {
        Self {
            bg: LIGHT_BG,
            surface: LIGHT_SURFACE,
            text: LIGHT_TEXT,
            muted: LIGHT_MUTED,
            border: LIGHT_BORDER,
            accent: TEAL_DEEP,
            accent_alt: VIOLET_DEEP,
            highlight: CYAN_DEEP,
            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),
        }
    }

    /// Palette for a theme
    pub const fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Component-wise blend, `t = 0` is `from`, `t = 1` is `to`
    pub fn blend(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            bg: lerp_color(from.bg, to.bg, t),
            surface: lerp_color(from.surface, to.surface, t),
            text: lerp_color(from.text, to.text, t),
            muted: lerp_color(from.muted, to.muted, t),
            border: lerp_color(from.border, to.border, t),
            accent: lerp_color(from.accent, to.accent, t),
            accent_alt: lerp_color(from.accent_alt, to.accent_alt, t),
            highlight: lerp_color(from.highlight, to.highlight, t),
            success: lerp_color(from.success, to.success, t),
            error: lerp_color(from.error, to.error, t),
        }
    }
}

/// Colors for one frame, including an in-flight theme change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePalette {
    /// Foreground palette (blended while changing)
    pub content: Palette,
    /// Background leaving the screen, with its column offset
    pub outgoing: Option<(Palette, i32)>,
    /// Background on screen (or arriving), with its column offset
    pub incoming: (Palette, i32),
}

impl FramePalette {
    /// Resolve the palettes for `now` on a screen `width` columns wide
    pub fn resolve(
        is_dark: bool,
        transition: Option<&ThemeTransition>,
        now: std::time::Instant,
        width: u16,
    ) -> Self {
        let current = Palette::for_theme(is_dark);
        match transition {
            Some(t) if !t.is_finished(now) => {
                let from = Palette::for_theme(t.from_dark);
                let to = Palette::for_theme(t.to_dark);
                let (out_x, in_x) = t.offsets(now, f32::from(width));
                Self {
                    content: Palette::blend(&from, &to, t.progress(now)),
                    outgoing: Some((from, out_x.round() as i32)),
                    incoming: (to, in_x.round() as i32),
                }
            }
            _ => Self {
                content: current,
                outgoing: None,
                incoming: (current, 0),
            },
        }
    }
}

/// Linear blend between two RGB colors
///
/// Non-RGB colors can't be mixed and snap at the midpoint.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| {
                let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
                v.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
