//! Color theme constants for the repostats UI.
//!
//! A three-color tech palette: deep space blue (background), electric
//! cyan (accents), pure white (text).

use ratatui::style::Color;

/// Primary accent - electric cyan #00E5FF
pub const COLOR_PRIMARY: Color = Color::Rgb(0, 229, 255);

/// Dimmed accent - for secondary highlights #0099B3
pub const COLOR_PRIMARY_DIM: Color = Color::Rgb(0, 153, 179);

/// Primary text - pure white
pub const COLOR_TEXT: Color = Color::White;

/// Secondary text - softened white
pub const COLOR_TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);

/// Tertiary text - labels and hints
pub const COLOR_TEXT_TERTIARY: Color = Color::DarkGray;

/// Card and panel borders
pub const COLOR_BORDER: Color = Color::Rgb(0, 80, 90);

/// Surface background for cards #141B2E
pub const COLOR_SURFACE: Color = Color::Rgb(20, 27, 46);

/// Error text - red
pub const COLOR_ERROR: Color = Color::Red;
