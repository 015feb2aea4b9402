//! Shared palette

use ratatui::style::{Color, Modifier, Style};

use crate::catalog::{Rarity, Swatch};

pub const BG_BASE: Color = Color::Rgb(10, 14, 20);
pub const BG_PANEL: Color = Color::Rgb(18, 24, 33);
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 52, 64);
pub const TEXT_MAIN: Color = Color::Rgb(229, 231, 235);
pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184);
pub const ACCENT_CYAN: Color = Color::Rgb(6, 182, 212);
pub const ACCENT_AMBER: Color = Color::Rgb(252, 211, 77);
pub const ERROR_RED: Color = Color::Rgb(239, 68, 68);

pub fn swatch_color(swatch: Swatch) -> Color {
    Color::Rgb(swatch.r, swatch.g, swatch.b)
}

/// 6★ gold, 5★ silver, 4★ bronze.
pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Six => Color::Rgb(251, 191, 36),
        Rarity::Five => Color::Rgb(203, 213, 225),
        Rarity::Four => Color::Rgb(205, 127, 50),
    }
}

pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_CYAN)
        .add_modifier(Modifier::BOLD)
}

pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(ACCENT_CYAN)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}
