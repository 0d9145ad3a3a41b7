//! Color palette for the dashboard

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Selected card border, key hints
    pub danger: Color,      // Error state
    pub success: Color,     // Positive remaining budget
    pub warning: Color,     // Negative remaining budget, loading spinner
    pub text: Color,        // Primary text
    pub text_dim: Color,    // Labels, footer, inactive borders
    pub header: Color,      // Title line, card names
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired palette
        Self {
            accent: Color::Rgb(250, 179, 135),
            danger: Color::Rgb(243, 139, 168),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(249, 226, 175),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            header: Color::Rgb(180, 190, 254),
        }
    }
}
