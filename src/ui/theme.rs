use crate::dispatch::KeyVariant;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub display_bg: Color,
    pub digit_key: Color,
    pub operator_key: Color,
    pub equals_key: Color,
    pub utility_key: Color,
    pub pressed_key: Color, // Highlight for the last button hit
}

impl Theme {
    /// Foreground color of a keypad button label
    pub fn key_color(&self, variant: KeyVariant) -> Color {
        match variant {
            KeyVariant::Default => self.digit_key,
            KeyVariant::Operator => self.operator_key,
            KeyVariant::Equals => self.equals_key,
            KeyVariant::Utility => self.utility_key,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the pressed key
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    display_bg: Color::Rgb(24, 24, 37),
    digit_key: Color::Rgb(205, 214, 244),
    operator_key: Color::Rgb(250, 179, 135), // Orange
    equals_key: Color::Rgb(166, 227, 161),   // Green
    utility_key: Color::Rgb(148, 226, 213),  // Teal
    pressed_key: Color::Rgb(249, 226, 175),
};
