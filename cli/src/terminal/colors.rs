use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const ACTIVE: Color = Color::Green;
pub const INACTIVE: Color = Color::Red;
pub const DATE: Color = Color::BrightBlue;
pub const DAYS_LEFT: Color = Color::Yellow;
