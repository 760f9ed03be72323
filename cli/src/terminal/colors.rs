use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ACCENT: Color = Color::Yellow;
pub const TEXT_DEFAULT: Color = Color::White;

pub const DRONE: Color = Color::Blue;
pub const TRIP: Color = Color::Magenta;
pub const LOCATIONS: Color = Color::Green;
