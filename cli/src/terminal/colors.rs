use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 114, g: 176, b: 232 };
pub const SECONDARY: Color = Color::TrueColor { r: 182, g: 146, b: 222 };
pub const ACCENT: Color = Color::TrueColor { r: 240, g: 196, b: 102 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
