use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00e8a33d);
pub const ACCENT: Color = Color::from_u32(0x00f7e2a8);
pub const NEUTRAL: Color = Color::from_u32(0x009a9a9a);
pub const BACKGROUND: Color = Color::from_u32(0x00121217);
pub const ERROR: Color = Color::from_u32(0x00d4654f);
