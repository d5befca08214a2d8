use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const BRAND_PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADING_TEXT: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
