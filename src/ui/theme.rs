use ratatui::style::Color;

pub const PRIMARY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACCENT: Color = Color::Rgb(0x1e, 0x40, 0x7c);

// Counter tones
pub const ATHERTON_VIOLET: Color = Color::Rgb(0xa7, 0x8b, 0xfa);
pub const BEAVER_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const LIMESTONE_GRAY: Color = Color::Rgb(0x8a, 0x8d, 0x91);

// Buttons
pub const MINUS_FOCUS: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PLUS_FOCUS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BUTTON_DISABLED: Color = Color::Rgb(0x52, 0x52, 0x52);

pub const CONFETTI_PALETTE: [Color; 6] = [
    Color::Rgb(0xf4, 0x72, 0xb6),
    Color::Rgb(0xfa, 0xcc, 0x15),
    Color::Rgb(0x22, 0xc5, 0x5e),
    Color::Rgb(0x60, 0xa5, 0xfa),
    Color::Rgb(0xa7, 0x8b, 0xfa),
    Color::Rgb(0xfb, 0x92, 0x3c),
];
