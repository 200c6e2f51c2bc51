use ratatui::style::Color;

/// Deep-sea palette used across the deck
pub struct Palette;

impl Palette {
    /// Page background
    pub const BG: Color = Color::Rgb(0x0f, 0x1f, 0x2b);
    /// Slightly lifted background for panels
    pub const BG_RAISED: Color = Color::Rgb(0x16, 0x2b, 0x3a);
    /// Body text
    pub const FG: Color = Color::Rgb(0xf2, 0xe2, 0xc1);
    /// De-emphasized text
    pub const DIM: Color = Color::Rgb(0x7a, 0x8b, 0x96);
    /// Highlight color for headings and active markers
    pub const ACCENT: Color = Color::Rgb(0xfa, 0x68, 0x36);
    /// Grid wipe cell fill
    pub const WIPE: Color = Color::Rgb(0xfa, 0x68, 0x36);
    /// Zoom overlay fill
    pub const ZOOM: Color = Color::Rgb(0x0a, 0x16, 0x1f);
}
