use ratatui::style::Color;

pub struct Theme {
    pub name: &'static str,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

pub static THEMES: &[Theme] = &[
    Theme {
        name: "Web",
        fg: Color::Rgb(0xd0, 0xd0, 0xd0),
        muted: Color::Rgb(0x6c, 0x70, 0x86),
        accent: Color::Rgb(0x7a, 0xa2, 0xf7),
        border: Color::Rgb(0x3b, 0x42, 0x61),
        success: Color::Rgb(0x9e, 0xce, 0x6a),
        warning: Color::Rgb(0xe0, 0xaf, 0x68),
        error: Color::Rgb(0xf7, 0x76, 0x8e),
    },
    Theme {
        name: "Mono",
        fg: Color::Gray,
        muted: Color::DarkGray,
        accent: Color::White,
        border: Color::DarkGray,
        success: Color::White,
        warning: Color::Gray,
        error: Color::White,
    },
];
