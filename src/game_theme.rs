use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GameTheme {
    /// White on black, like the arcade cabinet
    #[default]
    Classic,
    Monokai,
    Dracula,
    Nord,
    HighContrast,
}

pub struct ThemeColors {
    pub background: Color,
    pub border: Color,
    pub net: Color,
    pub text: Color,
    pub accent: Color,
    pub paddle: Color,
    pub ball: Color,
}

impl GameTheme {
    pub fn name(&self) -> &'static str {
        match self {
            GameTheme::Classic => "Classic",
            GameTheme::Monokai => "Monokai",
            GameTheme::Dracula => "Dracula",
            GameTheme::Nord => "Nord",
            GameTheme::HighContrast => "High Contrast",
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            GameTheme::Classic => ThemeColors {
                background: Color::Black,
                border: Color::Gray,
                net: Color::DarkGray,
                text: Color::White,
                accent: Color::White,
                paddle: Color::White,
                ball: Color::White,
            },
            GameTheme::Monokai => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(249, 38, 114),   // pink
                net: Color::Rgb(117, 113, 94),      // comment grey
                text: Color::Rgb(248, 248, 242),    // foreground
                accent: Color::Rgb(166, 226, 46),   // green
                paddle: Color::Rgb(102, 217, 239),  // cyan
                ball: Color::Rgb(230, 219, 116),    // yellow
            },
            GameTheme::Dracula => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(189, 147, 249), // purple
                net: Color::Rgb(98, 114, 164),     // comment
                text: Color::Rgb(248, 248, 242),
                accent: Color::Rgb(255, 121, 198), // pink
                paddle: Color::Rgb(80, 250, 123),  // green
                ball: Color::Rgb(255, 85, 85),     // red
            },
            GameTheme::Nord => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(136, 192, 208),
                net: Color::Rgb(76, 86, 106),
                text: Color::Rgb(216, 222, 233),
                accent: Color::Rgb(235, 203, 139),
                paddle: Color::Rgb(143, 188, 187),
                ball: Color::Rgb(191, 97, 106),
            },
            GameTheme::HighContrast => ThemeColors {
                background: Color::Black,
                border: Color::White,
                net: Color::White,
                text: Color::White,
                accent: Color::Yellow,
                paddle: Color::Rgb(0, 255, 255),
                ball: Color::Rgb(255, 0, 0),
            },
        }
    }
}
