use ratatui::style::Color;

/// Base colour palette shared by every page
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub selection_text: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Special purpose colors
    pub accent: Color,
    pub highlight: Color,
}

/// Complete theme color scheme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub palette: ColorPalette,

    // Page-specific colors
    pub pages: PageColors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageColors {
    pub heading: Color,
    pub picture_title: Color,
    pub poem_title: Color,
    pub poem_text: Color,
    pub article_title: Color,
    pub article_meta: Color,
    pub link: Color,
}

impl ThemeColors {
    /// Deep space palette: near-black background with teal and cyan accents
    pub fn stellar_dark() -> Self {
        let palette = ColorPalette {
            background: Color::Rgb(17, 24, 39), // #111827
            surface: Color::Rgb(31, 41, 55),    // #1f2937

            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(209, 213, 219), // #d1d5db
            text_muted: Color::Rgb(107, 114, 128),     // #6b7280

            border: Color::Rgb(55, 65, 81),          // #374151
            border_focused: Color::Rgb(45, 212, 191), // #2dd4bf
            selection: Color::Rgb(45, 212, 191),
            selection_text: Color::Rgb(17, 24, 39),

            success: Color::Rgb(74, 222, 128), // #4ade80
            warning: Color::Rgb(250, 204, 21), // #facc15
            error: Color::Rgb(248, 113, 113),  // #f87171
            info: Color::Rgb(96, 165, 250),    // #60a5fa

            accent: Color::Rgb(45, 212, 191),    // #2dd4bf
            highlight: Color::Rgb(34, 211, 238), // #22d3ee
        };

        Self {
            pages: PageColors {
                heading: palette.text_primary,
                picture_title: palette.accent,
                poem_title: palette.highlight,
                poem_text: palette.text_secondary,
                article_title: palette.accent,
                article_meta: palette.text_muted,
                link: palette.info,
            },
            palette,
        }
    }

    /// Plain terminal colours for terminals without true colour
    pub fn basic() -> Self {
        let palette = ColorPalette {
            background: Color::Reset,
            surface: Color::Reset,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::Cyan,
            selection_text: Color::Black,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,

            accent: Color::Cyan,
            highlight: Color::LightCyan,
        };

        Self {
            pages: PageColors {
                heading: palette.text_primary,
                picture_title: palette.accent,
                poem_title: palette.highlight,
                poem_text: palette.text_secondary,
                article_title: palette.accent,
                article_meta: palette.text_muted,
                link: palette.info,
            },
            palette,
        }
    }
}
