use crate::render::color::Rgb;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Ansi256,
    NoColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    System,
    Latte,
    Mocha,
}

impl ThemeName {
    pub fn from_str_or_system(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "latte" => Self::Latte,
            "mocha" => Self::Mocha,
            _ => Self::System,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ThemeName::System => "System",
            ThemeName::Latte => "Latte",
            ThemeName::Mocha => "Mocha",
        }
    }

    fn palette(self) -> ThemePalette {
        match self {
            ThemeName::System => ThemePalette {
                text: Rgb(220, 220, 220),
                subtext: Rgb(150, 150, 150),
                base: Rgb(0, 0, 0),
                surface: Rgb(48, 48, 48),
                accent: Rgb(50, 156, 255),
            },
            ThemeName::Latte => ThemePalette {
                text: Rgb(0x4c, 0x4f, 0x69),
                subtext: Rgb(0x6c, 0x6f, 0x85),
                base: Rgb(0xef, 0xf1, 0xf5),
                surface: Rgb(0xcc, 0xd0, 0xda),
                accent: Rgb(0x88, 0x39, 0xef),
            },
            ThemeName::Mocha => ThemePalette {
                text: Rgb(0xcd, 0xd6, 0xf4),
                subtext: Rgb(0xa6, 0xad, 0xc8),
                base: Rgb(0x1e, 0x1e, 0x2e),
                surface: Rgb(0x31, 0x32, 0x44),
                accent: Rgb(0xcb, 0xa6, 0xf7),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    pub text: Rgb,
    pub subtext: Rgb,
    pub base: Rgb,
    pub surface: Rgb,
    pub accent: Rgb,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: ThemePalette,
    pub capability: ColorCapability,
}

impl Theme {
    pub fn load(name: &str) -> Self {
        Self::with_capability(ThemeName::from_str_or_system(name), detect_color_capability())
    }

    pub fn with_capability(name: ThemeName, capability: ColorCapability) -> Self {
        Self {
            name,
            palette: name.palette(),
            capability,
        }
    }

    /// Map any painter color through the terminal's color capability.
    pub fn color(&self, c: Rgb) -> Color {
        map_color(self.capability, c)
    }

    pub fn color_text(&self) -> Color {
        self.color(self.palette.text)
    }
    pub fn color_subtext(&self) -> Color {
        self.color(self.palette.subtext)
    }
    pub fn color_base(&self) -> Color {
        self.color(self.palette.base)
    }
    pub fn color_surface(&self) -> Color {
        self.color(self.palette.surface)
    }
    pub fn color_accent(&self) -> Color {
        self.color(self.palette.accent)
    }
}

pub fn detect_color_capability() -> ColorCapability {
    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        return ColorCapability::Ansi256;
    }

    ColorCapability::NoColor
}

fn map_color(cap: ColorCapability, c: Rgb) -> Color {
    match cap {
        ColorCapability::TrueColor => Color::Rgb(c.0, c.1, c.2),
        ColorCapability::Ansi256 => Color::Indexed(rgb_to_ansi256(c.0, c.1, c.2)),
        ColorCapability::NoColor => Color::Reset,
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 color cube, 16..231
    let r6 = (r as u16 * 5 / 255) as u8;
    let g6 = (g as u16 * 5 / 255) as u8;
    let b6 = (b as u16 * 5 / 255) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_system() {
        assert_eq!(ThemeName::from_str_or_system("MOCHA"), ThemeName::Mocha);
        assert_eq!(ThemeName::from_str_or_system("frappe"), ThemeName::System);
    }

    #[test]
    fn capability_controls_color_mapping() {
        let true_color = Theme::with_capability(ThemeName::Mocha, ColorCapability::TrueColor);
        assert_eq!(true_color.color(Rgb(1, 2, 3)), Color::Rgb(1, 2, 3));

        let indexed = Theme::with_capability(ThemeName::Mocha, ColorCapability::Ansi256);
        assert_eq!(indexed.color(Rgb(255, 0, 0)), Color::Indexed(196));
        assert_eq!(indexed.color(Rgb(0, 0, 0)), Color::Indexed(16));

        let none = Theme::with_capability(ThemeName::Mocha, ColorCapability::NoColor);
        assert_eq!(none.color(Rgb(9, 9, 9)), Color::Reset);
    }
}
