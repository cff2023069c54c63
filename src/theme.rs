use crate::config::{DisplayConfig, ThemeName};
use colored::{Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A terminal color as written in the config file.
///
/// Accepts the names `colored` knows (`"red"`, `"bright black"`, `"bright_black"`)
/// and `#rrggbb` hex values. Anything else falls back to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ColorName(Color);

impl ColorName {
    pub fn color(self) -> Color {
        self.0
    }
}

impl From<ColorName> for String {
    fn from(name: ColorName) -> Self {
        let text = match name.0 {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright black",
            Color::BrightRed => "bright red",
            Color::BrightGreen => "bright green",
            Color::BrightYellow => "bright yellow",
            Color::BrightBlue => "bright blue",
            Color::BrightMagenta => "bright magenta",
            Color::BrightCyan => "bright cyan",
            Color::BrightWhite => "bright white",
            Color::TrueColor { r, g, b } => return format!("#{:02x}{:02x}{:02x}", r, g, b),
        };
        text.to_string()
    }
}

impl From<String> for ColorName {
    fn from(text: String) -> Self {
        match parse_color(&text) {
            Some(color) => ColorName(color),
            None => {
                warn!(color = %text, "unknown color name, using white");
                ColorName(Color::White)
            }
        }
    }
}

impl From<Color> for ColorName {
    fn from(color: Color) -> Self {
        ColorName(color)
    }
}

fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        return Some(Color::TrueColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        });
    }
    text.replace(['_', '-'], " ").parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorName>,
    pub bold: bool,
    pub underline: bool,
}

/// Per-element replacements from the `[display.colors]` config table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_high: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_low: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_example: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<ColorScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<ColorScheme>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub header: ColorScheme,
    pub title: ColorScheme,
    pub confidence_high: ColorScheme,
    pub confidence_low: ColorScheme,
    pub bad_example: ColorScheme,
    pub solution: ColorScheme,
    pub fix: ColorScheme,
    pub muted: ColorScheme,
}

fn fg(color: Color, bold: bool) -> ColorScheme {
    ColorScheme {
        foreground: Some(color.into()),
        background: None,
        bold,
        underline: false,
    }
}

fn replace(slot: &mut ColorScheme, replacement: &Option<ColorScheme>) {
    if let Some(scheme) = replacement {
        *slot = scheme.clone();
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: fg(Color::Blue, true),
            title: fg(Color::Yellow, true),
            confidence_high: fg(Color::Green, true),
            confidence_low: fg(Color::Yellow, false),
            bad_example: fg(Color::Red, false),
            solution: fg(Color::Green, false),
            fix: fg(Color::Cyan, false),
            muted: fg(Color::BrightBlack, false),
        }
    }
}

impl Theme {
    /// Preset named in the config with any `[display.colors]` entries laid over it.
    pub fn from_config(display: &DisplayConfig) -> Self {
        let mut theme = Self::from_name(display.theme);
        theme.apply_overrides(&display.colors);
        theme
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::Monochrome => Self::monochrome(),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn light() -> Self {
        Self {
            header: fg(Color::BrightBlue, true),
            title: fg(Color::Magenta, true),
            confidence_high: fg(Color::Green, true),
            confidence_low: fg(Color::Magenta, false),
            bad_example: fg(Color::BrightRed, false),
            solution: fg(Color::BrightGreen, false),
            fix: fg(Color::Blue, false),
            muted: fg(Color::Black, false),
        }
    }

    pub fn monochrome() -> Self {
        Self {
            header: ColorScheme {
                bold: true,
                underline: true,
                ..Default::default()
            },
            title: ColorScheme {
                bold: true,
                ..Default::default()
            },
            confidence_high: ColorScheme {
                bold: true,
                ..Default::default()
            },
            confidence_low: ColorScheme::default(),
            bad_example: ColorScheme::default(),
            solution: ColorScheme::default(),
            fix: ColorScheme {
                underline: true,
                ..Default::default()
            },
            muted: ColorScheme::default(),
        }
    }

    pub fn apply_overrides(&mut self, overrides: &ThemeOverrides) {
        replace(&mut self.header, &overrides.header);
        replace(&mut self.title, &overrides.title);
        replace(&mut self.confidence_high, &overrides.confidence_high);
        replace(&mut self.confidence_low, &overrides.confidence_low);
        replace(&mut self.bad_example, &overrides.bad_example);
        replace(&mut self.solution, &overrides.solution);
        replace(&mut self.fix, &overrides.fix);
        replace(&mut self.muted, &overrides.muted);
    }

    /// Color for a confidence badge.
    pub fn confidence(&self, confidence: f64) -> &ColorScheme {
        if confidence >= 0.8 {
            &self.confidence_high
        } else {
            &self.confidence_low
        }
    }
}

impl ColorScheme {
    pub fn apply(&self, text: &str) -> ColoredString {
        let mut colored_text: ColoredString = text.into();

        if let Some(fg) = self.foreground {
            colored_text = colored_text.color(fg.color());
        }
        if let Some(bg) = self.background {
            colored_text = colored_text.on_color(bg.color());
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }
}
