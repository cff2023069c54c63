use crate::config::{Config, ThemeName};
use crate::theme::{ColorName, ColorScheme, Theme};
use anyhow::Result;
use colored::Color;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn parse(text: &str) -> Color {
    ColorName::from(text.to_string()).color()
}

#[test]
fn test_color_names() {
    assert_eq!(parse("red"), Color::Red);
    assert_eq!(parse("bright black"), Color::BrightBlack);
    assert_eq!(parse("BRIGHT_BLACK"), Color::BrightBlack);
    assert_eq!(parse("bright-cyan"), Color::BrightCyan);
    assert_eq!(parse("#ff8000"), Color::TrueColor { r: 255, g: 128, b: 0 });
}

#[test]
fn test_unknown_color_falls_back_to_white() {
    assert_eq!(parse("chartreuse"), Color::White);
    assert_eq!(parse("#12345"), Color::White);
    assert_eq!(parse("#gg0000"), Color::White);
    assert_eq!(parse(""), Color::White);
}

#[test]
fn test_color_names_are_written_back_parseable() {
    assert_eq!(String::from(ColorName::from(Color::BrightBlack)), "bright black");
    assert_eq!(String::from(ColorName::from(Color::Magenta)), "magenta");
    assert_eq!(
        String::from(ColorName::from(Color::TrueColor { r: 0, g: 0, b: 128 })),
        "#000080"
    );
    assert_eq!(parse("bright black"), Color::BrightBlack);
}

#[test]
fn test_display_colors_override_preset() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r##"[display]
theme = "monochrome"

[display.colors.title]
foreground = "red"
bold = true

[display.colors.muted]
foreground = "chartreuse"
background = "#000080"
"##,
    )?;

    let config = Config::load(&path)?;
    let theme = Theme::from_config(&config.display);
    let monochrome = Theme::monochrome();

    assert_eq!(
        theme.title,
        ColorScheme {
            foreground: Some(Color::Red.into()),
            background: None,
            bold: true,
            underline: false,
        }
    );
    assert_eq!(theme.muted.foreground, Some(Color::White.into()));
    assert_eq!(
        theme.muted.background,
        Some(Color::TrueColor { r: 0, g: 0, b: 128 }.into())
    );
    assert_eq!(theme.header, monochrome.header);
    assert_eq!(theme.fix, monochrome.fix);
    Ok(())
}

#[test]
fn test_config_with_colors_round_trips() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.display.theme = ThemeName::Light;
    config.display.colors.fix = Some(ColorScheme {
        foreground: Some(Color::TrueColor { r: 255, g: 128, b: 0 }.into()),
        background: Some(Color::BrightWhite.into()),
        bold: false,
        underline: true,
    });
    fs::write(&path, toml::to_string_pretty(&config)?)?;

    let loaded = Config::load(&path)?;

    assert_eq!(loaded, config);
    assert_eq!(Some(Theme::from_config(&loaded.display).fix), config.display.colors.fix);
    Ok(())
}

#[test]
fn test_presets_without_overrides() {
    let config = Config::default();

    assert_eq!(Theme::from_config(&config.display), Theme::dark());
    assert_eq!(Theme::from_name(ThemeName::Light), Theme::light());

    let theme = Theme::dark();
    assert_eq!(theme.confidence(0.8), &theme.confidence_high);
    assert_eq!(theme.confidence(0.79), &theme.confidence_low);
}
