use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Theme;

const USER_THEME_APP_DIR: &str = "torus-snake";

/// Errors raised while loading one theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// Classic green-on-black; also the fallback for missing theme fields.
#[must_use]
pub fn classic_theme() -> Theme {
    Theme {
        name: "Classic".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Green,
        food: Color::Red,
        field_dot: Color::DarkGray,
        border: Color::White,
        hud_title: Color::Green,
        hud_text: Color::Gray,
        end_text: Color::Red,
    }
}

fn ocean_theme() -> Theme {
    Theme {
        name: "Ocean".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Cyan,
        food: Color::Yellow,
        field_dot: Color::DarkGray,
        border: Color::Cyan,
        hud_title: Color::Cyan,
        hud_text: Color::Gray,
        end_text: Color::LightRed,
    }
}

fn neon_theme() -> Theme {
    Theme {
        name: "Neon".to_owned(),
        snake_head: Color::White,
        snake_body: Color::Magenta,
        food: Color::Yellow,
        field_dot: Color::DarkGray,
        border: Color::Magenta,
        hud_title: Color::Magenta,
        hud_text: Color::Gray,
        end_text: Color::LightMagenta,
    }
}

/// All themes known to this run, built-ins first.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
    selected_idx: usize,
}

impl ThemeCatalog {
    /// Loads the built-in themes, then overlays user themes from the config
    /// directory.
    ///
    /// A user theme sharing a built-in's name replaces it; files that fail
    /// to parse are skipped with a warning on stderr. The catalog is never
    /// empty.
    #[must_use]
    pub fn load() -> Self {
        let mut themes = vec![classic_theme(), ocean_theme(), neon_theme()];

        if let Some(dir) = user_theme_dir() {
            merge_theme_dir(&dir, &mut themes);
        }

        Self {
            themes,
            selected_idx: 0,
        }
    }

    /// Returns the currently selected theme.
    #[must_use]
    pub fn current(&self) -> &Theme {
        &self.themes[self.selected_idx]
    }

    /// Iterates over theme names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|theme| theme.name.as_str())
    }

    /// Selects a theme by case-insensitive name. Returns false when unknown.
    pub fn select(&mut self, name: &str) -> bool {
        if let Some(idx) = self
            .themes
            .iter()
            .position(|theme| theme.name.eq_ignore_ascii_case(name))
        {
            self.selected_idx = idx;
            return true;
        }

        false
    }
}

/// On-disk theme shape. Every color is optional; missing fields fall back
/// to the classic theme.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    snake_head: Option<String>,
    #[serde(default)]
    snake_body: Option<String>,
    #[serde(default)]
    food: Option<String>,
    #[serde(default)]
    field_dot: Option<String>,
    #[serde(default)]
    border: Option<String>,
    #[serde(default)]
    hud_title: Option<String>,
    #[serde(default)]
    hud_text: Option<String>,
    #[serde(default)]
    end_text: Option<String>,
}

fn merge_theme_dir(dir: &Path, themes: &mut Vec<Theme>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_json_file(path))
        .collect();
    paths.sort();

    for path in paths {
        match load_theme_file(&path) {
            Ok(theme) => upsert_theme(themes, theme),
            Err(error) => {
                eprintln!("Warning: skipping theme file {}: {error}", path.display());
            }
        }
    }
}

fn upsert_theme(themes: &mut Vec<Theme>, theme: Theme) {
    if let Some(existing) = themes
        .iter_mut()
        .find(|existing| existing.name.eq_ignore_ascii_case(&theme.name))
    {
        *existing = theme;
    } else {
        themes.push(theme);
    }
}

fn load_theme_file(path: &Path) -> Result<Theme, ThemeError> {
    let raw = fs::read_to_string(path)?;
    parse_theme(&raw, || file_stem_name(path))
}

fn parse_theme(raw: &str, default_name: impl FnOnce() -> String) -> Result<Theme, ThemeError> {
    let parsed: ThemeFile = serde_json::from_str(raw)?;
    let fallback = classic_theme();

    Ok(Theme {
        name: parsed.name.unwrap_or_else(default_name),
        snake_head: resolve_color(parsed.snake_head, fallback.snake_head)?,
        snake_body: resolve_color(parsed.snake_body, fallback.snake_body)?,
        food: resolve_color(parsed.food, fallback.food)?,
        field_dot: resolve_color(parsed.field_dot, fallback.field_dot)?,
        border: resolve_color(parsed.border, fallback.border)?,
        hud_title: resolve_color(parsed.hud_title, fallback.hud_title)?,
        hud_text: resolve_color(parsed.hud_text, fallback.hud_text)?,
        end_text: resolve_color(parsed.end_text, fallback.end_text)?,
    })
}

fn resolve_color(value: Option<String>, fallback: Color) -> Result<Color, ThemeError> {
    match value {
        None => Ok(fallback),
        Some(raw) => parse_color(&raw).ok_or(ThemeError::UnknownColor(raw)),
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn file_stem_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("custom")
        .to_owned()
}

fn user_theme_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config_dir| config_dir.join(USER_THEME_APP_DIR).join("themes"))
}
