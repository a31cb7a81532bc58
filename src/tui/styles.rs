//! TUI theme and styling

use ratatui::style::Color;
use tracing::warn;

pub const AVAILABLE_THEMES: &[&str] = &["light", "dark"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => {
                warn!("Unknown theme '{}', falling back to light", name);
                Self::Light
            }
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,
    pub status_bar: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Feedback
    pub error: Color,
    pub success: Color,

    // UI elements
    pub search: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),
            border: Color::Rgb(160, 160, 160),
            selection: Color::Rgb(220, 228, 240),
            status_bar: Color::Rgb(236, 236, 236),

            title: Color::Rgb(0, 0, 0),
            text: Color::Rgb(20, 20, 20),
            dimmed: Color::Rgb(120, 120, 120),
            hint: Color::Rgb(70, 100, 150),

            error: Color::Rgb(190, 30, 30),
            success: Color::Rgb(30, 130, 60),

            search: Color::Rgb(30, 80, 160),
            accent: Color::Rgb(30, 80, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            border: Color::Rgb(90, 90, 90),
            selection: Color::Rgb(45, 50, 65),
            status_bar: Color::Rgb(28, 28, 28),

            title: Color::Rgb(255, 255, 255),
            text: Color::Rgb(235, 235, 235),
            dimmed: Color::Rgb(140, 140, 140),
            hint: Color::Rgb(130, 170, 230),

            error: Color::Rgb(255, 100, 80),
            success: Color::Rgb(90, 220, 130),

            search: Color::Rgb(160, 200, 255),
            accent: Color::Rgb(120, 170, 255),
        }
    }
}
