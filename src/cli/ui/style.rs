use std::sync::{OnceLock, RwLock};

use colored::{Color, Colorize};

use crate::cli::output::{color_enabled, current_preferences};

const DEFAULT_TERMINAL_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub bar: char,
    pub negative_bar: char,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub color_negative: Option<Color>,
    pub plain_mode: bool,
}

static STYLE: OnceLock<RwLock<UiStyle>> = OnceLock::new();

pub fn style() -> UiStyle {
    STYLE
        .get_or_init(|| RwLock::new(UiStyle::detect()))
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| UiStyle::plain())
}

pub fn refresh_style() {
    if let Some(lock) = STYLE.get() {
        if let Ok(mut guard) = lock.write() {
            *guard = UiStyle::detect();
        }
    } else {
        let _ = STYLE.set(RwLock::new(UiStyle::detect()));
    }
}

impl UiStyle {
    fn detect() -> Self {
        let prefs = current_preferences();
        if prefs.plain_mode {
            return Self::plain();
        }
        let use_color = color_enabled(&prefs);
        Self {
            header_prefix: "⮞ ".into(),
            horizontal: '─',
            bar: '█',
            negative_bar: '░',
            use_color,
            color_header: use_color.then_some(Color::BrightBlue),
            color_negative: use_color.then_some(Color::BrightRed),
            plain_mode: false,
        }
    }

    /// ASCII-only style without colour, used for scripts and snapshots.
    pub fn plain() -> Self {
        Self {
            header_prefix: "> ".into(),
            horizontal: '-',
            bar: '#',
            negative_bar: '-',
            use_color: false,
            color_header: None,
            color_negative: None,
            plain_mode: true,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width)
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        match (self.use_color, self.color_header) {
            (true, Some(color)) => text.color(color).bold().to_string(),
            (true, None) => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    pub fn apply_negative_style(&self, text: &str) -> String {
        match (self.use_color, self.color_negative) {
            (true, Some(color)) => text.color(color).to_string(),
            _ => text.to_string(),
        }
    }

    pub fn header(&self, title: &str) -> String {
        self.apply_header_style(&format!("{}{}", self.header_prefix, title))
    }
}

/// Current terminal width, or 80 columns when it cannot be queried.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .ok()
        .filter(|columns| *columns > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_is_ascii() {
        let style = UiStyle::plain();
        assert_eq!(style.header("Budget"), "> Budget");
        assert_eq!(style.horizontal_line(3), "---");
        assert!(!style.use_color);
    }
}
