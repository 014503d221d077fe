//! Horizontal text bar charts for budget datasets.

use std::fmt::Write;

use crate::cli::ui::style::UiStyle;
use crate::core::services::ChartPoint;
use crate::currency::{format_currency, FormatOptions};

pub const MIN_BAR_WIDTH: usize = 10;
pub const MAX_BAR_WIDTH: usize = 50;

/// Bar chart rendered line by line: label, bar, formatted amount, optional share.
pub struct BarChart<'a> {
    pub title: &'a str,
    pub points: &'a [ChartPoint],
    pub bar_width: usize,
    pub show_shares: bool,
}

impl<'a> BarChart<'a> {
    pub fn new(title: &'a str, points: &'a [ChartPoint]) -> Self {
        Self {
            title,
            points,
            bar_width: MAX_BAR_WIDTH,
            show_shares: false,
        }
    }

    /// Fits the bars into `columns` terminal columns.
    pub fn fit_to(mut self, columns: usize) -> Self {
        let label_width = self.label_width();
        let reserved = label_width + 2 + 16;
        self.bar_width = columns
            .saturating_sub(reserved)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);
        self
    }

    pub fn with_shares(mut self) -> Self {
        self.show_shares = true;
        self
    }

    fn label_width(&self) -> usize {
        self.points
            .iter()
            .map(|point| point.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self, options: &FormatOptions, style: &UiStyle) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", style.header(self.title));
        if self.points.is_empty() {
            let _ = writeln!(out, "(no data)");
            return out;
        }

        let label_width = self.label_width();
        let max_abs = self
            .points
            .iter()
            .map(|point| point.amount.abs())
            .fold(0.0_f64, f64::max);
        let share_total: f64 = self.points.iter().map(|point| point.amount).sum();

        for point in self.points {
            let length = if max_abs > 0.0 {
                ((point.amount.abs() / max_abs) * self.bar_width as f64).round() as usize
            } else {
                0
            };
            let bar = if point.amount < 0.0 {
                style.apply_negative_style(&style.negative_bar.to_string().repeat(length))
            } else {
                style.bar.to_string().repeat(length)
            };
            let padding = " ".repeat(self.bar_width - length.min(self.bar_width));
            let mut line = format!(
                "{:<label_width$}  {}{} {}",
                point.label,
                bar,
                padding,
                format_currency(point.amount, options),
                label_width = label_width
            );
            if self.show_shares && share_total > 0.0 {
                let _ = write!(line, " ({:.1}%)", point.amount / share_total * 100.0);
            }
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}
