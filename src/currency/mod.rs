use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Digits after the decimal point in every rendered amount.
pub const DISPLAY_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Presentation preferences applied to currency amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub symbol: String,
    pub negative_style: NegativeStyle,
    pub group_thousands: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            negative_style: NegativeStyle::Sign,
            group_thousands: false,
        }
    }
}

/// Renders `amount` as `$1234.50`, `-$12.00` or `($12.00)`.
pub fn format_currency(amount: f64, options: &FormatOptions) -> String {
    let body = format_number(amount.abs(), options.group_thousands);
    let rendered = format!("{}{}", options.symbol, body);
    // -0.004 rounds to zero and must not render as negative.
    if amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        match options.negative_style {
            NegativeStyle::Sign => format!("-{}", rendered),
            NegativeStyle::Parentheses => format!("({})", rendered),
        }
    } else {
        rendered
    }
}

/// Formats with the default `$` / two-decimal style.
pub fn format_usd(amount: f64) -> String {
    format_currency(amount, &FormatOptions::default())
}

fn format_number(value: f64, group_thousands: bool) -> String {
    let raw = format!("{:.*}", DISPLAY_PRECISION, value);
    if !group_thousands {
        return raw;
    }
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// Parses user-typed amounts such as `1200`, `$1,200.50` or `-40`.
///
/// At most one leading `-` and one `$` are accepted. Group separators (`,` or
/// `_`) must sit between digits. Sign and range checks are left to entry
/// validation.
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let unparsable = || ValidationError::UnparsableAmount(trimmed.to_string());

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let body = unsigned.strip_prefix('$').unwrap_or(unsigned);
    if !body.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
        return Err(unparsable());
    }

    let mut cleaned = String::with_capacity(body.len());
    let mut after_separator = false;
    for ch in body.chars() {
        let separator = ch == ',' || ch == '_';
        if separator && after_separator {
            return Err(unparsable());
        }
        if !separator {
            cleaned.push(ch);
        }
        after_separator = separator;
    }
    if after_separator {
        return Err(unparsable());
    }

    let value: f64 = cleaned.parse().map_err(|_| unparsable())?;
    if !value.is_finite() {
        return Err(unparsable());
    }
    Ok(if negative { -value } else { value })
}
