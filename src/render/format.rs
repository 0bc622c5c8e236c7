use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number formatting conventions for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    #[serde(rename = "nl-NL")]
    Dutch,
    #[serde(rename = "en-US")]
    English,
}

impl Locale {
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::Dutch => ',',
            Locale::English => '.',
        }
    }

    pub fn grouping_separator(self) -> char {
        match self {
            Locale::Dutch => '.',
            Locale::English => ',',
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Dutch => "nl-NL",
            Locale::English => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "nl" | "nl-nl" => Ok(Locale::Dutch),
            "en" | "en-us" => Ok(Locale::English),
            other => Err(format!("unsupported locale '{}' (expected nl-NL or en-US)", other)),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

fn group_thousands(mut value: u64, separator: char) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(&separator.to_string())
}

/// Formats a non-negative value with exactly one decimal, rounding half away from zero.
pub fn format_one_decimal(value: f64, locale: Locale) -> String {
    let tenths = (value.max(0.0) * 10.0).round() as u64;
    format!(
        "{}{}{}",
        group_thousands(tenths / 10, locale.grouping_separator()),
        locale.decimal_separator(),
        tenths % 10
    )
}

/// `0.5` → `"50,0%"` in Dutch.
pub fn format_percentage(ratio: f64, locale: Locale) -> String {
    format!("{}%", format_one_decimal(ratio * 100.0, locale))
}

/// Decimal megabytes (10^6 bytes), e.g. `"1,2 megabyte"`.
pub fn format_megabytes(bytes: u64, locale: Locale) -> String {
    format!("{} megabyte", format_one_decimal(bytes as f64 / 1e6, locale))
}
