//! Lenient field deserializers for catalog rows.
//!
//! Catalog exports are inconsistent: the same column may hold numbers,
//! numeric strings, empty strings, `null` or free text. These deserializers
//! never fail on a bad value; anything that cannot be read as the target type
//! becomes `None`, and the row is kept.

use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Raw cell content before coercion.
#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum Cell {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn read_cell<'de, D>(deserializer: D) -> Result<Option<Cell>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Cell>::deserialize(deserializer)
}

/// Coerces a text cell to a finite float.
pub fn coerce_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces a float to an integer year, rejecting fractional or out-of-range values.
fn whole_i32(value: f64) -> Option<i32> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i32::MIN as f64
        && value <= i32::MAX as f64
    {
        Some(value as i32)
    } else {
        None
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM` (first of the month) or a timestamp whose
/// first ten characters are a date.
pub fn coerce_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date);
    }
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_cell(deserializer)? {
        Some(Cell::Number(v)) if v.is_finite() => Some(v),
        Some(Cell::Text(s)) => coerce_f64(&s),
        _ => None,
    })
}

pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_cell(deserializer)? {
        Some(Cell::Number(v)) => whole_i32(v),
        Some(Cell::Text(s)) => coerce_f64(&s).and_then(whole_i32),
        _ => None,
    })
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_cell(deserializer)? {
        Some(Cell::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    })
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_cell(deserializer)? {
        Some(Cell::Text(s)) => coerce_date(&s),
        _ => None,
    })
}

/// Accepts `true`/`false`, `1`/`0` and their string forms.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match read_cell(deserializer)? {
        Some(Cell::Bool(b)) => Some(b),
        Some(Cell::Number(v)) if v == 1.0 => Some(true),
        Some(Cell::Number(v)) if v == 0.0 => Some(false),
        Some(Cell::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}
