//! Deserializers for values posted by the browser form.
//!
//! Every input element submits a string, so `""` stands for "not supplied"
//! and numbers may arrive as `"5"`. Anything that cannot be parsed is
//! rejected here instead of being handed to the database to coerce.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if blank(&s) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if blank(&s) => Ok(None),
        Some(value) => parse_int(&value).map(Some).map_err(D::Error::custom),
    }
}

/// Accepts `true`/`false`, `1`/`0` (as numbers or strings) and the unit
/// labels `lbs`/`kgs`.
pub fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(1) => Ok(Some(true)),
            Some(0) => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("invalid unit flag `{n}`"))),
        },
        Some(Value::String(s)) if blank(&s) => Ok(None),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "lbs" => Ok(Some(true)),
            "0" | "false" | "kgs" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("invalid unit flag `{s}`"))),
        },
        Some(other) => Err(D::Error::custom(format!("invalid unit flag `{other}`"))),
    }
}

pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if blank(&s) => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid date `{s}`, expected YYYY-MM-DD"))),
        Some(other) => Err(D::Error::custom(format!("invalid date `{other}`"))),
    }
}

/// Row ids come back from the DOM as strings.
pub fn record_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_int(&value).map_err(D::Error::custom)
}

fn parse_int(value: &Value) -> Result<i32, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| format!("`{n}` is not a whole number in range")),
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("`{s}` is not a whole number")),
        other => Err(format!("expected a whole number, found {other}")),
    }
}
