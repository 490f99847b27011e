//! Coercion of resolved values according to a `parse` directive.
//!
//! A structured path specification such as
//! `{"path": "/c/0", "parse": "number"}` resolves its path and then converts
//! the final value with the named [`ParseKind`].
//!
//! | Kind | Accepts | Produces |
//! |------|---------|----------|
//! | `number` | numbers, numeric strings, booleans, dates | `Value::Number` (integer when integral text) |
//! | `integer` | integral numbers or strings, booleans, dates | `Value::Number(Number::Integer)` |
//! | `boolean` | booleans, `"true"`/`"false"`, numbers (non-zero is `true`) | `Value::Bool` |
//! | `string` | any scalar | `Value::String` |
//! | `date` | dates, RFC 3339 or `YYYY-MM-DD` strings, epoch milliseconds | `Value::Date` |
//!
//! Containers and `null` never coerce.

use crate::{Error, Number, Result, Value};
use chrono::{NaiveDate, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseKind {
    Number,
    Integer,
    Boolean,
    String,
    Date,
}

impl ParseKind {
    /// Returns the name used in path specifications.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParseKind::Number => "number",
            ParseKind::Integer => "integer",
            ParseKind::Boolean => "boolean",
            ParseKind::String => "string",
            ParseKind::Date => "date",
        }
    }

    /// Coerces `value` to this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nds_path::{ParseKind, Value};
    ///
    /// assert_eq!(ParseKind::Number.apply(&Value::from("4")).unwrap(), Value::from(4));
    /// assert_eq!(ParseKind::Number.apply(&Value::from(" 2.5 ")).unwrap(), Value::from(2.5));
    /// assert!(ParseKind::Number.apply(&Value::from("four")).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] when the value cannot be represented as this kind.
    pub fn apply(self, value: &Value) -> Result<Value> {
        let coerced = match self {
            ParseKind::Number => to_number(value),
            ParseKind::Integer => to_integer(value),
            ParseKind::Boolean => to_boolean(value),
            ParseKind::String => to_string(value),
            ParseKind::Date => to_date(value),
        };
        coerced.ok_or_else(|| Error::parse(self, value))
    }
}

impl fmt::Display for ParseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "number" => Ok(ParseKind::Number),
            "integer" => Ok(ParseKind::Integer),
            "boolean" => Ok(ParseKind::Boolean),
            "string" => Ok(ParseKind::String),
            "date" => Ok(ParseKind::Date),
            other => Err(Error::invalid_path_spec(format!(
                "unknown parse kind {:?}",
                other
            ))),
        }
    }
}

fn parse_numeric_text(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(i) = text.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    // Rust accepts "inf"/"NaN"; numeric text here must be finite.
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}

fn to_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => Some(Value::Number(n.clone())),
        Value::String(s) => parse_numeric_text(s).map(Value::Number),
        Value::Bool(b) => Some(Value::from(i64::from(*b))),
        Value::Date(dt) => Some(Value::from(dt.timestamp_millis())),
        _ => None,
    }
}

fn to_integer(value: &Value) -> Option<Value> {
    match to_number(value)? {
        Value::Number(n) => n.as_i64().map(Value::from),
        _ => None,
    }
}

fn to_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(b) => Some(Value::Bool(*b)),
        Value::Number(n) => Some(Value::Bool(n.as_f64() != 0.0)),
        Value::String(s) => match s.trim() {
            t if t.eq_ignore_ascii_case("true") => Some(Value::Bool(true)),
            t if t.eq_ignore_ascii_case("false") => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

fn to_string(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(Value::String(s.clone())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::Date(dt) => Some(Value::String(dt.to_rfc3339())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn to_date(value: &Value) -> Option<Value> {
    match value {
        Value::Date(dt) => Some(Value::Date(*dt)),
        Value::Number(n) => {
            let millis = n.as_i64()?;
            Utc.timestamp_millis_opt(millis).single().map(Value::Date)
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
                return Some(Value::Date(dt.with_timezone(&Utc)));
            }
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
            let midnight = date.and_hms_opt(0, 0, 0)?;
            Some(Value::Date(Utc.from_utc_datetime(&midnight)))
        }
        _ => None,
    }
}
