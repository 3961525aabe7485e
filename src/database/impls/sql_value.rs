use crate::database::enums::sql_value::SqlValue;
use std::fmt;

impl SqlValue {
    /// Reads a command-line literal: `null`, `true`/`false`, integers and
    /// floats become typed values, anything else is text. Wrapping the
    /// literal in single quotes forces text, and so does a leading zero
    /// (`01234`) so codes keep their digits.
    pub fn parse_literal(input: &str) -> SqlValue {
        if input.len() >= 2 && input.starts_with('\'') && input.ends_with('\'') {
            return SqlValue::Text(input[1..input.len() - 1].to_string());
        }
        if input.eq_ignore_ascii_case("null") {
            return SqlValue::Null;
        }
        if input.eq_ignore_ascii_case("true") {
            return SqlValue::Bool(true);
        }
        if input.eq_ignore_ascii_case("false") {
            return SqlValue::Bool(false);
        }
        if has_leading_zero(input) {
            return SqlValue::Text(input.to_string());
        }
        if let Ok(int) = input.parse::<i64>() {
            return SqlValue::Int(int);
        }
        match input.parse::<f64>() {
            Ok(float) if float.is_finite() => SqlValue::Float(float),
            _ => SqlValue::Text(input.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

fn has_leading_zero(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input).as_bytes();
    digits.len() > 1 && digits[0] == b'0' && digits[1].is_ascii_digit()
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(value) => write!(f, "{}", value),
            SqlValue::Int(value) => write!(f, "{}", value),
            SqlValue::Float(value) => write!(f, "{}", value),
            SqlValue::Text(value) => write!(f, "{}", value),
            SqlValue::Bytes(value) => write!(f, "<{} bytes>", value.len()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            None => SqlValue::Null,
            Some(value) => value.into(),
        }
    }
}
