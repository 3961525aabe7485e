use crate::database::enums::sql_value::SqlValue;
use crate::database::structs::column_value_pair::ColumnValuePair;
use std::str::FromStr;

impl ColumnValuePair {
    pub fn new(column: impl Into<String>, value: impl Into<SqlValue>) -> ColumnValuePair {
        ColumnValuePair {
            column: column.into(),
            value: value.into(),
        }
    }
}

impl<C: Into<String>, V: Into<SqlValue>> From<(C, V)> for ColumnValuePair {
    fn from((column, value): (C, V)) -> Self {
        ColumnValuePair::new(column, value)
    }
}

impl FromStr for ColumnValuePair {
    type Err = String;

    /// Parses `column=value`; the value goes through [`SqlValue::parse_literal`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (column, value) = input
            .split_once('=')
            .ok_or_else(|| format!("expected column=value, got '{}'", input))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("missing column name in '{}'", input));
        }
        Ok(ColumnValuePair::new(column, SqlValue::parse_literal(value)))
    }
}
