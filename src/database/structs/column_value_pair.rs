use crate::database::enums::sql_value::SqlValue;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValuePair {
    pub column: String,
    pub value: SqlValue,
}
