use crate::database::enums::sql_value::SqlValue;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Row {
    pub columns: Vec<String>,
    pub values: Vec<SqlValue>,
}
