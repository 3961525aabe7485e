use crate::database::enums::sql_value::SqlValue;
use crate::database::structs::row::Row;

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<SqlValue>) -> Row {
        Row { columns, values }
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.values.get(index))
    }

    pub fn contains(&self, value: &SqlValue) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
