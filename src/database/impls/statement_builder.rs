use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::DatabaseError;
use crate::database::structs::column_value_pair::ColumnValuePair;
use crate::database::structs::sql_fragment::SqlFragment;
use crate::database::structs::statement::Statement;
use crate::database::structs::statement_builder::StatementBuilder;

impl StatementBuilder {
    pub fn new(engine: DatabaseDrivers) -> Self {
        Self { engine }
    }

    /// Builds a parameterized insert. Values are bound in the order of
    /// `pairs`; column and table names are inlined as given.
    pub fn build_insert(&self, table: &str, pairs: &[ColumnValuePair]) -> Result<Statement, DatabaseError> {
        if pairs.is_empty() {
            return Err(DatabaseError::EmptyInsert(table.to_string()));
        }
        let columns: Vec<&str> = pairs.iter().map(|pair| pair.column.as_str()).collect();
        let placeholders: Vec<String> = (1..=pairs.len())
            .map(|index| self.engine.placeholder(index))
            .collect();
        Ok(Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                placeholders.join(", ")
            ),
            values: pairs.iter().map(|pair| pair.value.clone()).collect(),
        })
    }

    pub fn build_select(&self, table: &str, condition: Option<&SqlFragment>) -> String {
        match condition {
            None => format!("SELECT * FROM {}", table),
            Some(condition) => format!("SELECT * FROM {} WHERE {}", table, condition),
        }
    }

    pub fn build_update(&self, table: &str, set_clause: &SqlFragment, condition: &SqlFragment) -> String {
        format!("UPDATE {} SET {} WHERE {}", table, set_clause, condition)
    }

    pub fn build_delete(&self, table: &str, condition: &SqlFragment) -> String {
        format!("DELETE FROM {} WHERE {}", table, condition)
    }
}
