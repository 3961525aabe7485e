use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Debug, Clone, Copy)]
pub struct StatementBuilder {
    pub engine: DatabaseDrivers,
}
