use crate::database::traits::database_backend::DatabaseBackend;

pub enum GatewayState {
    Open(Box<dyn DatabaseBackend>),
    Closed,
}
