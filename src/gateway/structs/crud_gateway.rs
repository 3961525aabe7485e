use crate::database::structs::statement_builder::StatementBuilder;
use crate::gateway::enums::gateway_state::GatewayState;

pub struct CrudGateway {
    pub(crate) backend_id: String,
    pub(crate) builder: StatementBuilder,
    pub(crate) state: GatewayState,
}
