use crate::gateway::types::BackendConstructor;
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct BackendFactory {
    pub(crate) constructors: BTreeMap<String, BackendConstructor>,
}
