use crate::connection_settings::ConfigMap;
use std::time::Duration;

#[derive(Debug)]
pub struct WaitClusterReadyQueryInternal {
    pub config: ConfigMap,
    pub min_brokers: usize,
    pub timeout: Duration,
}
