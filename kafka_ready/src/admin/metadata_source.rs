use crate::connection_settings::ConfigMap;
use std::time::Duration;

/// Read side of an admin client. Dropping the client closes it.
pub trait ClusterMetadataSource {
    /// Number of brokers currently reported in the cluster metadata.
    fn broker_count(&self, timeout: Duration) -> Result<usize, anyhow::Error>;
}

pub trait AdminClientFactory {
    type Client: ClusterMetadataSource;

    fn create(&self, config: &ConfigMap) -> Result<Self::Client, anyhow::Error>;
}
