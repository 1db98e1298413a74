use crate::admin::{AdminClientFactory, ClusterMetadataSource};
use crate::connection_settings::ConfigMap;
use anyhow::Context;
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use rdkafka::util::Timeout;
use rdkafka::ClientConfig;
use std::time::Duration;

pub struct AdminWrapper {
    client: AdminClient<DefaultClientContext>,
}

impl AdminWrapper {
    pub fn create(config: &ConfigMap) -> Result<Self, anyhow::Error> {
        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let client: AdminClient<DefaultClientContext> = ClientConfig::from(config)
            .create()
            .context("While creating kafka AdminClient")?;

        Ok(Self { client })
    }
}

impl ClusterMetadataSource for AdminWrapper {
    fn broker_count(&self, timeout: Duration) -> Result<usize, anyhow::Error> {
        let metadata = self
            .client
            .inner()
            .fetch_metadata(None, Timeout::After(timeout))
            .context("While fetching metadata")?;

        Ok(metadata.brokers().len())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RdKafkaAdminFactory;

impl AdminClientFactory for RdKafkaAdminFactory {
    type Client = AdminWrapper;

    fn create(&self, config: &ConfigMap) -> Result<Self::Client, anyhow::Error> {
        AdminWrapper::create(config)
    }
}

impl From<&ConfigMap> for ClientConfig {
    fn from(value: &ConfigMap) -> Self {
        client_config(value, std::env::var("RD_KAFKA_DEBUG").ok())
    }
}

/// `debug` is librdkafka's debug contexts; a `debug` key in `config` wins.
pub fn client_config(config: &ConfigMap, debug: Option<String>) -> ClientConfig {
    let mut client_config = ClientConfig::new();

    if let Some(debug) = debug {
        client_config.set("debug", debug);
    }

    for (key, value) in config.iter() {
        client_config.set(key, value);
    }

    client_config
}
