use crate::cli_args::CliArgs;
use anyhow::Context;
use kafka_ready::admin::{AdminClientFactory, RdKafkaAdminFactory};
use kafka_ready::clock::{Clock, SystemClock};
use kafka_ready::connection_settings::{ConfigMap, ConnectionSettings};
use kafka_ready::queries::wait_cluster_ready::{
    wait_cluster_ready, ClusterReady, WaitClusterReadyQueryInternal,
};
use tracing::{debug, info};

pub fn run(args: &CliArgs) -> Result<ClusterReady, anyhow::Error> {
    run_with(args, &RdKafkaAdminFactory, &SystemClock)
}

pub fn run_with<F, C>(args: &CliArgs, factory: &F, clock: &C) -> Result<ClusterReady, anyhow::Error>
where
    F: AdminClientFactory,
    C: Clock,
{
    let settings = ConnectionSettings::from(args);
    let config = ConfigMap::try_from(&settings).context("While building kafka config")?;

    // values may hold credentials
    debug!("Kafka config keys: {:?}", config.keys().collect::<Vec<_>>());
    info!(
        "Waiting for {} brokers at {}, timeout {}s",
        args.min_num_brokers,
        config.bootstrap_servers().unwrap_or_default(),
        args.timeout_secs
    );

    let query = WaitClusterReadyQueryInternal {
        config,
        min_brokers: args.min_num_brokers as usize,
        timeout: args.timeout(),
    };

    let ready = wait_cluster_ready(&query, factory, clock)
        .context("While waiting for kafka cluster")?;

    Ok(ready)
}
