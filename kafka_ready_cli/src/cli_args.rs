use clap::Parser;
use kafka_ready::connection_settings::ConnectionSettings;
use std::path::PathBuf;
use std::time::Duration;

/// Check if a kafka cluster is ready: waits until the cluster reports at
/// least MIN_NUM_BROKERS brokers, failing after TIMEOUT_SECS seconds.
#[derive(Parser, Debug)]
#[clap(name = "kafka-ready", version)]
pub struct CliArgs {
    /// Minimum number of brokers to wait for
    #[clap(value_name = "MIN_NUM_BROKERS", value_parser = clap::value_parser!(u32).range(1..))]
    pub min_num_brokers: u32,

    /// Time in seconds to wait for the brokers
    #[clap(value_name = "TIMEOUT_SECS", value_parser)]
    pub timeout_secs: u64,

    /// Comma-separated list of kafka brokers
    #[clap(short = 'b', long, env = "KAFKA_READY_BOOTSTRAP_SERVERS", value_parser)]
    pub bootstrap_servers: Option<String>,

    /// Path to a kafka client properties file
    #[clap(short = 'c', long = "config", env = "KAFKA_READY_CONFIG", value_parser)]
    pub config: Option<PathBuf>,

    /// Which protocol to use when communicating with brokers
    #[clap(short = 's', long, env = "KAFKA_READY_SECURITY_PROTOCOL", value_parser)]
    pub security_protocol: Option<String>,
}

impl CliArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl From<&CliArgs> for ConnectionSettings {
    fn from(value: &CliArgs) -> Self {
        ConnectionSettings {
            bootstrap_servers: value.bootstrap_servers.clone(),
            config_file: value.config.clone(),
            security_protocol: value.security_protocol.clone(),
        }
    }
}
