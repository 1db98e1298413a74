use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertiesError {
    #[error("Failed to open properties file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading properties file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReadyError {
    #[error("Invalid kafka config file")]
    Config(#[from] PropertiesError),
    #[error("bootstrap.servers must be provided via --bootstrap-servers flag or in config file")]
    MissingBootstrapServers,
    /// Not retried.
    #[error("Failed to create admin client")]
    ClientCreation(#[source] anyhow::Error),
    #[error("Timeout waiting for kafka: expected {expected} brokers but found {found}")]
    Timeout { expected: usize, found: usize },
}
