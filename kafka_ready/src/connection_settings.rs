use crate::error::ReadyError;
use crate::properties::parse_properties_file;
use std::collections::hash_map;
use std::collections::HashMap;
use std::path::PathBuf;

pub const BOOTSTRAP_SERVERS: &str = "bootstrap.servers";
pub const SECURITY_PROTOCOL: &str = "security.protocol";

/// Client settings handed as-is to the kafka client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: HashMap<String, String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn bootstrap_servers(&self) -> Option<&str> {
        self.get(BOOTSTRAP_SERVERS)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { entries }
    }
}

/// Raw connection inputs. Empty strings count as not provided.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSettings {
    pub bootstrap_servers: Option<String>,
    pub config_file: Option<PathBuf>,
    pub security_protocol: Option<String>,
}

impl TryFrom<&ConnectionSettings> for ConfigMap {
    type Error = ReadyError;

    /// Explicit values override the ones read from the config file.
    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        let config_file = value
            .config_file
            .as_deref()
            .filter(|x| !x.as_os_str().is_empty());

        let mut config: ConfigMap = match config_file {
            Some(path) => parse_properties_file(path)?.into_iter().collect(),
            None => ConfigMap::new(),
        };

        if let Some(bootstrap_servers) = non_empty(value.bootstrap_servers.as_deref()) {
            config.set(BOOTSTRAP_SERVERS, bootstrap_servers);
        }

        if let Some(security_protocol) = non_empty(value.security_protocol.as_deref()) {
            config.set(SECURITY_PROTOCOL, security_protocol);
        }

        if non_empty(config.bootstrap_servers()).is_none() {
            return Err(ReadyError::MissingBootstrapServers);
        }

        Ok(config)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|x| !x.is_empty())
}
