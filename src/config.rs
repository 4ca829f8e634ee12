/// Configuration management
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    3003
}

fn default_database_url() -> String {
    "sqlite://eventmanager.sqlite".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should deserialize");
        assert_eq!(config.server_port, 3003);
        assert_eq!(config.database_url, "sqlite://eventmanager.sqlite");
        assert_eq!(config.max_connections, 5);
    }
}
