use std::env;

pub const DEFAULT_LOG_FILTER: &str = "fitol=debug,tower_http=debug";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Install the built-in programs when the seed version changes.
    pub seed_defaults: bool,
}

fn flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:fitol.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            seed_defaults: env::var("SEED_DEFAULTS")
                .map(|v| flag(&v))
                .unwrap_or(true),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert!(flag("1"));
        assert!(flag("true"));
        assert!(flag("yes"));
        assert!(!flag("0"));
        assert!(!flag("False"));
        assert!(!flag(" off "));
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            seed_defaults: false,
        };
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
