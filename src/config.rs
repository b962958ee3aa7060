//! Runtime settings for the HRMS service.
//!
//! The defaults are the fixed values the service has always used. Each one can
//! be overridden from the environment (or a `.env` file loaded in `main`).

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "fiber-hrms";
pub const DEFAULT_COLLECTION: &str = "employees";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Connection and listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the config from `HRMS_*` environment variables, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            mongodb_uri: lookup("HRMS_MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database: lookup("HRMS_DATABASE").unwrap_or(defaults.database),
            collection: lookup("HRMS_COLLECTION").unwrap_or(defaults.collection),
            bind_addr: lookup("HRMS_BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "fiber-hrms");
        assert_eq!(config.collection, "employees");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn overrides_only_what_is_set() {
        let config = AppConfig::from_lookup(|key| match key {
            "HRMS_DATABASE" => Some("hrms-test".to_string()),
            _ => None,
        });
        assert_eq!(config.database, "hrms-test");
        assert_eq!(config.collection, DEFAULT_COLLECTION);
    }
}
