//! Connection settings for the seed loader.

use serde::{Deserialize, Serialize};

/// Environment variable holding the MongoDB connection string.
pub const URI_ENV: &str = "MONGODB_URI";

/// Environment variable holding the target database name.
pub const DATABASE_ENV: &str = "MONGODB_DATABASE";

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Database seeded when `MONGODB_DATABASE` is not set.
pub const DEFAULT_DATABASE: &str = "cafe_mongo";

/// Configuration for a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Database selected on the connected client.
    pub database: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl SeedConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup, falling back to
    /// the defaults for missing or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };

        Self {
            uri: read(URI_ENV, defaults.uri),
            database: read(DATABASE_ENV, defaults.database),
        }
    }

    /// Sets the target database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database, "cafe_mongo");
    }

    #[test]
    fn test_lookup_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (URI_ENV, "mongodb://db.internal:27018"),
            (DATABASE_ENV, "cafe_staging"),
        ]);
        let config = SeedConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.uri, "mongodb://db.internal:27018");
        assert_eq!(config.database, "cafe_staging");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = SeedConfig::from_lookup(|key| match key {
            URI_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config, SeedConfig::default());
    }

    #[test]
    fn test_with_database() {
        let config = SeedConfig::default().with_database("cafe_test");
        assert_eq!(config.database, "cafe_test");
        assert_eq!(config.uri, DEFAULT_URI);
    }
}
