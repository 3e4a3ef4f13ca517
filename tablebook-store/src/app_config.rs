use chrono::Duration;
use serde::Deserialize;
use std::env;
use tablebook_shared::models::DEFAULT_BOOKING_DURATION_MINUTES;
use tablebook_shared::TableId;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub restaurant: RestaurantConfig,
    #[serde(default)]
    pub booking_rules: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestaurantConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tables")]
    pub tables: Vec<TableConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub number: TableId,
    pub capacity: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BookingRules {
    #[serde(default = "default_duration_minutes")]
    pub booking_duration_minutes: i64,
    /// Parties up to this size may sit at any table.
    #[serde(default = "default_small_party_max")]
    pub small_party_max_covers: u32,
    /// Larger parties are only auto-assigned from this table number upwards.
    #[serde(default = "default_large_party_first_table")]
    pub large_party_first_table: TableId,
    /// Use the table the caller asked for instead of auto-assigning.
    #[serde(default)]
    pub honor_requested_table: bool,
}

fn default_name() -> String {
    "Restaurant".to_string()
}

fn default_duration_minutes() -> i64 {
    DEFAULT_BOOKING_DURATION_MINUTES
}

fn default_small_party_max() -> u32 {
    2
}

fn default_large_party_first_table() -> TableId {
    5
}

/// Tables 1-4 seat two, 5-8 seat four, 9-10 seat six.
fn default_tables() -> Vec<TableConfig> {
    (1..=10)
        .map(|number| TableConfig {
            number,
            capacity: match number {
                1..=4 => 2,
                5..=8 => 4,
                _ => 6,
            },
        })
        .collect()
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tables: default_tables(),
        }
    }
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            booking_duration_minutes: default_duration_minutes(),
            small_party_max_covers: default_small_party_max(),
            large_party_first_table: default_large_party_first_table(),
            honor_requested_table: false,
        }
    }
}

impl BookingRules {
    pub fn booking_duration(&self) -> Duration {
        Duration::minutes(self.booking_duration_minutes)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-specific overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `TABLEBOOK__BOOKING_RULES__HONOR_REQUESTED_TABLE=true`
            .add_source(config::Environment::with_prefix("TABLEBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_the_standard_floor() {
        let config = Config::default();
        assert_eq!(config.restaurant.tables.len(), 10);
        assert_eq!(config.restaurant.tables[0], TableConfig { number: 1, capacity: 2 });
        assert_eq!(config.restaurant.tables[4], TableConfig { number: 5, capacity: 4 });
        assert_eq!(config.restaurant.tables[9], TableConfig { number: 10, capacity: 6 });
        assert_eq!(config.booking_rules.booking_duration(), Duration::hours(2));
        assert!(!config.booking_rules.honor_requested_table);
    }

    #[test]
    fn test_toml_overrides() {
        let config = Config::from_toml_str(
            r#"
            [restaurant]
            name = "Chez Nous"
            tables = [
                { number = 1, capacity = 2 },
                { number = 2, capacity = 8 },
            ]

            [booking_rules]
            booking_duration_minutes = 90
            honor_requested_table = true
            "#,
        )
        .unwrap();

        assert_eq!(config.restaurant.name, "Chez Nous");
        assert_eq!(config.restaurant.tables.len(), 2);
        assert_eq!(config.restaurant.tables[1].capacity, 8);
        assert_eq!(config.booking_rules.booking_duration(), Duration::minutes(90));
        assert!(config.booking_rules.honor_requested_table);
        assert_eq!(config.booking_rules.small_party_max_covers, 2);
        assert_eq!(config.booking_rules.large_party_first_table, 5);
    }

    #[test]
    fn test_empty_source_falls_back_to_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.restaurant.tables, default_tables());
        assert_eq!(config.booking_rules, BookingRules::default());
    }

    #[test]
    fn test_load_reads_environment_overrides() {
        env::set_var("TABLEBOOK__BOOKING_RULES__HONOR_REQUESTED_TABLE", "true");
        let loaded = Config::load();
        env::remove_var("TABLEBOOK__BOOKING_RULES__HONOR_REQUESTED_TABLE");

        let config = loaded.unwrap();
        assert!(config.booking_rules.honor_requested_table);
        assert_eq!(config.restaurant.tables, default_tables());
        assert_eq!(config.booking_rules.booking_duration(), Duration::hours(2));
    }
}
