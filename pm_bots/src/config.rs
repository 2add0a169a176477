//! Simulator configuration.
//!
//! Values come from the environment (a `.env` file is honored) and can be
//! overridden from the command line.

use pokermon::Chips;
use std::path::PathBuf;

/// Most seats a simulated table can hold.
pub const MAX_SEATS: usize = 10;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Seed for reproducible runs; random when absent
    pub seed: Option<u64>,
    /// Number of hands to play
    pub hands: usize,
    /// Number of AI seats
    pub players: usize,
    /// Starting stack per seat
    pub buy_in: Chips,
    /// Forced contribution per hand
    pub ante: Chips,
    /// JSON file with extra personalities for the seats
    pub personalities: Option<PathBuf>,
    /// Print the summary as JSON
    pub json: bool,
}

/// Command line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub hands: Option<usize>,
    pub players: Option<usize>,
    pub buy_in: Option<Chips>,
    pub ante: Option<Chips>,
    pub personalities: Option<PathBuf>,
    pub json: bool,
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values given on the command line, which win over the
    ///   environment
    ///
    /// # Errors
    ///
    /// Returns error if a set variable cannot be parsed or the result fails
    /// validation
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_env_opt("PM_SEED")?,
        };

        let config = SimConfig {
            seed,
            hands: overrides.hands.unwrap_or(parse_env_or("PM_HANDS", 100)?),
            players: overrides.players.unwrap_or(parse_env_or("PM_PLAYERS", 4)?),
            buy_in: overrides.buy_in.unwrap_or(parse_env_or("PM_BUY_IN", 1000)?),
            ante: overrides.ante.unwrap_or(parse_env_or("PM_ANTE", 10)?),
            personalities: overrides
                .personalities
                .or_else(|| std::env::var_os("PM_PERSONALITIES").map(PathBuf::from)),
            json: overrides.json || parse_env_or("PM_JSON", false)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands == 0 {
            return Err(ConfigError::Invalid {
                var: "PM_HANDS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if !(2..=MAX_SEATS).contains(&self.players) {
            return Err(ConfigError::Invalid {
                var: "PM_PLAYERS".to_string(),
                reason: format!("Must be between 2 and {MAX_SEATS}"),
            });
        }

        if self.buy_in == 0 {
            return Err(ConfigError::Invalid {
                var: "PM_BUY_IN".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.ante >= self.buy_in {
            return Err(ConfigError::Invalid {
                var: "PM_ANTE".to_string(),
                reason: format!("Must be less than the buy-in ({})", self.buy_in),
            });
        }

        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hands: 100,
            players: 4,
            buy_in: 1000,
            ante: 10,
            personalities: None,
            json: false,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    Ok(parse_env_opt(key)?.unwrap_or(default))
}

fn parse_env_opt<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse '{}'", value),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "PM_HANDS".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PM_HANDS"));
        assert!(msg.contains("greater than 0"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_hands() {
        let config = SimConfig {
            hands: 0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "PM_HANDS"));
    }

    #[test]
    fn test_config_validation_seat_count() {
        for players in [0, 1, MAX_SEATS + 1] {
            let config = SimConfig {
                players,
                ..SimConfig::default()
            };
            assert!(config.validate().is_err(), "{} seats should be rejected", players);
        }
    }

    #[test]
    fn test_config_validation_ante_too_large() {
        let config = SimConfig {
            buy_in: 100,
            ante: 100,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "PM_ANTE"));
    }

    #[test]
    fn test_overrides_win() {
        let config = SimConfig::from_env(Overrides {
            seed: Some(9),
            hands: Some(3),
            players: Some(2),
            buy_in: Some(500),
            ante: Some(5),
            personalities: None,
            json: true,
        })
        .expect("valid overrides");

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.hands, 3);
        assert_eq!(config.players, 2);
        assert_eq!(config.buy_in, 500);
        assert_eq!(config.ante, 5);
        assert!(config.json);
    }
}
