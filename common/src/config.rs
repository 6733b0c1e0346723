use std::{env, str::FromStr};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    constants::{DEFAULT_DIFFICULTY, DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH},
    error::MazeError,
};

/// Maze settings for a game session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub difficulty: f64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            difficulty: DEFAULT_DIFFICULTY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads `MAZE_WIDTH`, `MAZE_HEIGHT`, `MAZE_DIFFICULTY` and `MAZE_SEED`,
    /// loading a `.env` file first if there is one.
    pub fn from_env() -> Result<Self, MazeError> {
        Self::from_env_with(|_| None)
    }

    /// Like [`GameConfig::from_env`], except that keys `overrides` answers for
    /// never reach the environment, so a bad value there can't fail them.
    pub fn from_env_with(
        overrides: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MazeError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| overrides(key).or_else(|| env::var(key).ok()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MazeError> {
        let defaults = Self::default();

        let config = Self {
            width: parse_var(&lookup, "MAZE_WIDTH")?.unwrap_or(defaults.width),
            height: parse_var(&lookup, "MAZE_HEIGHT")?.unwrap_or(defaults.height),
            difficulty: parse_var(&lookup, "MAZE_DIFFICULTY")?.unwrap_or(defaults.difficulty),
            seed: parse_var(&lookup, "MAZE_SEED")?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.difficulty.is_finite() {
            return Err(MazeError::InvalidConfig(format!(
                "difficulty must be a finite number, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Seeded if a seed was given, otherwise seeded from the thread RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, MazeError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    let value = value.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| MazeError::InvalidConfig(format!("{key}={value} is not valid")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::Rng;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
        assert_eq!(config.difficulty, 0.7);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_reads_every_key() {
        let config = GameConfig::from_lookup(lookup(&[
            ("MAZE_WIDTH", "20"),
            ("MAZE_HEIGHT", " 15 "),
            ("MAZE_DIFFICULTY", "\"0.25\""),
            ("MAZE_SEED", "99"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            GameConfig {
                width: 20,
                height: 15,
                difficulty: 0.25,
                seed: Some(99),
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("MAZE_WIDTH", "wide")])),
            Err(MazeError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("MAZE_HEIGHT", "0")])),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            GameConfig::from_lookup(lookup(&[("MAZE_DIFFICULTY", "NaN")])),
            Err(MazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
