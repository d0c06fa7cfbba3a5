//! Engine and runner configuration.

use std::str::FromStr;

use crate::automaton::neighbors::Strategy;
use crate::error::{LifeError, Result};

/// Runtime knobs for building and driving an engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Neighbor counting strategy.
    pub strategy: Strategy,
    /// Seed for the initial random grid; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Generations the headless runner advances.
    pub generations: u64,
    /// Log a progress line every this many generations (0 = never).
    pub report_every: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Vectorized,
            seed: None,
            generations: 300,
            // Once per second at 30 frames per second
            report_every: 30,
        }
    }
}

impl EngineConfig {
    /// Read positional arguments `[generations] [strategy] [seed]`.
    /// Missing arguments keep their defaults; malformed ones are errors.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(n) = args.next() {
            config.generations = parse_number("generations", n.as_ref())?;
        }
        if let Some(name) = args.next() {
            config.strategy = name.as_ref().parse()?;
        }
        if let Some(seed) = args.next() {
            config.seed = Some(parse_number("seed", seed.as_ref())?);
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| LifeError::BadArgument {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, Strategy::Vectorized);
        assert_eq!(config.seed, None);
        assert_eq!(config.generations, 300);
    }

    #[test]
    fn test_from_args() {
        let config = EngineConfig::from_args(["50", "direct", "9"]).unwrap();
        assert_eq!(config.generations, 50);
        assert_eq!(config.strategy, Strategy::Direct);
        assert_eq!(config.seed, Some(9));

        let config = EngineConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config.generations, 300);

        assert_eq!(
            EngineConfig::from_args(["10", "bogus"]).unwrap_err(),
            LifeError::UnknownStrategy("bogus".to_string())
        );
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        // A mistyped seed must not quietly fall back to entropy
        assert_eq!(
            EngineConfig::from_args(["50", "direct", "12x"]).unwrap_err(),
            LifeError::BadArgument {
                name: "seed",
                value: "12x".to_string()
            }
        );
        assert_eq!(
            EngineConfig::from_args(["fifty"]).unwrap_err(),
            LifeError::BadArgument {
                name: "generations",
                value: "fifty".to_string()
            }
        );
        assert!(EngineConfig::from_args(["-1"]).is_err());
    }
}
