//! Tier capacities for a 2Q cache

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Capacities of the three 2Q tiers
///
/// `recent` and `frequent` bound value-holding entries, `ghost` bounds the
/// key-only history of entries evicted from `recent`. The three are
/// independent budgets: `recent + frequent` may exceed the total a config
/// was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwoQueueConfig {
    /// A1in: entries seen once
    pub recent: usize,
    /// A1out: keys recently evicted from `recent`
    pub ghost: usize,
    /// Am: entries proven to recur
    pub frequent: usize,
}

impl TwoQueueConfig {
    /// Explicit capacities
    pub const fn new(recent: usize, ghost: usize, frequent: usize) -> Self {
        Self {
            recent,
            ghost,
            frequent,
        }
    }

    /// Derive capacities from a single total: 25% recent, 50% ghost, 75% frequent
    ///
    /// Each share is rounded down.
    pub const fn from_total(size: usize) -> Self {
        Self {
            recent: size / 4,
            ghost: size / 2,
            // floor(3 * size / 4) without overflowing on huge totals
            frequent: size / 4 * 3 + (size % 4) * 3 / 4,
        }
    }

    /// Explicit capacities from signed integers, rejecting negatives
    pub fn from_signed(recent: i64, ghost: i64, frequent: i64) -> Result<Self> {
        Ok(Self {
            recent: checked_capacity("recent", recent)?,
            ghost: checked_capacity("ghost", ghost)?,
            frequent: checked_capacity("frequent", frequent)?,
        })
    }

    /// Largest number of value-holding entries the cache can reach
    pub const fn total_values(&self) -> usize {
        self.recent.saturating_add(self.frequent)
    }
}

impl Default for TwoQueueConfig {
    fn default() -> Self {
        Self::from_total(1024)
    }
}

/// Accepts a single total (`"10000"`) or `recent:ghost:frequent`
/// (`"2500:5000:7500"`).
impl FromStr for TwoQueueConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').map(str::trim).collect();

        match parts.as_slice() {
            [total] => {
                let total = checked_capacity("total", total.parse::<i64>()?)?;
                Ok(Self::from_total(total))
            }
            [recent, ghost, frequent] => {
                Self::from_signed(
                recent.parse::<i64>()?,
                ghost.parse::<i64>()?,
                frequent.parse::<i64>()?,
            )
            }
            other => Err(Error::Parse(format!(
                "expected a total or recent:ghost:frequent, got {} parts",
                other.len()
            ))),
        }
    }
}

impl fmt::Display for TwoQueueConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.recent, self.ghost, self.frequent)
    }
}

fn checked_capacity(tier: &'static str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(Error::NegativeCapacity { tier, value });
    }
    usize::try_from(value).map_err(|_| Error::CapacityTooLarge { tier, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_total_split() {
        let config = TwoQueueConfig::from_total(10000);
        assert_eq!(config, TwoQueueConfig::new(2500, 5000, 7500));

        let config = TwoQueueConfig::from_total(7);
        assert_eq!(config, TwoQueueConfig::new(1, 3, 5));

        let config = TwoQueueConfig::from_total(1);
        assert_eq!(config, TwoQueueConfig::new(0, 0, 0));
    }

    #[test]
    fn test_from_total_huge() {
        let config = TwoQueueConfig::from_total(usize::MAX);
        assert_eq!(config.frequent, usize::MAX / 4 * 3 + 2);
        assert_eq!(config.total_values(), usize::MAX - 1);
    }

    #[test]
    fn test_from_signed_rejects_negative() {
        let err = TwoQueueConfig::from_signed(4, -1, 4).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeCapacity { tier: "ghost", value: -1 }
        ));

        let config = TwoQueueConfig::from_signed(0, 0, 0).unwrap();
        assert_eq!(config, TwoQueueConfig::new(0, 0, 0));
    }

    #[test]
    fn test_parse_total() {
        let config: TwoQueueConfig = " 256 ".parse().unwrap();
        assert_eq!(config, TwoQueueConfig::new(64, 128, 192));
    }

    #[test]
    fn test_parse_explicit() {
        let config: TwoQueueConfig = "32 : 64 : 96".parse().unwrap();
        assert_eq!(config, TwoQueueConfig::new(32, 64, 96));
        assert_eq!(config.to_string(), "32:64:96");
        assert_eq!(config.to_string().parse::<TwoQueueConfig>().unwrap(), config);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1:2".parse::<TwoQueueConfig>(),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            "".parse::<TwoQueueConfig>(),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            "4:x:4".parse::<TwoQueueConfig>(),
            Err(Error::InvalidNumber(_))
        ));
        assert!(matches!(
            "-8".parse::<TwoQueueConfig>(),
            Err(Error::NegativeCapacity { tier: "total", value: -8 })
        ));
    }

    #[test]
    fn test_default() {
        let config = TwoQueueConfig::default();
        assert_eq!(config, TwoQueueConfig::new(256, 512, 768));
    }
}
