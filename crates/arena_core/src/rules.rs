//! Terminal thresholds for an arena run

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, ArenaResult};
use crate::record::KEY_STRIDE;

/// Default number of wins that ends a run
pub const DEFAULT_MAX_WINS: u16 = 12;

/// Default number of losses that ends a run
pub const DEFAULT_MAX_LOSSES: u16 = 3;

/// When a participant's run is over.
///
/// A record is terminal once it reaches `max_wins` wins or `max_losses` losses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaRules {
    pub max_wins: u16,
    pub max_losses: u16,
}

impl Default for ArenaRules {
    fn default() -> Self {
        Self {
            max_wins: DEFAULT_MAX_WINS,
            max_losses: DEFAULT_MAX_LOSSES,
        }
    }
}

impl ArenaRules {
    pub fn new(max_wins: u16, max_losses: u16) -> ArenaResult<Self> {
        let rules = Self {
            max_wins,
            max_losses,
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> ArenaResult<()> {
        if self.max_wins == 0 {
            return Err(ArenaError::InvalidRules(
                "max_wins must be at least 1".to_string(),
            ));
        }
        if self.max_losses == 0 {
            return Err(ArenaError::InvalidRules(
                "max_losses must be at least 1".to_string(),
            ));
        }
        if self.max_losses as u32 >= KEY_STRIDE {
            return Err(ArenaError::InvalidRules(format!(
                "max_losses must be below {}",
                KEY_STRIDE
            )));
        }
        Ok(())
    }

    /// Number of distinct records a participant can ever hold
    pub fn reachable_records(&self) -> usize {
        (self.max_wins as usize + 1) * (self.max_losses as usize + 1)
    }

    /// Most games any single participant can play in one run
    pub fn max_games(&self) -> u32 {
        self.max_wins as u32 + self.max_losses as u32 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = ArenaRules::default();
        assert_eq!(rules.max_wins, 12);
        assert_eq!(rules.max_losses, 3);
        assert!(rules.validate().is_ok());
        assert_eq!(rules.max_games(), 14);
        assert_eq!(rules.reachable_records(), 52);
    }

    #[test]
    fn test_reject_degenerate_rules() {
        assert!(matches!(ArenaRules::new(0, 3), Err(ArenaError::InvalidRules(_))));
        assert!(matches!(ArenaRules::new(12, 0), Err(ArenaError::InvalidRules(_))));
        assert!(matches!(ArenaRules::new(12, 1000), Err(ArenaError::InvalidRules(_))));
        assert!(ArenaRules::new(7, 2).is_ok());
    }
}
