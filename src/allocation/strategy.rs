use serde::{Deserialize, Serialize};

use crate::allocation::{
    error::{AllocationError, configuration_error},
    types::CostCeiling,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Maximises unlocked items with no ordering constraint.
    GlobalGreedy {
        #[serde(default)]
        ceiling: CostCeiling,
    },
    /// Unlocks a contiguous run from the first catalog position.
    PrefixCrawl {
        #[serde(default)]
        ceiling: CostCeiling,
    },
    /// Fixed cost lines deciding coins versus fast passes in one pass.
    ThresholdSplit {
        #[serde(default)]
        coins_line: Option<u64>,
        #[serde(default)]
        fastpass_line: Option<u64>,
    },
}

impl Default for AllocationStrategy {
    fn default() -> Self {
        Self::GlobalGreedy { ceiling: None }
    }
}

impl AllocationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GlobalGreedy { .. } => "global_greedy",
            Self::PrefixCrawl { .. } => "prefix_crawl",
            Self::ThresholdSplit { .. } => "threshold_split",
        }
    }

    pub fn validate(&self) -> Result<(), AllocationError> {
        let Self::ThresholdSplit {
            coins_line,
            fastpass_line,
        } = self
        else {
            return Ok(());
        };

        match (coins_line, fastpass_line) {
            (None, None) => Err(configuration_error(
                "either coins_line or fastpass_line must be set",
            )),
            (Some(coins_line), Some(fastpass_line)) if coins_line >= fastpass_line => {
                Err(configuration_error(format!(
                    "coins_line ({}) must be less than fastpass_line ({})",
                    coins_line, fastpass_line
                )))
            }
            _ => Ok(()),
        }
    }
}
