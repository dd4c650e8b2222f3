/// Tunable parameters for the automatic exchange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExchangeConfig {
    /// Probability that one converted bundle rolls a reward drop, for units
    /// flagged to drop rewards. At the default every bundle draws a reward.
    pub reward_chance: f64,
}

impl ExchangeConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_REWARD_CHANCE: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            reward_chance: Self::DEFAULT_REWARD_CHANCE,
        }
    }

    pub fn with_reward_chance(reward_chance: f64) -> Self {
        Self { reward_chance }
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::new()
    }
}
