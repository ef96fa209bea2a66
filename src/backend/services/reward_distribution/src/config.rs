use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::models::activity::{
    BASE_INCENTIVE_GTT, DISPUTE_BONUS_GTT, DISPUTE_WEIGHT, REVIEW_BONUS_GTT, REVIEW_WEIGHT,
    VOTE_WEIGHT,
};
use crate::utils::errors::{DistributionError, Result};

/// Per-category weights of the reputation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationWeights {
    pub vote_weight: u32,
    pub review_weight: u32,
    pub dispute_weight: u32,
}

impl Default for ReputationWeights {
    fn default() -> Self {
        Self {
            vote_weight: VOTE_WEIGHT,
            review_weight: REVIEW_WEIGHT,
            dispute_weight: DISPUTE_WEIGHT,
        }
    }
}

/// Base reward plus per-unit bonuses used for incentive awards.
///
/// Amounts are stored as `i64` because TOML integers are 64-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncentivePolicy {
    pub base_reward: i64,
    pub dispute_bonus: u32,
    pub review_bonus: u32,
    /// Upper bound applied to each award, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_cap: Option<i64>,
}

impl Default for IncentivePolicy {
    fn default() -> Self {
        Self {
            base_reward: BASE_INCENTIVE_GTT as i64,
            dispute_bonus: DISPUTE_BONUS_GTT,
            review_bonus: REVIEW_BONUS_GTT,
            reward_cap: None,
        }
    }
}

impl IncentivePolicy {
    pub fn validate(&self) -> Result<()> {
        if self.base_reward < 0 {
            return Err(DistributionError::Config(format!(
                "incentive.base_reward must be non-negative, got {}",
                self.base_reward
            )));
        }
        if let Some(cap) = self.reward_cap {
            if cap < 0 {
                return Err(DistributionError::Config(format!(
                    "incentive.reward_cap must be non-negative, got {}",
                    cap
                )));
            }
        }
        Ok(())
    }
}

/// How the admission queue reacts to malformed requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionMode {
    /// Reject the offending request and keep going.
    #[default]
    Lenient,
    /// Fail the whole batch before anything is debited.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionPolicy {
    pub mode: AdmissionMode,
    /// Largest amount a single request may ask for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_request_amount: Option<i64>,
}

/// Policy tables for a disbursement cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub reputation: ReputationWeights,
    pub incentive: IncentivePolicy,
    pub admission: AdmissionPolicy,
}

impl DistributionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config = toml::from_str::<DistributionConfig>(raw)
            .map_err(|e| DistributionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DistributionError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| DistributionError::Config(format!("{}: {}", dir.display(), e)))?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| DistributionError::Config(e.to_string()))?;
        fs::write(path, toml)
            .map_err(|e| DistributionError::Config(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.incentive.validate()?;
        if let Some(limit) = self.admission.max_request_amount {
            if limit < 0 {
                return Err(DistributionError::Config(format!(
                    "admission.max_request_amount must be non-negative, got {}",
                    limit
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_policy_constants() {
        let config = DistributionConfig::default();
        assert_eq!(config.reputation.vote_weight, 2);
        assert_eq!(config.reputation.review_weight, 3);
        assert_eq!(config.reputation.dispute_weight, 5);
        assert_eq!(config.incentive.base_reward, 50);
        assert_eq!(config.incentive.dispute_bonus, 20);
        assert_eq!(config.incentive.review_bonus, 10);
        assert_eq!(config.incentive.reward_cap, None);
        assert_eq!(config.admission.mode, AdmissionMode::Lenient);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config = DistributionConfig::from_toml_str(
            r#"
            [incentive]
            base_reward = 75
            reward_cap = 500

            [admission]
            mode = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(config.incentive.base_reward, 75);
        assert_eq!(config.incentive.reward_cap, Some(500));
        assert_eq!(config.incentive.dispute_bonus, 20);
        assert_eq!(config.reputation, ReputationWeights::default());
        assert_eq!(config.admission.mode, AdmissionMode::Strict);
        assert_eq!(config.admission.max_request_amount, None);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = DistributionConfig::from_toml_str("[incentive]\nbase_reward = -1\n").unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));

        let err =
            DistributionConfig::from_toml_str("[admission]\nmax_request_amount = -5\n").unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = DistributionConfig::from_toml_str("[reputation\nvote_weight = 2").unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));
    }
}
