use crate::config::{DistributionConfig, IncentivePolicy, ReputationWeights};
use crate::models::activity::{
    ActivityRecord, IncentiveAward, IncentiveBreakdown, ReputationBreakdown, ReputationScore,
};
use crate::models::Balance;
use crate::utils::errors::{DistributionError, Result};

/// Turns activity counters into a reputation score and an incentive award.
///
/// The two policies are independent weight tables over the same record and
/// are not expected to agree numerically. Both computations are pure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreEngine {
    weights: ReputationWeights,
    incentive: IncentivePolicy,
}

impl ScoreEngine {
    /// Fails with `Config` when the incentive policy carries a negative base
    /// reward or cap, which would otherwise surface as negative awards.
    pub fn new(weights: ReputationWeights, incentive: IncentivePolicy) -> Result<Self> {
        incentive.validate()?;
        Ok(Self { weights, incentive })
    }

    pub fn from_config(config: &DistributionConfig) -> Result<Self> {
        Self::new(config.reputation, config.incentive)
    }

    pub fn weights(&self) -> &ReputationWeights {
        &self.weights
    }

    pub fn incentive_policy(&self) -> &IncentivePolicy {
        &self.incentive
    }

    pub fn compute_reputation(&self, activity: &ActivityRecord) -> Result<ReputationScore> {
        ensure_non_negative(activity)?;

        // i64 * u32 always fits in i128, and so does the sum of three of them.
        let breakdown = ReputationBreakdown {
            votes: weighted(activity.votes_cast, self.weights.vote_weight),
            reviews: weighted(activity.capsules_reviewed, self.weights.review_weight),
            disputes: weighted(activity.disputes_resolved, self.weights.dispute_weight),
        };

        Ok(ReputationScore {
            total_score: breakdown.votes + breakdown.reviews + breakdown.disputes,
            breakdown,
        })
    }

    pub fn compute_incentive(&self, activity: &ActivityRecord) -> Result<IncentiveAward> {
        ensure_non_negative(activity)?;

        let breakdown = IncentiveBreakdown {
            base: Balance::from(self.incentive.base_reward),
            disputes: weighted(activity.disputes_resolved, self.incentive.dispute_bonus),
            reviews: weighted(activity.capsules_reviewed, self.incentive.review_bonus),
        };
        let uncapped = breakdown
            .base
            .saturating_add(breakdown.disputes)
            .saturating_add(breakdown.reviews);

        let (total_reward_gtt, capped) = match self.incentive.reward_cap.map(Balance::from) {
            Some(cap) if uncapped > cap => (cap, true),
            _ => (uncapped, false),
        };

        Ok(IncentiveAward {
            total_reward_gtt,
            breakdown,
            capped,
        })
    }
}

fn weighted(count: i64, weight: u32) -> i128 {
    i128::from(count) * i128::from(weight)
}

fn ensure_non_negative(activity: &ActivityRecord) -> Result<()> {
    match activity.negative_counter() {
        Some((field, value)) => Err(DistributionError::InvalidActivity {
            participant_id: None,
            reason: format!("{} must be non-negative, got {}", field, value),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reputation_uses_fixed_weights() {
        let engine = ScoreEngine::default();
        let score = engine
            .compute_reputation(&ActivityRecord::new(10, 5, 2))
            .unwrap();

        assert_eq!(score.breakdown.votes, 20);
        assert_eq!(score.breakdown.reviews, 15);
        assert_eq!(score.breakdown.disputes, 10);
        assert_eq!(score.total_score, 45);
    }

    #[test]
    fn incentive_adds_bonuses_to_base() {
        let engine = ScoreEngine::default();
        let award = engine
            .compute_incentive(&ActivityRecord::new(10, 5, 2))
            .unwrap();

        assert_eq!(award.breakdown.base, 50);
        assert_eq!(award.breakdown.disputes, 40);
        assert_eq!(award.breakdown.reviews, 50);
        assert_eq!(award.total_reward_gtt, 140);
        assert!(!award.capped);
    }

    #[test]
    fn idle_participant_still_earns_base() {
        let engine = ScoreEngine::default();
        let activity = ActivityRecord::default();

        assert_eq!(engine.compute_reputation(&activity).unwrap().total_score, 0);
        assert_eq!(engine.compute_incentive(&activity).unwrap().total_reward_gtt, 50);
    }

    #[test]
    fn votes_do_not_affect_incentive() {
        let engine = ScoreEngine::default();
        let quiet = engine.compute_incentive(&ActivityRecord::new(0, 3, 1)).unwrap();
        let loud = engine.compute_incentive(&ActivityRecord::new(500, 3, 1)).unwrap();

        assert_eq!(quiet, loud);
    }

    #[test]
    fn reward_cap_clamps_award() {
        let engine = ScoreEngine::new(
            ReputationWeights::default(),
            IncentivePolicy {
                reward_cap: Some(100),
                ..IncentivePolicy::default()
            },
        )
        .unwrap();
        let award = engine
            .compute_incentive(&ActivityRecord::new(10, 5, 2))
            .unwrap();

        assert_eq!(award.total_reward_gtt, 100);
        assert!(award.capped);
        // breakdown still reports the uncapped terms
        assert_eq!(award.breakdown.base + award.breakdown.disputes + award.breakdown.reviews, 140);
    }

    #[test]
    fn negative_policy_amounts_are_config_errors() {
        let negative_base = IncentivePolicy {
            base_reward: -50,
            ..IncentivePolicy::default()
        };
        let err = ScoreEngine::new(ReputationWeights::default(), negative_base).unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));

        let negative_cap = DistributionConfig {
            incentive: IncentivePolicy {
                reward_cap: Some(-1),
                ..IncentivePolicy::default()
            },
            ..DistributionConfig::default()
        };
        let err = ScoreEngine::from_config(&negative_cap).unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));
    }

    #[test]
    fn negative_counter_is_rejected() {
        let engine = ScoreEngine::default();
        let activity = ActivityRecord::new(1, -2, 0);

        let err = engine.compute_reputation(&activity).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidActivity {
                participant_id: None,
                reason: "capsulesReviewed must be non-negative, got -2".to_string(),
            }
        );
        assert!(engine.compute_incentive(&activity).is_err());
    }

    #[test]
    fn extreme_counters_do_not_overflow() {
        let engine = ScoreEngine::default();
        let activity = ActivityRecord::new(i64::MAX, i64::MAX, i64::MAX);

        let score = engine.compute_reputation(&activity).unwrap();
        assert_eq!(score.total_score, i128::from(i64::MAX) * 10);
    }
}
