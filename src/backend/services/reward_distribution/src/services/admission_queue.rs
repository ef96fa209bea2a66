use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::{AdmissionMode, AdmissionPolicy};
use crate::models::payout::{PayoutDecision, PayoutRequest, RejectionReason};
use crate::models::Balance;
use crate::services::vault::VaultAccount;
use crate::utils::errors::{DistributionError, Result};

/// Decisions for one batch plus the vault balance after the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionOutcome {
    pub decisions: Vec<PayoutDecision>,
    pub remaining_gtt: Balance,
}

/// First-come-first-served admission of payout requests against a vault.
///
/// Requests are handled in input order in a single greedy pass. A rejection
/// never stops the pass and nothing is retried, so a large early request can
/// starve later ones even when their sum would have fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayoutAdmissionQueue {
    policy: AdmissionPolicy,
}

impl PayoutAdmissionQueue {
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AdmissionPolicy {
        &self.policy
    }

    pub fn admit(&self, requests: &[PayoutRequest], vault: &VaultAccount) -> Result<AdmissionOutcome> {
        if self.policy.mode == AdmissionMode::Strict {
            self.validate_batch(requests)?;
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(requests.len());
        let mut decisions = Vec::with_capacity(requests.len());

        for request in requests {
            // Every request claims its participant's slot, even one rejected below.
            let first_for_participant = seen.insert(request.participant_id.as_str());

            let decision = match self.precheck(request, first_for_participant) {
                Some(reason) => {
                    warn!(
                        participant = %request.participant_id,
                        amount = request.amount,
                        ?reason,
                        "payout request rejected before reaching the vault"
                    );
                    PayoutDecision::reject(request, reason)
                }
                None if vault.debit(request.amount) => PayoutDecision::approve(request),
                None => PayoutDecision::reject(request, RejectionReason::InsufficientBalance),
            };

            debug!(
                participant = %decision.participant_id,
                amount = decision.amount,
                approved = decision.approved,
                "payout admission decision"
            );
            decisions.push(decision);
        }

        Ok(AdmissionOutcome {
            decisions,
            remaining_gtt: vault.remaining_gtt(),
        })
    }

    /// Reason a request must be rejected regardless of the vault balance.
    fn precheck(&self, request: &PayoutRequest, first_for_participant: bool) -> Option<RejectionReason> {
        if request.amount < 0 {
            return Some(RejectionReason::InvalidAmount);
        }
        if let Some(limit) = self.policy.max_request_amount {
            if request.amount > Balance::from(limit) {
                return Some(RejectionReason::ExceedsRequestLimit);
            }
        }
        if !first_for_participant {
            return Some(RejectionReason::DuplicateParticipant);
        }
        None
    }

    fn validate_batch(&self, requests: &[PayoutRequest]) -> Result<()> {
        let mut seen = HashSet::with_capacity(requests.len());

        for request in requests {
            let first_for_participant = seen.insert(request.participant_id.as_str());
            if let Some(reason) = self.precheck(request, first_for_participant) {
                return Err(DistributionError::InvalidRequest {
                    participant_id: request.participant_id.clone(),
                    reason: describe(reason, request),
                });
            }
        }
        Ok(())
    }
}

fn describe(reason: RejectionReason, request: &PayoutRequest) -> String {
    match reason {
        RejectionReason::InvalidAmount => {
            format!("amount must be non-negative, got {}", request.amount)
        }
        RejectionReason::ExceedsRequestLimit => {
            format!("amount {} exceeds the single request limit", request.amount)
        }
        RejectionReason::DuplicateParticipant => "participant appears more than once".to_string(),
        RejectionReason::InsufficientBalance => "insufficient vault balance".to_string(),
    }
}
