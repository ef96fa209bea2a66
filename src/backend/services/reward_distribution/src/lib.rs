//! Reward computation and budget-constrained payout admission.
//!
//! Activity counters are turned into reputation scores and incentive awards,
//! awards become payout requests, and requests are admitted first-come
//! first-served against a finite vault. Each cycle yields a serializable
//! [`CycleReport`](models::report::CycleReport).

pub mod config;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use config::{AdmissionMode, AdmissionPolicy, DistributionConfig, IncentivePolicy, ReputationWeights};
pub use models::activity::{ActivityRecord, IncentiveAward, ReputationScore};
pub use models::payout::{PayoutDecision, PayoutRequest, RejectionReason};
pub use models::report::{CycleRecord, CycleReport, InvalidRecord};
pub use models::{Balance, ParticipantId};
pub use services::admission_queue::{AdmissionOutcome, PayoutAdmissionQueue};
pub use services::disbursement_cycle::DisbursementCycle;
pub use services::disbursement_service::DisbursementService;
pub use services::score_engine::ScoreEngine;
pub use services::vault::VaultAccount;
pub use utils::errors::{DistributionError, Result};
