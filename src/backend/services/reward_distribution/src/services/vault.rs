use parking_lot::Mutex;
use tracing::debug;

use crate::models::Balance;
use crate::utils::errors::{DistributionError, Result};

/// Finite pool of reward tokens for one disbursement cycle.
///
/// `remaining_gtt` only ever decreases and never drops below zero. `debit` is
/// the sole mutator and holds the lock across the check and the subtraction,
/// so a vault can be shared behind an `Arc` without interleaving debits.
#[derive(Debug)]
pub struct VaultAccount {
    total_gtt: Balance,
    remaining_gtt: Mutex<Balance>,
}

impl VaultAccount {
    pub fn new(total_gtt: Balance) -> Result<Self> {
        if total_gtt < 0 {
            return Err(DistributionError::InvalidBudget(total_gtt));
        }

        Ok(Self {
            total_gtt,
            remaining_gtt: Mutex::new(total_gtt),
        })
    }

    pub fn total_gtt(&self) -> Balance {
        self.total_gtt
    }

    pub fn remaining_gtt(&self) -> Balance {
        *self.remaining_gtt.lock()
    }

    pub fn disbursed_gtt(&self) -> Balance {
        self.total_gtt - self.remaining_gtt()
    }

    /// Subtract `amount` if the vault can cover it. Returns `false` and leaves
    /// the balance untouched otherwise, including for negative amounts.
    pub fn debit(&self, amount: Balance) -> bool {
        if amount < 0 {
            return false;
        }

        let mut remaining = self.remaining_gtt.lock();
        if amount > *remaining {
            debug!(amount, remaining = *remaining, "vault debit refused");
            return false;
        }

        *remaining -= amount;
        true
    }
}
