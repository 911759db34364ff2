use soroban_sdk::{Address, Env};

use rental_lib::{EscrowEntry, MarketplaceError};

use crate::{payment, storage};

/// Custody of rental payments between rental start and settlement.
///
/// The ledger only guards its own consistency (one entry per listing,
/// no release of a missing entry). Whether a release or a refund is
/// legal is decided by the rental state machine.
///
/// Both payout paths remove the entry and update the running total
/// before any token leaves the contract, so a re-entrant call finds
/// nothing left to pay.
pub struct EscrowLedger {
    env: Env,
}

impl EscrowLedger {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn get(&self, listing_id: u64) -> Option<EscrowEntry> {
        storage::get_escrow(&self.env, listing_id)
    }

    pub fn total_held(&self) -> i128 {
        storage::get_escrow_total(&self.env)
    }

    pub fn hold(
        &self,
        listing_id: u64,
        amount: i128,
        beneficiary: &Address,
        depositor: &Address,
    ) -> Result<(), MarketplaceError> {
        if storage::has_escrow(&self.env, listing_id) {
            return Err(MarketplaceError::DuplicateEscrow);
        }
        if amount <= 0 {
            return Err(MarketplaceError::InvalidPayment);
        }

        let total = self
            .total_held()
            .checked_add(amount)
            .ok_or(MarketplaceError::Overflow)?;

        let entry = EscrowEntry {
            listing_id,
            amount_held: amount,
            beneficiary: beneficiary.clone(),
            depositor: depositor.clone(),
            created_at: self.env.ledger().timestamp(),
        };
        storage::set_escrow(&self.env, &entry);
        storage::set_escrow_total(&self.env, total);
        Ok(())
    }

    /// Pay the held amount to the entry's beneficiary.
    pub fn release(&self, listing_id: u64) -> Result<i128, MarketplaceError> {
        let entry = self.take(listing_id)?;
        payment::pay_out(&self.env, &entry.beneficiary, entry.amount_held)?;
        Ok(entry.amount_held)
    }

    /// Pay the held amount to `to` instead of the beneficiary.
    pub fn refund(&self, listing_id: u64, to: &Address) -> Result<i128, MarketplaceError> {
        let entry = self.take(listing_id)?;
        payment::pay_out(&self.env, to, entry.amount_held)?;
        Ok(entry.amount_held)
    }

    fn take(&self, listing_id: u64) -> Result<EscrowEntry, MarketplaceError> {
        let entry = self.get(listing_id).ok_or(MarketplaceError::NoEscrow)?;

        let total = self
            .total_held()
            .checked_sub(entry.amount_held)
            .filter(|total| *total >= 0)
            .ok_or(MarketplaceError::Overflow)?;

        storage::remove_escrow(&self.env, listing_id);
        storage::set_escrow_total(&self.env, total);
        Ok(entry)
    }
}
