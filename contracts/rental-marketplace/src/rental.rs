use soroban_sdk::{Address, Env};

use rental_lib::{
    audit::{create_audit_log, OperationType},
    Listing, ListingStatus, MarketplaceError,
};

use crate::{
    access::AccessControl, escrow::EscrowLedger, events, payment, registry::ListingRegistry,
    storage,
};

/// Drives a listing through `Listed → Rented → Completed | Cancelled`.
///
/// The listing status doubles as the per-listing lock: every entry point
/// checks the current status before touching escrow, and the new status
/// is persisted before any token leaves the contract.
///
/// Settlement is asymmetric. Completion pays the held rent to the lister;
/// cancellation of a running rental refunds it to the renter.
pub struct RentalStateMachine {
    env: Env,
    registry: ListingRegistry,
    escrow: EscrowLedger,
}

impl RentalStateMachine {
    pub fn new(env: &Env) -> Self {
        Self {
            env: env.clone(),
            registry: ListingRegistry::new(env),
            escrow: EscrowLedger::new(env),
        }
    }

    fn ensure_transition(listing: &Listing, next: ListingStatus) -> Result<(), MarketplaceError> {
        if !listing.status.can_transition_to(next) {
            return Err(MarketplaceError::InvalidState);
        }
        Ok(())
    }

    /// Start a rental. `payment` must equal the listing's rental price and
    /// is held in escrow for the lister.
    pub fn rent_item(
        &self,
        renter: &Address,
        listing_id: u64,
        payment: i128,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.registry.load(listing_id)?;

        Self::ensure_transition(&listing, ListingStatus::Rented)?;
        if &listing.lister == renter {
            return Err(MarketplaceError::SelfRental);
        }
        if payment != listing.rental_price {
            return Err(MarketplaceError::InvalidPayment);
        }

        let now = self.env.ledger().timestamp();
        let rental_end = now
            .checked_add(listing.rental_duration)
            .ok_or(MarketplaceError::Overflow)?;

        listing.status = ListingStatus::Rented;
        listing.renter = Some(renter.clone());
        listing.rental_start = now;
        listing.rental_end = rental_end;
        self.registry.save(&listing);
        storage::renter_listings_append(&self.env, renter, listing_id)?;

        self.escrow.hold(listing_id, payment, &listing.lister, renter)?;
        payment::collect(&self.env, renter, payment)?;

        events::rental_started(&self.env, listing_id, renter, rental_end);
        create_audit_log(
            &self.env,
            renter,
            OperationType::RentalStarted,
            Some(listing_id),
            payment,
        );
        Ok(())
    }

    /// Settle a rental in the lister's favour.
    ///
    /// The renter may return early; anyone may settle once the rental
    /// window has ended.
    pub fn complete_rental(
        &self,
        caller: &Address,
        listing_id: u64,
    ) -> Result<i128, MarketplaceError> {
        let mut listing = self.registry.load(listing_id)?;

        Self::ensure_transition(&listing, ListingStatus::Completed)?;
        let is_renter = listing.renter.as_ref() == Some(caller);
        if !is_renter && self.env.ledger().timestamp() < listing.rental_end {
            return Err(MarketplaceError::NotYetDue);
        }

        listing.status = ListingStatus::Completed;
        self.registry.save(&listing);

        let amount = self.escrow.release(listing_id)?;

        events::rental_completed(&self.env, listing_id, amount);
        create_audit_log(
            &self.env,
            caller,
            OperationType::RentalCompleted,
            Some(listing_id),
            amount,
        );
        Ok(amount)
    }

    /// Abort a running rental and refund the renter.
    ///
    /// Allowed for the owner acting as dispute authority, or for the lister
    /// giving up the rent voluntarily.
    pub fn cancel_rental(
        &self,
        caller: &Address,
        listing_id: u64,
    ) -> Result<i128, MarketplaceError> {
        let mut listing = self.registry.load(listing_id)?;

        if listing.status != ListingStatus::Rented {
            return Err(MarketplaceError::InvalidState);
        }
        let is_lister = &listing.lister == caller;
        if !is_lister && !AccessControl::new(&self.env).is_owner(caller)? {
            return Err(MarketplaceError::Unauthorized);
        }
        let renter = listing.renter.clone().ok_or(MarketplaceError::InvalidState)?;

        listing.status = ListingStatus::Cancelled;
        self.registry.save(&listing);

        let amount = self.escrow.refund(listing_id, &renter)?;

        events::rental_cancelled(&self.env, listing_id, amount);
        create_audit_log(
            &self.env,
            caller,
            OperationType::RentalCancelled,
            Some(listing_id),
            amount,
        );
        Ok(amount)
    }
}
