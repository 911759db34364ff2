use soroban_sdk::{Address, Env, Vec};

use rental_lib::{
    audit::{create_audit_log, OperationType},
    validation::{
        listing_query_limit, validate_asset_ref, validate_listing_price, validate_nonzero_id,
        validate_rental_duration, validate_rental_price,
    },
    AssetRef, Listing, ListingPage, ListingStatus, MarketplaceError,
};

use crate::{access::AccessControl, events, payment, storage, treasury::FeeTreasury};

/// Listing records plus the protocol parameters new listings are created
/// under.
pub struct ListingRegistry {
    env: Env,
}

impl ListingRegistry {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    // ------------------------------------------------------------------
    // Protocol parameters
    // ------------------------------------------------------------------

    pub fn listing_price(&self) -> i128 {
        storage::get_listing_price(&self.env)
    }

    pub fn set_listing_price(
        &self,
        caller: &Address,
        new_price: i128,
    ) -> Result<(), MarketplaceError> {
        AccessControl::new(&self.env).require_owner(caller)?;
        validate_listing_price(new_price)?;

        let old_price = self.listing_price();
        storage::set_listing_price(&self.env, new_price);

        events::listing_price_updated(&self.env, old_price, new_price);
        create_audit_log(
            &self.env,
            caller,
            OperationType::ListingPriceChanged,
            None,
            new_price,
        );
        Ok(())
    }

    pub fn rental_duration(&self) -> u64 {
        storage::get_rental_duration(&self.env)
    }

    pub fn set_rental_duration(
        &self,
        caller: &Address,
        seconds: u64,
    ) -> Result<(), MarketplaceError> {
        AccessControl::new(&self.env).require_owner(caller)?;
        validate_rental_duration(seconds)?;

        let old_seconds = self.rental_duration();
        storage::set_rental_duration(&self.env, seconds);

        events::rental_duration_updated(&self.env, old_seconds, seconds);
        create_audit_log(
            &self.env,
            caller,
            OperationType::RentalDurationChanged,
            None,
            seconds as i128,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Listing lifecycle
    // ------------------------------------------------------------------

    /// Create a listing for `asset` at `rental_price`.
    ///
    /// `payment` must equal the current listing price exactly; it is
    /// credited to the treasury. The fee check runs before the price
    /// check.
    pub fn list_item(
        &self,
        lister: &Address,
        asset: AssetRef,
        rental_price: i128,
        payment: i128,
    ) -> Result<u64, MarketplaceError> {
        if payment != self.listing_price() {
            return Err(MarketplaceError::InvalidFee);
        }
        validate_rental_price(rental_price)?;
        validate_asset_ref(&self.env, &asset)?;

        FeeTreasury::new(&self.env).credit(payment)?;

        let listing_id = storage::increment_listing_counter(&self.env)?;
        let listing = Listing {
            listing_id,
            asset,
            lister: lister.clone(),
            rental_price,
            rental_duration: self.rental_duration(),
            status: ListingStatus::Listed,
            renter: None,
            rental_start: 0,
            rental_end: 0,
            created_at: self.env.ledger().timestamp(),
        };
        storage::set_listing(&self.env, &listing);
        storage::lister_listings_append(&self.env, lister, listing_id)?;

        payment::collect(&self.env, lister, payment)?;

        events::listing_created(&self.env, listing_id, lister, rental_price);
        create_audit_log(
            &self.env,
            lister,
            OperationType::ListingCreated,
            Some(listing_id),
            payment,
        );
        Ok(listing_id)
    }

    /// Withdraw a listing that has not been rented. The listing fee stays
    /// in the treasury.
    pub fn cancel_listing(
        &self,
        lister: &Address,
        listing_id: u64,
    ) -> Result<(), MarketplaceError> {
        let mut listing = self.load(listing_id)?;

        if &listing.lister != lister {
            return Err(MarketplaceError::NotOwner);
        }
        if listing.status != ListingStatus::Listed {
            return Err(MarketplaceError::InvalidState);
        }

        listing.status = ListingStatus::Cancelled;
        self.save(&listing);

        events::listing_cancelled(&self.env, listing_id);
        create_audit_log(
            &self.env,
            lister,
            OperationType::ListingCancelled,
            Some(listing_id),
            0,
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Storage access
    // ------------------------------------------------------------------

    pub fn load(&self, listing_id: u64) -> Result<Listing, MarketplaceError> {
        validate_nonzero_id(listing_id)?;
        storage::get_listing(&self.env, listing_id).ok_or(MarketplaceError::ListingNotFound)
    }

    pub fn save(&self, listing: &Listing) {
        storage::set_listing(&self.env, listing);
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn get(&self, listing_id: u64) -> Option<Listing> {
        storage::get_listing(&self.env, listing_id)
    }

    pub fn count(&self) -> u64 {
        storage::get_listing_counter(&self.env)
    }

    /// Open listings among the ids `start..start + limit` (`start` 0 reads
    /// from 1). A page may hold fewer than `limit` listings when ids in the
    /// window have been rented or cancelled; keep paging while `has_more`.
    pub fn listed_items(&self, start: u64, limit: u32) -> ListingPage {
        let total_count = self.count();
        let first = start.max(1);
        let end = first
            .saturating_add(listing_query_limit(limit) as u64)
            .min(total_count.saturating_add(1));

        let mut listings = Vec::new(&self.env);
        for listing_id in first..end {
            if let Some(listing) = self.get(listing_id) {
                if listing.status == ListingStatus::Listed {
                    listings.push_back(listing);
                }
            }
        }

        ListingPage {
            listings,
            total_count,
            next_start: end.max(first),
            has_more: end <= total_count,
        }
    }

    /// Listings created by `lister`, by index position starting at 0.
    pub fn lister_items(&self, lister: &Address, start: u64, limit: u32) -> ListingPage {
        let total_count = storage::get_lister_count(&self.env, lister);
        self.index_page(total_count, start, limit, |position| {
            storage::get_lister_listing(&self.env, lister, position)
        })
    }

    /// Listings rented by `renter`, by index position starting at 0.
    pub fn renter_items(&self, renter: &Address, start: u64, limit: u32) -> ListingPage {
        let total_count = storage::get_renter_count(&self.env, renter);
        self.index_page(total_count, start, limit, |position| {
            storage::get_renter_listing(&self.env, renter, position)
        })
    }

    fn index_page(
        &self,
        total_count: u64,
        start: u64,
        limit: u32,
        listing_at: impl Fn(u64) -> Option<u64>,
    ) -> ListingPage {
        let first = start.min(total_count);
        let end = first
            .saturating_add(listing_query_limit(limit) as u64)
            .min(total_count);

        let mut listings = Vec::new(&self.env);
        for position in first..end {
            if let Some(listing) = listing_at(position).and_then(|id| self.get(id)) {
                listings.push_back(listing);
            }
        }

        ListingPage {
            listings,
            total_count,
            next_start: end,
            has_more: end < total_count,
        }
    }
}
