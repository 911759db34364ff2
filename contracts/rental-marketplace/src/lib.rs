#![no_std]

use rental_lib::{
    admin,
    audit::{get_total_audit_log_count, query_audit_logs, AuditLogQueryResult},
    AssetRef, EscrowEntry, Listing, ListingPage, MarketplaceError, DEFAULT_LISTING_PRICE,
    DEFAULT_RENTAL_DURATION_SECONDS,
};
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod access;
mod escrow;
mod events;
mod payment;
mod registry;
mod rental;
mod storage;
mod treasury;

#[cfg(test)]
mod testutils;
#[cfg(test)]
mod test_treasury;
#[cfg(test)]
mod test_events;

use access::AccessControl;
use escrow::EscrowLedger;
use registry::ListingRegistry;
use rental::RentalStateMachine;
use treasury::FeeTreasury;

#[contract]
pub struct RentalMarketplace;

#[contractimpl]
impl RentalMarketplace {
    /// Deploy with `owner` as the privileged account and `payment_token` as
    /// the asset fees and rents are paid in.
    pub fn __constructor(env: Env, owner: Address, payment_token: Address) {
        admin::set_owner(&env, &owner);
        storage::set_payment_token(&env, &payment_token);
        storage::set_listing_price(&env, DEFAULT_LISTING_PRICE);
        storage::set_rental_duration(&env, DEFAULT_RENTAL_DURATION_SECONDS);
        storage::set_treasury_balance(&env, 0);
        storage::set_escrow_total(&env, 0);
        storage::bump_instance(&env);
    }

    // ---------------- ACCESS CONTROL ----------------

    pub fn owner(env: Env) -> Result<Address, MarketplaceError> {
        AccessControl::new(&env).owner()
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), MarketplaceError> {
        storage::bump_instance(&env);
        AccessControl::new(&env).transfer_ownership(&caller, &new_owner)
    }

    pub fn payment_token(env: Env) -> Result<Address, MarketplaceError> {
        storage::get_payment_token(&env)
    }

    // ---------------- CONFIGURATION ----------------

    pub fn get_listing_price(env: Env) -> i128 {
        ListingRegistry::new(&env).listing_price()
    }

    pub fn set_listing_price(
        env: Env,
        caller: Address,
        new_price: i128,
    ) -> Result<(), MarketplaceError> {
        storage::bump_instance(&env);
        ListingRegistry::new(&env).set_listing_price(&caller, new_price)
    }

    pub fn get_rental_duration(env: Env) -> u64 {
        ListingRegistry::new(&env).rental_duration()
    }

    pub fn set_rental_duration(
        env: Env,
        caller: Address,
        seconds: u64,
    ) -> Result<(), MarketplaceError> {
        storage::bump_instance(&env);
        ListingRegistry::new(&env).set_rental_duration(&caller, seconds)
    }

    // ---------------- LISTINGS ----------------

    /// List `token_id` of `asset_contract` for rent at `rental_price`.
    /// `payment` is the attached listing fee.
    pub fn list_item(
        env: Env,
        lister: Address,
        asset_contract: Address,
        token_id: u64,
        rental_price: i128,
        payment: i128,
    ) -> Result<u64, MarketplaceError> {
        lister.require_auth();
        storage::bump_instance(&env);

        let asset = AssetRef {
            contract: asset_contract,
            token_id,
        };
        ListingRegistry::new(&env).list_item(&lister, asset, rental_price, payment)
    }

    pub fn cancel_listing(
        env: Env,
        lister: Address,
        listing_id: u64,
    ) -> Result<(), MarketplaceError> {
        lister.require_auth();
        storage::bump_instance(&env);
        ListingRegistry::new(&env).cancel_listing(&lister, listing_id)
    }

    pub fn get_listing(env: Env, listing_id: u64) -> Option<Listing> {
        ListingRegistry::new(&env).get(listing_id)
    }

    pub fn listing_count(env: Env) -> u64 {
        ListingRegistry::new(&env).count()
    }

    /// Listings currently open for rent, scanning listing ids from `start`.
    /// `limit` 0 selects the default page size.
    pub fn fetch_listed_items(env: Env, start: u64, limit: u32) -> ListingPage {
        ListingRegistry::new(&env).listed_items(start, limit)
    }

    pub fn fetch_lister_items(env: Env, lister: Address, start: u64, limit: u32) -> ListingPage {
        ListingRegistry::new(&env).lister_items(&lister, start, limit)
    }

    pub fn fetch_renter_items(env: Env, renter: Address, start: u64, limit: u32) -> ListingPage {
        ListingRegistry::new(&env).renter_items(&renter, start, limit)
    }

    // ---------------- RENTALS ----------------

    /// Rent a listing. `payment` is the attached rent and must equal the
    /// listing's rental price.
    pub fn rent_item(
        env: Env,
        renter: Address,
        listing_id: u64,
        payment: i128,
    ) -> Result<(), MarketplaceError> {
        renter.require_auth();
        storage::bump_instance(&env);
        RentalStateMachine::new(&env).rent_item(&renter, listing_id, payment)
    }

    /// Settle a rental and pay the lister. Returns the amount released.
    pub fn complete_rental(
        env: Env,
        caller: Address,
        listing_id: u64,
    ) -> Result<i128, MarketplaceError> {
        caller.require_auth();
        storage::bump_instance(&env);
        RentalStateMachine::new(&env).complete_rental(&caller, listing_id)
    }

    /// Cancel a running rental and refund the renter. Returns the amount
    /// refunded.
    pub fn cancel_rental(
        env: Env,
        caller: Address,
        listing_id: u64,
    ) -> Result<i128, MarketplaceError> {
        caller.require_auth();
        storage::bump_instance(&env);
        RentalStateMachine::new(&env).cancel_rental(&caller, listing_id)
    }

    pub fn get_escrow(env: Env, listing_id: u64) -> Option<EscrowEntry> {
        EscrowLedger::new(&env).get(listing_id)
    }

    pub fn escrow_total(env: Env) -> i128 {
        EscrowLedger::new(&env).total_held()
    }

    // ---------------- TREASURY ----------------

    pub fn treasury_balance(env: Env) -> i128 {
        FeeTreasury::new(&env).balance()
    }

    pub fn withdraw_fees(env: Env, caller: Address, amount: i128) -> Result<(), MarketplaceError> {
        storage::bump_instance(&env);
        FeeTreasury::new(&env).withdraw(&caller, amount)
    }

    // ---------------- AUDIT ----------------

    pub fn get_audit_logs(
        env: Env,
        start_id: u64,
        end_id: u64,
        max_results: u32,
    ) -> AuditLogQueryResult {
        query_audit_logs(&env, start_id, end_id, max_results)
    }

    pub fn audit_log_count(env: Env) -> u64 {
        get_total_audit_log_count(&env)
    }

    /// Revert reason for a contract error code
    pub fn error_reason(env: Env, code: u32) -> Option<String> {
        MarketplaceError::from_code(code).map(|error| String::from_str(&env, error.reason()))
    }
}
