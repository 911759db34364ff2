use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{
    EscrowEntry, Listing, MarketplaceError, DEFAULT_LISTING_PRICE,
    DEFAULT_RENTAL_DURATION_SECONDS, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Token in which fees and rents are paid
    PaymentToken,
    /// Protocol listing fee
    ListingPrice,
    /// Default rental window (seconds) captured by new listings
    RentalDuration,
    ListingCounter,
    TreasuryBalance,
    /// Sum of all amounts currently held in escrow
    EscrowTotal,
    Listing(u64),
    Escrow(u64),
    /// Number of listings created by an account
    ListerCount(Address),
    /// Listing id at a position of an account's lister index
    ListerListing(Address, u64),
    /// Number of listings rented by an account
    RenterCount(Address),
    /// Listing id at a position of an account's renter index
    RenterListing(Address, u64),
}

/* ---------------- INSTANCE ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/* ---------------- PAYMENT TOKEN ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, MarketplaceError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(MarketplaceError::NotInitialized)
}

/* ---------------- CONFIGURATION ---------------- */

pub fn set_listing_price(env: &Env, price: i128) {
    env.storage().instance().set(&DataKey::ListingPrice, &price);
}

pub fn get_listing_price(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ListingPrice)
        .unwrap_or(DEFAULT_LISTING_PRICE)
}

pub fn set_rental_duration(env: &Env, seconds: u64) {
    env.storage().instance().set(&DataKey::RentalDuration, &seconds);
}

pub fn get_rental_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::RentalDuration)
        .unwrap_or(DEFAULT_RENTAL_DURATION_SECONDS)
}

/* ---------------- LISTING COUNTER ---------------- */

pub fn get_listing_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ListingCounter)
        .unwrap_or(0)
}

pub fn increment_listing_counter(env: &Env) -> Result<u64, MarketplaceError> {
    let next = get_listing_counter(env)
        .checked_add(1)
        .ok_or(MarketplaceError::Overflow)?;
    env.storage().instance().set(&DataKey::ListingCounter, &next);
    Ok(next)
}

/* ---------------- BALANCES ---------------- */

pub fn get_treasury_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TreasuryBalance)
        .unwrap_or(0)
}

pub fn set_treasury_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::TreasuryBalance, &balance);
}

pub fn get_escrow_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::EscrowTotal)
        .unwrap_or(0)
}

pub fn set_escrow_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::EscrowTotal, &total);
}

/* ---------------- LISTINGS ---------------- */

pub fn set_listing(env: &Env, listing: &Listing) {
    let key = DataKey::Listing(listing.listing_id);
    env.storage().persistent().set(&key, listing);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn get_listing(env: &Env, listing_id: u64) -> Option<Listing> {
    env.storage().persistent().get(&DataKey::Listing(listing_id))
}

/* ---------------- ESCROW ---------------- */

pub fn has_escrow(env: &Env, listing_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Escrow(listing_id))
}

pub fn set_escrow(env: &Env, entry: &EscrowEntry) {
    let key = DataKey::Escrow(entry.listing_id);
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn get_escrow(env: &Env, listing_id: u64) -> Option<EscrowEntry> {
    env.storage().persistent().get(&DataKey::Escrow(listing_id))
}

pub fn remove_escrow(env: &Env, listing_id: u64) {
    env.storage().persistent().remove(&DataKey::Escrow(listing_id));
}

/* ---------------- ACCOUNT INDEXES ---------------- */

// Each index is a count plus one entry per position, so appending touches
// a fixed number of entries however many listings an account has.

fn index_append(
    env: &Env,
    count_key: DataKey,
    entry_key: impl Fn(u64) -> DataKey,
    listing_id: u64,
) -> Result<(), MarketplaceError> {
    let position: u64 = env.storage().persistent().get(&count_key).unwrap_or(0);
    let count = position.checked_add(1).ok_or(MarketplaceError::Overflow)?;

    let entry = entry_key(position);
    env.storage().persistent().set(&entry, &listing_id);
    env.storage()
        .persistent()
        .extend_ttl(&entry, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);

    env.storage().persistent().set(&count_key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&count_key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
    Ok(())
}

pub fn get_lister_count(env: &Env, lister: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ListerCount(lister.clone()))
        .unwrap_or(0)
}

pub fn get_lister_listing(env: &Env, lister: &Address, position: u64) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ListerListing(lister.clone(), position))
}

pub fn lister_listings_append(
    env: &Env,
    lister: &Address,
    listing_id: u64,
) -> Result<(), MarketplaceError> {
    index_append(
        env,
        DataKey::ListerCount(lister.clone()),
        |position| DataKey::ListerListing(lister.clone(), position),
        listing_id,
    )
}

pub fn get_renter_count(env: &Env, renter: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::RenterCount(renter.clone()))
        .unwrap_or(0)
}

pub fn get_renter_listing(env: &Env, renter: &Address, position: u64) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::RenterListing(renter.clone(), position))
}

pub fn renter_listings_append(
    env: &Env,
    renter: &Address,
    listing_id: u64,
) -> Result<(), MarketplaceError> {
    index_append(
        env,
        DataKey::RenterCount(renter.clone()),
        |position| DataKey::RenterListing(renter.clone(), position),
        listing_id,
    )
}
