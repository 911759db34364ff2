use soroban_sdk::Env;

use crate::{
    errors::MarketplaceError, AssetRef, DEFAULT_LISTING_QUERY_LIMIT, MAX_LISTING_QUERY_LIMIT,
    MAX_RENTAL_DURATION_SECONDS, MIN_RENTAL_DURATION_SECONDS,
};

pub fn validate_rental_price(price: i128) -> Result<(), MarketplaceError> {
    if price <= 0 {
        return Err(MarketplaceError::InvalidPrice);
    }
    Ok(())
}

/// Listing fees may be zero (free listings) but never negative.
pub fn validate_listing_price(price: i128) -> Result<(), MarketplaceError> {
    if price < 0 {
        return Err(MarketplaceError::InvalidPrice);
    }
    Ok(())
}

pub fn validate_rental_duration(seconds: u64) -> Result<(), MarketplaceError> {
    if !(MIN_RENTAL_DURATION_SECONDS..=MAX_RENTAL_DURATION_SECONDS).contains(&seconds) {
        return Err(MarketplaceError::InvalidDuration);
    }
    Ok(())
}

/// Structural check only: the marketplace never probes the asset contract.
pub fn validate_asset_ref(env: &Env, asset: &AssetRef) -> Result<(), MarketplaceError> {
    if asset.contract == env.current_contract_address() {
        return Err(MarketplaceError::InvalidAddress);
    }
    Ok(())
}

pub fn validate_nonzero_id(id: u64) -> Result<(), MarketplaceError> {
    if id == 0 {
        return Err(MarketplaceError::ListingNotFound);
    }
    Ok(())
}

/// Page size for listing queries: 0 selects the default, anything above
/// the cap is clamped.
pub fn listing_query_limit(limit: u32) -> u32 {
    match limit {
        0 => DEFAULT_LISTING_QUERY_LIMIT,
        n => n.min(MAX_LISTING_QUERY_LIMIT),
    }
}
