#![no_std]
pub mod admin;
pub mod audit;
pub mod errors;
pub mod storage_keys;
pub mod types;
pub mod validation;


pub use errors::MarketplaceError;
pub use storage_keys::*;
pub use types::*;

// Amounts are denominated in stroops, the smallest unit of a Stellar asset.
pub const ONE_UNIT: i128 = 10_000_000;

// Listing fee: 0.025 units
pub const DEFAULT_LISTING_PRICE: i128 = ONE_UNIT / 40;

// Rental window bounds (seconds)
pub const DEFAULT_RENTAL_DURATION_SECONDS: u64 = 86_400; // 1 day
pub const MIN_RENTAL_DURATION_SECONDS: u64 = 3_600; // 1 hour
pub const MAX_RENTAL_DURATION_SECONDS: u64 = 365 * 86_400; // 1 year

// TTL constants (in ledgers). Ledgers close roughly every 5 seconds.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const PERSISTENT_TTL_EXTEND: u32 = 1_036_800; // ~60 days
pub const INSTANCE_TTL_THRESHOLD: u32 = 120_960; // ~7 days
pub const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days

// Audit log pagination
pub const DEFAULT_AUDIT_QUERY_LIMIT: u32 = 100;
pub const MAX_AUDIT_QUERY_LIMIT: u32 = 500;

// Listing pagination
pub const DEFAULT_LISTING_QUERY_LIMIT: u32 = 50;
pub const MAX_LISTING_QUERY_LIMIT: u32 = 100;
