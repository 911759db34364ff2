use soroban_sdk::contracterror;

/// Failure reasons surfaced by every marketplace operation.
///
/// A returned error aborts the whole invocation: no storage write and no
/// token transfer of that call survives.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketplaceError {
    /// Caller lacks the required role.
    Unauthorized = 1,
    /// Rental price is zero or negative, or a fee parameter is negative.
    InvalidPrice = 2,
    /// Attached listing fee differs from the current listing price.
    InvalidFee = 3,
    /// Attached payment differs from the listing's rental price.
    InvalidPayment = 4,
    /// Operation is illegal for the listing's current status.
    InvalidState = 5,
    /// Early completion attempted by someone other than the renter.
    NotYetDue = 6,
    /// Withdrawal exceeds the treasury balance.
    InsufficientBalance = 7,
    NoEscrow = 8,
    DuplicateEscrow = 9,
    /// Caller is not the lister of the listing.
    NotOwner = 10,
    ListingNotFound = 11,
    SelfRental = 12,
    Overflow = 13,
    InvalidDuration = 14,
    InvalidAddress = 15,
    NotInitialized = 16,
}

impl MarketplaceError {
    /// Human-readable revert reason for this error.
    pub fn reason(&self) -> &'static str {
        match self {
            MarketplaceError::Unauthorized => "Unauthorized",
            MarketplaceError::InvalidPrice => "Price must be greater than 0",
            MarketplaceError::InvalidFee => "Price must be equal to listing price",
            MarketplaceError::InvalidPayment => "Payment must be equal to rental price",
            MarketplaceError::InvalidState => "Invalid listing state",
            MarketplaceError::NotYetDue => "Rental period has not ended",
            MarketplaceError::InsufficientBalance => "Insufficient treasury balance",
            MarketplaceError::NoEscrow => "No escrow for listing",
            MarketplaceError::DuplicateEscrow => "Escrow already exists for listing",
            MarketplaceError::NotOwner => "Only the lister can perform this action",
            MarketplaceError::ListingNotFound => "Listing not found",
            MarketplaceError::SelfRental => "Lister cannot rent own listing",
            MarketplaceError::Overflow => "Arithmetic overflow",
            MarketplaceError::InvalidDuration => "Invalid rental duration",
            MarketplaceError::InvalidAddress => "Invalid address",
            MarketplaceError::NotInitialized => "Contract not initialized",
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let error = match code {
            1 => MarketplaceError::Unauthorized,
            2 => MarketplaceError::InvalidPrice,
            3 => MarketplaceError::InvalidFee,
            4 => MarketplaceError::InvalidPayment,
            5 => MarketplaceError::InvalidState,
            6 => MarketplaceError::NotYetDue,
            7 => MarketplaceError::InsufficientBalance,
            8 => MarketplaceError::NoEscrow,
            9 => MarketplaceError::DuplicateEscrow,
            10 => MarketplaceError::NotOwner,
            11 => MarketplaceError::ListingNotFound,
            12 => MarketplaceError::SelfRental,
            13 => MarketplaceError::Overflow,
            14 => MarketplaceError::InvalidDuration,
            15 => MarketplaceError::InvalidAddress,
            16 => MarketplaceError::NotInitialized,
            _ => return None,
        };
        Some(error)
    }
}
