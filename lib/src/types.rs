use soroban_sdk::{contracttype, Address, Vec};

/// Reference to an external rentable asset: the asset contract and the
/// token identifier inside it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetRef {
    pub contract: Address,
    pub token_id: u64,
}

/// Lifecycle state of a listing.
///
/// ```text
/// Listed ──► Rented ──► Completed
///   │          │
///   └──────────┴──────► Cancelled
/// ```
///
/// `Completed` and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
#[repr(u32)]
pub enum ListingStatus {
    Listed = 0,
    Rented = 1,
    Completed = 2,
    Cancelled = 3,
}

impl ListingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ListingStatus::Completed | ListingStatus::Cancelled)
    }

    /// Returns `true` when moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: ListingStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (ListingStatus::Listed, ListingStatus::Rented)
                | (ListingStatus::Listed, ListingStatus::Cancelled)
                | (ListingStatus::Rented, ListingStatus::Completed)
                | (ListingStatus::Rented, ListingStatus::Cancelled)
        )
    }
}

/// Represents a rental offer on the marketplace.
///
/// `rental_price` and `rental_duration` are fixed at creation; only
/// `status`, `renter` and the rental window change afterwards.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Listing {
    pub listing_id: u64,
    pub asset: AssetRef,
    pub lister: Address,
    pub rental_price: i128,
    /// Agreed rental window in seconds.
    pub rental_duration: u64,
    pub status: ListingStatus,
    pub renter: Option<Address>,
    pub rental_start: u64,
    pub rental_end: u64,
    pub created_at: u64,
}

/// Funds held by the contract for one active rental.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct EscrowEntry {
    pub listing_id: u64,
    pub amount_held: i128,
    /// Paid on release (the lister).
    pub beneficiary: Address,
    /// The renter who deposited the funds.
    pub depositor: Address,
    pub created_at: u64,
}

/// One page of a listing query.
///
/// `next_start` is the cursor to pass back for the following page; it is
/// only meaningful while `has_more` is set.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ListingPage {
    pub listings: Vec<Listing>,
    pub total_count: u64,
    pub next_start: u64,
    pub has_more: bool,
}
