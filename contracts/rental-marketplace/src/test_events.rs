//! Every state change publishes its event with the expected payload.

#![cfg(test)]

use rental_lib::{DEFAULT_LISTING_PRICE, DEFAULT_RENTAL_DURATION_SECONDS, ONE_UNIT};

use crate::testutils::Setup;

#[test]
fn test_list_item_publishes_listing_created() {
    let s = Setup::new();
    let listing_id = s.list(ONE_UNIT);

    s.assert_last_event("ListingCreated", (listing_id, s.lister.clone(), ONE_UNIT));
}

#[test]
fn test_cancel_listing_publishes_listing_cancelled() {
    let s = Setup::new();
    let listing_id = s.list(ONE_UNIT);
    s.marketplace.cancel_listing(&s.lister, &listing_id);

    s.assert_last_event("ListingCancelled", (listing_id,));
}

#[test]
fn test_rent_item_publishes_rental_started() {
    let s = Setup::new();
    let listing_id = s.list_and_rent(ONE_UNIT);

    let rental_end = 1_000 + DEFAULT_RENTAL_DURATION_SECONDS;
    s.assert_last_event("RentalStarted", (listing_id, s.renter.clone(), rental_end));
}

#[test]
fn test_complete_rental_publishes_rental_completed() {
    let s = Setup::new();
    let listing_id = s.list_and_rent(ONE_UNIT);
    s.marketplace.complete_rental(&s.renter, &listing_id);

    s.assert_last_event("RentalCompleted", (listing_id, ONE_UNIT));
}

#[test]
fn test_cancel_rental_publishes_rental_cancelled() {
    let s = Setup::new();
    let listing_id = s.list_and_rent(2 * ONE_UNIT);
    s.marketplace.cancel_rental(&s.owner, &listing_id);

    s.assert_last_event("RentalCancelled", (listing_id, 2 * ONE_UNIT));
}

#[test]
fn test_withdraw_fees_publishes_fees_withdrawn() {
    let s = Setup::new();
    s.list(ONE_UNIT);
    s.marketplace.withdraw_fees(&s.owner, &DEFAULT_LISTING_PRICE);

    s.assert_last_event("FeesWithdrawn", (s.owner.clone(), DEFAULT_LISTING_PRICE));
}

#[test]
fn test_parameter_changes_publish_old_and_new_values() {
    let s = Setup::new();

    s.marketplace.set_listing_price(&s.owner, &ONE_UNIT);
    s.assert_last_event("ListingPriceUpdated", (DEFAULT_LISTING_PRICE, ONE_UNIT));

    s.marketplace.set_rental_duration(&s.owner, &7_200);
    s.assert_last_event("RentalDurationUpdated", (DEFAULT_RENTAL_DURATION_SECONDS, 7_200u64));
}

#[test]
fn test_transfer_ownership_publishes_previous_and_new_owner() {
    let s = Setup::new();
    s.marketplace.transfer_ownership(&s.owner, &s.stranger);

    s.assert_last_event("OwnershipTransferred", (s.owner.clone(), s.stranger.clone()));
}
