#![cfg(test)]

use rental_lib::{MarketplaceError, DEFAULT_LISTING_PRICE, ONE_UNIT};

use crate::testutils::{Setup, STARTING_BALANCE};

#[test]
fn test_owner_withdraws_fees() {
    let s = Setup::new();
    s.list(ONE_UNIT);
    s.list(ONE_UNIT);
    assert_eq!(s.marketplace.treasury_balance(), 2 * DEFAULT_LISTING_PRICE);

    s.marketplace.withdraw_fees(&s.owner, &DEFAULT_LISTING_PRICE);

    assert_eq!(s.marketplace.treasury_balance(), DEFAULT_LISTING_PRICE);
    assert_eq!(s.balance(&s.owner), STARTING_BALANCE + DEFAULT_LISTING_PRICE);
    assert_eq!(s.balance(&s.marketplace.address), DEFAULT_LISTING_PRICE);
}

#[test]
fn test_withdraw_by_non_owner_fails() {
    let s = Setup::new();
    s.list(ONE_UNIT);

    let result = s.marketplace.try_withdraw_fees(&s.lister, &DEFAULT_LISTING_PRICE);
    assert_eq!(result, Err(Ok(MarketplaceError::Unauthorized)));
    assert_eq!(s.marketplace.treasury_balance(), DEFAULT_LISTING_PRICE);
}

#[test]
fn test_withdraw_more_than_balance_fails() {
    let s = Setup::new();
    s.list(ONE_UNIT);

    let result = s.marketplace.try_withdraw_fees(&s.owner, &(DEFAULT_LISTING_PRICE + 1));
    assert_eq!(result, Err(Ok(MarketplaceError::InsufficientBalance)));
    assert_eq!(s.balance(&s.owner), STARTING_BALANCE);
}

#[test]
fn test_withdraw_non_positive_amount_fails() {
    let s = Setup::new();
    s.list(ONE_UNIT);

    assert_eq!(
        s.marketplace.try_withdraw_fees(&s.owner, &0),
        Err(Ok(MarketplaceError::InvalidPayment))
    );
    assert_eq!(
        s.marketplace.try_withdraw_fees(&s.owner, &-5),
        Err(Ok(MarketplaceError::InvalidPayment))
    );
}

#[test]
fn test_escrowed_rent_is_not_withdrawable() {
    let s = Setup::new();
    s.list_and_rent(10 * ONE_UNIT);

    // The contract holds fee + rent, but only the fee belongs to the treasury
    assert_eq!(s.balance(&s.marketplace.address), DEFAULT_LISTING_PRICE + 10 * ONE_UNIT);
    let result = s.marketplace.try_withdraw_fees(&s.owner, &ONE_UNIT);
    assert_eq!(result, Err(Ok(MarketplaceError::InsufficientBalance)));
}

#[test]
fn test_new_owner_withdraws_after_transfer() {
    let s = Setup::new();
    s.list(ONE_UNIT);

    s.marketplace.transfer_ownership(&s.owner, &s.stranger);
    s.marketplace.withdraw_fees(&s.stranger, &DEFAULT_LISTING_PRICE);

    assert_eq!(s.balance(&s.stranger), STARTING_BALANCE + DEFAULT_LISTING_PRICE);
    assert_eq!(s.marketplace.treasury_balance(), 0);
}

#[test]
fn test_treasury_credit_overflow_rejects_listing() {
    let s = Setup::new();
    let fee = i128::MAX / 2 + 1;
    s.marketplace.set_listing_price(&s.owner, &fee);
    s.mint(&s.lister, fee);

    s.marketplace.list_item(&s.lister, &s.asset, &1, &ONE_UNIT, &fee);
    let lister_balance = s.balance(&s.lister);

    let result = s.marketplace.try_list_item(&s.lister, &s.asset, &2, &ONE_UNIT, &fee);
    assert_eq!(result, Err(Ok(MarketplaceError::Overflow)));

    assert_eq!(s.marketplace.treasury_balance(), fee);
    assert_eq!(s.marketplace.listing_count(), 1);
    assert_eq!(s.balance(&s.lister), lister_balance);
}
