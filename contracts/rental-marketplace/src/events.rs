//! Event publishing for every marketplace state change.

use soroban_sdk::{Address, Env, Symbol};

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnershipTransferred"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn listing_price_updated(env: &Env, old_price: i128, new_price: i128) {
    env.events().publish(
        (Symbol::new(env, "ListingPriceUpdated"),),
        (old_price, new_price),
    );
}

pub fn rental_duration_updated(env: &Env, old_seconds: u64, new_seconds: u64) {
    env.events().publish(
        (Symbol::new(env, "RentalDurationUpdated"),),
        (old_seconds, new_seconds),
    );
}

pub fn listing_created(env: &Env, listing_id: u64, lister: &Address, rental_price: i128) {
    env.events().publish(
        (Symbol::new(env, "ListingCreated"),),
        (listing_id, lister.clone(), rental_price),
    );
}

pub fn listing_cancelled(env: &Env, listing_id: u64) {
    env.events()
        .publish((Symbol::new(env, "ListingCancelled"),), (listing_id,));
}

pub fn rental_started(env: &Env, listing_id: u64, renter: &Address, rental_end: u64) {
    env.events().publish(
        (Symbol::new(env, "RentalStarted"),),
        (listing_id, renter.clone(), rental_end),
    );
}

pub fn rental_completed(env: &Env, listing_id: u64, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "RentalCompleted"),), (listing_id, amount));
}

pub fn rental_cancelled(env: &Env, listing_id: u64, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "RentalCancelled"),), (listing_id, amount));
}

pub fn fees_withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "FeesWithdrawn"),), (owner.clone(), amount));
}
