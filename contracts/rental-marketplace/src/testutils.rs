#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

use rental_lib::{DEFAULT_LISTING_PRICE, ONE_UNIT};

use crate::{RentalMarketplace, RentalMarketplaceClient};

/// Starting token balance handed to every generated account.
pub const STARTING_BALANCE: i128 = 100 * ONE_UNIT;

pub struct Setup<'a> {
    pub env: Env,
    pub owner: Address,
    pub lister: Address,
    pub renter: Address,
    pub stranger: Address,
    pub asset: Address,
    pub token: TokenClient<'a>,
    pub marketplace: RentalMarketplaceClient<'a>,
}

impl<'a> Setup<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = 1_000);

        let owner = Address::generate(&env);
        let lister = Address::generate(&env);
        let renter = Address::generate(&env);
        let stranger = Address::generate(&env);
        let asset = Address::generate(&env);

        let issuer = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(issuer);
        let token = TokenClient::new(&env, &sac.address());
        let token_admin = StellarAssetClient::new(&env, &sac.address());
        for account in [&owner, &lister, &renter, &stranger] {
            token_admin.mint(account, &STARTING_BALANCE);
        }

        let contract_id = env.register(RentalMarketplace, (owner.clone(), sac.address()));
        let marketplace = RentalMarketplaceClient::new(&env, &contract_id);

        Setup {
            env,
            owner,
            lister,
            renter,
            stranger,
            asset,
            token,
            marketplace,
        }
    }

    /// Create a listing from `lister` paying the default fee.
    pub fn list(&self, rental_price: i128) -> u64 {
        self.marketplace.list_item(
            &self.lister,
            &self.asset,
            &1,
            &rental_price,
            &DEFAULT_LISTING_PRICE,
        )
    }

    /// Create a listing and rent it from `renter` at the exact price.
    pub fn list_and_rent(&self, rental_price: i128) -> u64 {
        let listing_id = self.list(rental_price);
        self.marketplace
            .rent_item(&self.renter, &listing_id, &rental_price);
        listing_id
    }

    pub fn advance_time(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().with_mut(|li| li.timestamp = now + seconds);
    }

    pub fn balance(&self, account: &Address) -> i128 {
        self.token.balance(account)
    }

    pub fn mint(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.token.address).mint(to, &amount);
    }

    /// Assert the most recent event published by the marketplace (token
    /// transfer events are skipped).
    pub fn assert_last_event<D>(&self, name: &str, data: D)
    where
        D: IntoVal<Env, Val>,
    {
        let last = self
            .env
            .events()
            .all()
            .iter()
            .filter(|(contract, _, _)| *contract == self.marketplace.address)
            .last()
            .expect("marketplace published no event");

        let topics: Vec<Val> = (Symbol::new(&self.env, name),).into_val(&self.env);
        let expected = (
            self.marketplace.address.clone(),
            topics,
            data.into_val(&self.env),
        );
        assert_eq!(vec![&self.env, last], vec![&self.env, expected]);
    }
}
