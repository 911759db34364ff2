use soroban_sdk::{Address, Env};

use rental_lib::{
    audit::{create_audit_log, OperationType},
    MarketplaceError,
};

use crate::{access::AccessControl, events, payment, storage};

/// Accumulated listing fees, withdrawable only by the owner.
pub struct FeeTreasury {
    env: Env,
}

impl FeeTreasury {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn balance(&self) -> i128 {
        storage::get_treasury_balance(&self.env)
    }

    /// Add a collected fee. Fails closed on overflow.
    pub fn credit(&self, amount: i128) -> Result<i128, MarketplaceError> {
        let balance = self
            .balance()
            .checked_add(amount)
            .ok_or(MarketplaceError::Overflow)?;
        storage::set_treasury_balance(&self.env, balance);
        Ok(balance)
    }

    /// Send `amount` of collected fees to the owner.
    ///
    /// The balance is decremented before the token transfer is issued.
    pub fn withdraw(&self, caller: &Address, amount: i128) -> Result<(), MarketplaceError> {
        AccessControl::new(&self.env).require_owner(caller)?;

        if amount <= 0 {
            return Err(MarketplaceError::InvalidPayment);
        }
        let balance = self.balance();
        if amount > balance {
            return Err(MarketplaceError::InsufficientBalance);
        }

        storage::set_treasury_balance(&self.env, balance - amount);
        payment::pay_out(&self.env, caller, amount)?;

        events::fees_withdrawn(&self.env, caller, amount);
        create_audit_log(
            &self.env,
            caller,
            OperationType::FeesWithdrawn,
            None,
            amount,
        );
        Ok(())
    }
}
