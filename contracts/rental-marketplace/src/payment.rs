use soroban_sdk::{token, Address, Env};

use rental_lib::MarketplaceError;

use crate::storage::get_payment_token;

/// Pull `amount` of the payment token from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), MarketplaceError> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, &get_payment_token(env)?);
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Send `amount` of the payment token from the contract to `to`.
///
/// Callers must finish all bookkeeping before calling this.
pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), MarketplaceError> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, &get_payment_token(env)?);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
