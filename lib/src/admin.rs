use soroban_sdk::{Address, Env};

use crate::{errors::MarketplaceError, OWNER_KEY};

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER_KEY, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, MarketplaceError> {
    env.storage()
        .instance()
        .get(&OWNER_KEY)
        .ok_or(MarketplaceError::NotInitialized)
}

pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), MarketplaceError> {
    let owner = get_owner(env)?;
    if &owner != caller {
        return Err(MarketplaceError::Unauthorized);
    }
    Ok(())
}

/// Authenticate `caller` and check it is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), MarketplaceError> {
    caller.require_auth();
    verify_owner(env, caller)
}

/// Hand ownership to `new_owner`. The contract itself cannot own itself.
pub fn transfer_owner(
    env: &Env,
    current_owner: &Address,
    new_owner: &Address,
) -> Result<(), MarketplaceError> {
    require_owner(env, current_owner)?;
    if new_owner == &env.current_contract_address() {
        return Err(MarketplaceError::InvalidAddress);
    }
    set_owner(env, new_owner);
    Ok(())
}
