use soroban_sdk::{Address, Env};

use rental_lib::{
    admin,
    audit::{create_audit_log, OperationType},
    MarketplaceError,
};

use crate::events;

/// Owner gate for privileged operations.
pub struct AccessControl {
    env: Env,
}

impl AccessControl {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    pub fn owner(&self) -> Result<Address, MarketplaceError> {
        admin::get_owner(&self.env)
    }

    pub fn is_owner(&self, account: &Address) -> Result<bool, MarketplaceError> {
        Ok(&self.owner()? == account)
    }

    pub fn require_owner(&self, caller: &Address) -> Result<(), MarketplaceError> {
        admin::require_owner(&self.env, caller)
    }

    pub fn transfer_ownership(
        &self,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), MarketplaceError> {
        admin::transfer_owner(&self.env, caller, new_owner)?;

        events::ownership_transferred(&self.env, caller, new_owner);
        create_audit_log(
            &self.env,
            caller,
            OperationType::OwnershipTransferred,
            None,
            0,
        );
        Ok(())
    }
}
