use soroban_sdk::{symbol_short, Symbol};

pub const OWNER_KEY: Symbol = symbol_short!("owner");
pub const AUDIT_COUNTER_KEY: Symbol = symbol_short!("audit_ctr");
