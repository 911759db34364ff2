/// Audit trail for marketplace operations
///
/// Every successful state-changing call appends an immutable entry with an
/// auto-incrementing ID. Entries live in persistent storage under their own
/// key namespace so they never collide with contract state.
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{
    AUDIT_COUNTER_KEY, DEFAULT_AUDIT_QUERY_LIMIT, MAX_AUDIT_QUERY_LIMIT, PERSISTENT_TTL_EXTEND,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// AUDIT LOG TYPES
// ============================================================================

/// Operation type categories for audit logging
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationType {
    // Access control
    OwnershipTransferred = 1,

    // Listing lifecycle
    ListingCreated = 10,
    ListingCancelled = 11,
    RentalStarted = 12,
    RentalCompleted = 13,
    RentalCancelled = 14,

    // Treasury
    FeesWithdrawn = 20,

    // Configuration
    ListingPriceChanged = 30,
    RentalDurationChanged = 31,
}

/// Immutable audit log entry
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLog {
    /// Auto-incrementing unique identifier
    pub id: u64,
    /// Ledger timestamp at time of operation
    pub timestamp: u64,
    /// Address that triggered the operation
    pub operator: Address,
    pub operation_type: OperationType,
    /// Listing touched by the operation, if any
    pub listing_id: Option<u64>,
    /// Value moved or parameter written by the operation
    pub amount: i128,
}

/// Result of a paginated audit log query
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditLogQueryResult {
    pub logs: Vec<AuditLog>,
    pub total_count: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub has_more: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum AuditStorageKey {
    /// Individual audit log entry (indexed by id)
    LogEntry(u64),
}

// ============================================================================
// AUDIT LOG STORAGE FUNCTIONS
// ============================================================================

pub fn get_log_id_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get::<_, u64>(&AUDIT_COUNTER_KEY)
        .unwrap_or(0)
}

/// Increment and return the next audit log ID
pub fn increment_log_id_counter(env: &Env) -> u64 {
    let next = get_log_id_counter(env).saturating_add(1);
    env.storage().persistent().set(&AUDIT_COUNTER_KEY, &next);
    env.storage().persistent().extend_ttl(
        &AUDIT_COUNTER_KEY,
        PERSISTENT_TTL_THRESHOLD,
        PERSISTENT_TTL_EXTEND,
    );
    next
}

fn store_audit_log(env: &Env, log: &AuditLog) {
    let key = AuditStorageKey::LogEntry(log.id);
    env.storage().persistent().set(&key, log);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn get_audit_log(env: &Env, log_id: u64) -> Option<AuditLog> {
    env.storage()
        .persistent()
        .get(&AuditStorageKey::LogEntry(log_id))
}

// ============================================================================
// AUDIT LOG CREATION
// ============================================================================

/// Create and store a new audit log entry, returning its ID.
pub fn create_audit_log(
    env: &Env,
    operator: &Address,
    operation_type: OperationType,
    listing_id: Option<u64>,
    amount: i128,
) -> u64 {
    let log = AuditLog {
        id: increment_log_id_counter(env),
        timestamp: env.ledger().timestamp(),
        operator: operator.clone(),
        operation_type,
        listing_id,
        amount,
    };

    store_audit_log(env, &log);
    log.id
}

// ============================================================================
// AUDIT LOG QUERYING
// ============================================================================

/// Query audit logs with pagination
///
/// Returns logs inclusive of `start_id` and `end_id`. A `start_id` of 0 means
/// the first entry, an `end_id` past the total is clamped, and a
/// `max_results` of 0 falls back to `DEFAULT_AUDIT_QUERY_LIMIT`.
pub fn query_audit_logs(
    env: &Env,
    start_id: u64,
    end_id: u64,
    max_results: u32,
) -> AuditLogQueryResult {
    let total_count = get_log_id_counter(env);

    let actual_start = if start_id == 0 { 1 } else { start_id };
    let actual_end = end_id.min(total_count);
    let limit = match max_results {
        0 => DEFAULT_AUDIT_QUERY_LIMIT,
        n => n.min(MAX_AUDIT_QUERY_LIMIT),
    };

    let mut logs: Vec<AuditLog> = Vec::new(env);

    if actual_start > total_count || actual_start > actual_end {
        return AuditLogQueryResult {
            logs,
            total_count,
            start_id: actual_start,
            end_id: actual_end,
            has_more: false,
        };
    }

    let mut count = 0u32;
    let mut current_id = actual_start;

    while current_id <= actual_end && count < limit {
        if let Some(log) = get_audit_log(env, current_id) {
            logs.push_back(log);
            count += 1;
        }
        current_id += 1;
    }

    // Stopped on the limit rather than the end of the range
    let has_more = count == limit && current_id <= actual_end;

    AuditLogQueryResult {
        logs,
        total_count,
        start_id: actual_start,
        end_id: if has_more { current_id - 1 } else { actual_end },
        has_more,
    }
}

pub fn get_total_audit_log_count(env: &Env) -> u64 {
    get_log_id_counter(env)
}
