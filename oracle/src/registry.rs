use common::oracle::types::{OracleError, OracleRecord};
use soroban_sdk::{Address, Env};

use crate::{
    identity::require_updater,
    storage::{load_record, save_record},
};

/// Returns the stored record, or the zero record for unseen subjects.
pub fn read_record(env: &Env, subject: &Address) -> OracleRecord {
    load_record(env, subject).unwrap_or_default()
}

// Timestamps are stored as given, neither checked against the ledger clock
// nor against the previous value.
pub fn write_record(
    env: &Env,
    caller: &Address,
    subject: &Address,
    validity: bool,
    timestamp: u64,
) -> Result<OracleRecord, OracleError> {
    require_updater(env, caller)?;

    let record = OracleRecord {
        validity,
        timestamp,
    };
    save_record(env, subject, &record);
    Ok(record)
}
