//! Owner and authorized-updater roles, kept in instance storage.

use common::oracle::types::{DataKey, OracleError};
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::storage::{load_role, save_role};

pub fn read_owner(env: &Env) -> Address {
    load_role(env, &DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, OracleError::NotInitialized))
}

pub fn read_updater(env: &Env) -> Address {
    load_role(env, &DataKey::Updater)
        .unwrap_or_else(|| panic_with_error!(env, OracleError::NotInitialized))
}

pub fn write_owner(env: &Env, owner: &Address) {
    save_role(env, &DataKey::Owner, owner);
}

pub fn write_updater(env: &Env, updater: &Address) {
    save_role(env, &DataKey::Updater, updater);
}

/// Authenticates `caller` and checks it is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), OracleError> {
    caller.require_auth();

    if *caller != read_owner(env) {
        log!(env, "rejected owner call from {}", caller.clone());
        return Err(OracleError::NotOwner);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the current authorized updater.
pub fn require_updater(env: &Env, caller: &Address) -> Result<(), OracleError> {
    caller.require_auth();

    if *caller != read_updater(env) {
        log!(env, "rejected updater call from {}", caller.clone());
        return Err(OracleError::NotUpdater);
    }
    Ok(())
}

/// Replaces the authorized updater if `caller` is the owner.
pub fn rotate_updater(
    env: &Env,
    caller: &Address,
    new_updater: &Address,
) -> Result<(), OracleError> {
    require_owner(env, caller)?;
    write_updater(env, new_updater);
    Ok(())
}
