//! Roles live in instance storage, each record in its own persistent entry.
//! Writes push the touched entry (and the instance) out to the network's
//! maximum TTL; reads leave TTLs alone.

use common::oracle::types::{DataKey, OracleRecord};
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are re-extended once their TTL drops this far below the maximum.
pub const TTL_MARGIN: u32 = 7 * DAY_IN_LEDGERS;

fn bump_instance(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - TTL_MARGIN, max_ttl);
}

pub fn load_role(env: &Env, key: &DataKey) -> Option<Address> {
    env.storage().instance().get(key)
}

pub fn save_role(env: &Env, key: &DataKey, identity: &Address) {
    env.storage().instance().set(key, identity);
    bump_instance(env);
}

pub fn load_record(env: &Env, subject: &Address) -> Option<OracleRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(subject.clone()))
}

pub fn save_record(env: &Env, subject: &Address, record: &OracleRecord) {
    let key = DataKey::Record(subject.clone());
    let max_ttl = env.storage().max_ttl();

    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, max_ttl - TTL_MARGIN, max_ttl);
    bump_instance(env);
}
