use common::oracle::{
    interface::OracleInterface,
    types::{OracleError, OracleRecord},
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

use crate::{
    events::OracleEvent,
    identity::{read_owner, read_updater, require_owner, rotate_updater, write_owner, write_updater},
    registry::{read_record, write_record},
};

#[contract]
pub struct OddinOracleContract;

#[contractimpl]
impl OracleInterface for OddinOracleContract {
    fn __constructor(env: Env, owner: Address, updater: Address) {
        write_owner(&env, &owner);
        write_updater(&env, &updater);
        OracleEvent::Initialized(owner, updater).publish(&env);
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), OracleError> {
        require_owner(&env, &caller)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    fn updater(env: Env) -> Address {
        read_updater(&env)
    }

    // Returns the stored flag as-is: `true` means the subject was marked valid.
    fn is_not_valid(env: Env, subject: Address) -> (bool, u64) {
        let record = read_record(&env, &subject);
        (record.validity, record.timestamp)
    }

    fn get_record(env: Env, subject: Address) -> OracleRecord {
        read_record(&env, &subject)
    }

    fn set_value(
        env: Env,
        caller: Address,
        subject: Address,
        validity: bool,
        timestamp: u64,
    ) -> Result<(), OracleError> {
        let record = write_record(&env, &caller, &subject, validity, timestamp)?;
        OracleEvent::OracleUpdate(subject, record.validity, record.timestamp).publish(&env);
        Ok(())
    }

    fn update_oracle_updater_address(
        env: Env,
        caller: Address,
        new_updater: Address,
    ) -> Result<(), OracleError> {
        rotate_updater(&env, &caller, &new_updater)?;
        OracleEvent::UpdaterAddressChange(new_updater).publish(&env);
        Ok(())
    }
}
