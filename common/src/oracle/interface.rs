use soroban_sdk::{contractclient, Address, BytesN, Env};

use super::types::{OracleError, OracleRecord};

#[contractclient(name = "OracleContractClient")]
pub trait OracleInterface {
    fn __constructor(env: Env, owner: Address, updater: Address);
    fn version() -> u32;
    fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), OracleError>;
    fn owner(env: Env) -> Address;
    fn updater(env: Env) -> Address;
    fn is_not_valid(env: Env, subject: Address) -> (bool, u64);
    fn get_record(env: Env, subject: Address) -> OracleRecord;
    fn set_value(
        env: Env,
        caller: Address,
        subject: Address,
        validity: bool,
        timestamp: u64,
    ) -> Result<(), OracleError>;
    fn update_oracle_updater_address(
        env: Env,
        caller: Address,
        new_updater: Address,
    ) -> Result<(), OracleError>;
}
