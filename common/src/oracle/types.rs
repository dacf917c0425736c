use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    NotOwner = 1,
    NotUpdater = 2,
    NotInitialized = 3,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,           // Identity allowed to rotate the updater
    Updater,         // Identity allowed to write records
    Record(Address), // Validity record of a subject
}

/// Stored validity of a subject. Subjects that were never written read as
/// the default `{ validity: false, timestamp: 0 }`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct OracleRecord {
    pub validity: bool,
    pub timestamp: u64,
}
