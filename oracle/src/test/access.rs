#![cfg(test)]
extern crate std;

use super::OracleTest;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{Address, Env, IntoVal, Symbol};

#[test]
fn test_set_value_requires_caller_auth() {
    let test = OracleTest::setup();
    let subject = Address::generate(&test.env);

    test.oracle_client
        .set_value(&test.updater, &subject, &true, &1000);

    assert_eq!(
        test.env.auths(),
        std::vec![(
            test.updater.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.oracle_client.address.clone(),
                    Symbol::new(&test.env, "set_value"),
                    (test.updater.clone(), subject.clone(), true, 1000_u64).into_val(&test.env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_rotation_requires_caller_auth() {
    let test = OracleTest::setup();
    let new_updater = Address::generate(&test.env);

    test.oracle_client
        .update_oracle_updater_address(&test.owner, &new_updater);

    assert_eq!(
        test.env.auths(),
        std::vec![(
            test.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.oracle_client.address.clone(),
                    Symbol::new(&test.env, "update_oracle_updater_address"),
                    (test.owner.clone(), new_updater.clone()).into_val(&test.env),
                )),
                sub_invocations: std::vec![],
            }
        )]
    );
}

#[test]
fn test_reads_need_no_auth() {
    let test = OracleTest::setup_with_env(Env::default());
    let subject = Address::generate(&test.env);

    assert_eq!(test.oracle_client.is_not_valid(&subject), (false, 0));
    assert_eq!(test.oracle_client.updater(), test.updater);
    assert!(test.env.auths().is_empty());
}

#[test]
#[should_panic(expected = "Error(Auth, InvalidAction)")]
fn test_unsigned_set_value_panics() {
    let test = OracleTest::setup_with_env(Env::default());
    let subject = Address::generate(&test.env);

    test.oracle_client
        .set_value(&test.updater, &subject, &true, &1000);
}
