//! # Treasury Withdrawal Tests

use super::*;
use crate::test::{deposit_payload, setup, TestSetup};
use bridge_fee_common::events::FeeDistributedEvent;
use bridge_fee_common::FeeAssetKind;
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{vec, Address, Bytes, BytesN, Env, IntoVal};

fn balance(env: &Env, token_addr: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token_addr).balance(who)
}

/// Seed the handler's custody with `amount` of the resource's asset.
fn fund_custody(t: &TestSetup, amount: i128) {
    StellarAssetClient::new(&t.env, &t.token_addr).mint(&t.client.address, &amount);
}

#[test]
fn test_withdraw_to_multiple_recipients() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    let total = t.client.withdraw_fees(
        &t.admin,
        &t.resource,
        &vec![&t.env, alice.clone(), bob.clone()],
        &vec![&t.env, 300i128, 200i128],
    );

    assert_eq!(total, 500);
    assert_eq!(balance(&t.env, &t.token_addr, &alice), 300);
    assert_eq!(balance(&t.env, &t.token_addr, &bob), 200);
    assert_eq!(t.client.get_custody_balance(&t.resource), 500);
}

#[test]
fn test_withdraw_collected_fees() {
    let t = setup(FeeAssetKind::Native);
    t.client.set_fee_percent(&t.admin, &t.resource, &5_000);
    let payer = Address::generate(&t.env);
    StellarAssetClient::new(&t.env, &t.token_addr).mint(&payer, &1_000);
    t.client.collect_fee(
        &payer,
        &1,
        &2,
        &t.resource,
        &deposit_payload(&t.env, 1000),
        &Bytes::new(&t.env),
        &500,
    );

    let treasury = Address::generate(&t.env);
    t.client.withdraw_fees(
        &t.admin,
        &t.resource,
        &vec![&t.env, treasury.clone()],
        &vec![&t.env, 500i128],
    );
    assert_eq!(balance(&t.env, &t.token_addr, &treasury), 500);
    assert_eq!(t.client.get_custody_balance(&t.resource), 0);
}

#[test]
fn test_withdraw_requires_admin() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let outsider = Address::generate(&t.env);

    assert_eq!(
        t.client.try_withdraw_fees(
            &outsider,
            &t.resource,
            &vec![&t.env, outsider.clone()],
            &vec![&t.env, 1_000i128],
        ),
        Err(Ok(FeeError::Unauthorized))
    );
    assert_eq!(balance(&t.env, &t.token_addr, &outsider), 0);
    assert_eq!(t.client.get_custody_balance(&t.resource), 1_000);
}

#[test]
fn test_withdraw_arity_mismatch() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);

    assert_eq!(
        t.client.try_withdraw_fees(
            &t.admin,
            &t.resource,
            &vec![&t.env, alice.clone()],
            &vec![&t.env, 100i128, 100i128],
        ),
        Err(Ok(FeeError::ArityMismatch))
    );
    assert_eq!(balance(&t.env, &t.token_addr, &alice), 0);
}

#[test]
fn test_withdraw_exceeding_custody_pays_nobody() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    // First entry alone is affordable; the batch as a whole is not.
    assert_eq!(
        t.client.try_withdraw_fees(
            &t.admin,
            &t.resource,
            &vec![&t.env, alice.clone(), bob.clone()],
            &vec![&t.env, 600i128, 401i128],
        ),
        Err(Ok(FeeError::InsufficientTreasuryBalance))
    );
    assert_eq!(balance(&t.env, &t.token_addr, &alice), 0);
    assert_eq!(balance(&t.env, &t.token_addr, &bob), 0);
    assert_eq!(t.client.get_custody_balance(&t.resource), 1_000);
}

#[test]
fn test_withdraw_negative_amount_rejected() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    assert_eq!(
        t.client.try_withdraw_fees(
            &t.admin,
            &t.resource,
            &vec![&t.env, alice.clone(), bob.clone()],
            &vec![&t.env, 500i128, -100i128],
        ),
        Err(Ok(FeeError::InvalidAmount))
    );
    assert_eq!(balance(&t.env, &t.token_addr, &alice), 0);
}

#[test]
fn test_withdraw_total_overflow_rejected() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);

    assert_eq!(
        t.client.try_withdraw_fees(
            &t.admin,
            &t.resource,
            &vec![&t.env, alice.clone(), alice.clone()],
            &vec![&t.env, i128::MAX, 1i128],
        ),
        Err(Ok(FeeError::FeeArithmeticOverflow))
    );
}

#[test]
fn test_withdraw_unregistered_resource_rejected() {
    let t = setup(FeeAssetKind::Token);
    let unknown = BytesN::from_array(&t.env, &[0xee; 32]);
    assert_eq!(
        t.client.try_withdraw_fees(&t.admin, &unknown, &vec![&t.env], &vec![&t.env]),
        Err(Ok(FeeError::ResourceNotRegistered))
    );
}

#[test]
fn test_withdraw_empty_batch() {
    let t = setup(FeeAssetKind::Token);
    assert_eq!(
        t.client.withdraw_fees(&t.admin, &t.resource, &vec![&t.env], &vec![&t.env]),
        0
    );
}

#[test]
fn test_withdraw_repeatable_until_drained() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);
    let recipients = vec![&t.env, alice.clone()];
    let amounts = vec![&t.env, 500i128];

    t.client.withdraw_fees(&t.admin, &t.resource, &recipients, &amounts);
    t.client.withdraw_fees(&t.admin, &t.resource, &recipients, &amounts);
    assert_eq!(
        t.client.try_withdraw_fees(&t.admin, &t.resource, &recipients, &amounts),
        Err(Ok(FeeError::InsufficientTreasuryBalance))
    );
    assert_eq!(balance(&t.env, &t.token_addr, &alice), 1_000);
    assert_eq!(t.client.get_custody_balance(&t.resource), 0);
}

#[test]
fn test_withdraw_emits_event_per_recipient() {
    let t = setup(FeeAssetKind::Token);
    fund_custody(&t, 1_000);
    let alice = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    t.client.withdraw_fees(
        &t.admin,
        &t.resource,
        &vec![&t.env, alice.clone(), bob.clone()],
        &vec![&t.env, 10i128, 20i128],
    );

    let (contract, _topics, data) = t.env.events().all().last().unwrap();
    assert_eq!(contract, t.client.address);
    let event: FeeDistributedEvent = data.into_val(&t.env);
    assert_eq!(
        event,
        FeeDistributedEvent {
            resource: t.resource.clone(),
            token: t.token_addr.clone(),
            recipient: bob.clone(),
            amount: 20,
            withdrawn_by: t.admin.clone(),
        }
    );
}
