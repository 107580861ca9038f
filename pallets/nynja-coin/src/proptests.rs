//! Property tests: random call sequences against the mock runtime.

use crate::{mock::*, IssuanceKind};
use frame_support::{assert_ok, dispatch::DispatchResult};
use proptest::prelude::*;
use sp_core::storage::StateVersion;
use sp_io::storage::root as storage_root;

#[derive(Debug, Clone)]
enum Op {
    StartSale,
    EndSale,
    Issue { to: u64, amount: u128, kind: IssuanceKind },
    IssueBatch { entries: Vec<(u64, u128)>, kind: IssuanceKind },
    Lock(u64),
    Unlock(u64),
    LockBatch(Vec<u64>),
    Transfer { from: u64, to: u64, amount: u128 },
}

fn account() -> impl Strategy<Value = u64> {
    1u64..=5
}

// Mostly small amounts, with the occasional one that runs into the cap.
fn amount() -> impl Strategy<Value = u128> {
    prop_oneof![
        8 => 0u128..1_000,
        1 => Just(MaxSupply::get() / 2),
        1 => Just(MaxSupply::get()),
    ]
}

fn kind() -> impl Strategy<Value = IssuanceKind> {
    prop_oneof![Just(IssuanceKind::Mint), Just(IssuanceKind::Assign)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::StartSale),
        Just(Op::EndSale),
        (account(), amount(), kind()).prop_map(|(to, amount, kind)| Op::Issue { to, amount, kind }),
        (prop::collection::vec((account(), amount()), 1..6), kind())
            .prop_map(|(entries, kind)| Op::IssueBatch { entries, kind }),
        account().prop_map(Op::Lock),
        account().prop_map(Op::Unlock),
        prop::collection::vec(account(), 1..4).prop_map(Op::LockBatch),
        (account(), account(), 0u128..500)
            .prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
    ]
}

fn apply(op: Op) -> DispatchResult {
    match op {
        Op::StartSale => NynjaCoin::start_sale(RuntimeOrigin::signed(OWNER)),
        Op::EndSale => NynjaCoin::end_sale(RuntimeOrigin::signed(OWNER)),
        Op::Issue { to, amount, kind: IssuanceKind::Mint } =>
            NynjaCoin::mint(RuntimeOrigin::signed(ASSIGNER), to, amount),
        Op::Issue { to, amount, kind: IssuanceKind::Assign } =>
            NynjaCoin::assign(RuntimeOrigin::signed(ASSIGNER), to, amount),
        Op::IssueBatch { entries, kind } => {
            let (accounts, amounts): (Vec<u64>, Vec<u128>) = entries.into_iter().unzip();
            match kind {
                IssuanceKind::Mint => NynjaCoin::mint_in_batches(
                    RuntimeOrigin::signed(ASSIGNER),
                    batch(&accounts),
                    batch(&amounts),
                ),
                IssuanceKind::Assign => NynjaCoin::assign_in_batches(
                    RuntimeOrigin::signed(ASSIGNER),
                    batch(&accounts),
                    batch(&amounts),
                ),
            }
        },
        Op::Lock(account) => NynjaCoin::lock_address(RuntimeOrigin::signed(LOCKER), account),
        Op::Unlock(account) => NynjaCoin::unlock_address(RuntimeOrigin::signed(LOCKER), account),
        Op::LockBatch(accounts) =>
            NynjaCoin::lock_in_batches(RuntimeOrigin::signed(LOCKER), batch(&accounts)),
        Op::Transfer { from, to, amount } =>
            NynjaCoin::transfer(RuntimeOrigin::signed(from), to, amount),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Supply matches balances and stays under the cap, and a rejected call
    /// leaves no trace in storage.
    #[test]
    fn ledger_invariants_hold(ops in prop::collection::vec(op(), 1..40)) {
        new_test_ext().execute_with(|| {
            for op in ops {
                let before = storage_root(StateVersion::V1);
                if apply(op).is_err() {
                    assert_eq!(before, storage_root(StateVersion::V1));
                }
                assert_ok!(NynjaCoin::do_try_state());

                // Only funded holders can ever be locked
                for account in 1..=5u64 {
                    let record = NynjaCoin::lock_record(&account);
                    if record.locked {
                        let sale = record.funding_sale.expect("locked holder was funded");
                        assert!((1..=NynjaCoin::current_sale_id()).contains(&sale));
                    }
                }
            }
        });
    }

    /// A batch issuance applies every entry or none of them.
    #[test]
    fn batch_issuance_is_all_or_nothing(
        prefix in prop::collection::vec(op(), 0..20),
        entries in prop::collection::vec((account(), amount()), 1..6),
    ) {
        new_test_ext().execute_with(|| {
            for op in prefix {
                let _ = apply(op);
            }
            let supply_before = NynjaCoin::total_supply();
            let balances_before: Vec<u128> = (1..=5u64).map(|a| NynjaCoin::balance_of(&a)).collect();

            let requested = entries
                .iter()
                .try_fold(0u128, |acc, (_, amount)| acc.checked_add(*amount));
            let outcome = apply(Op::IssueBatch { entries, kind: IssuanceKind::Assign });

            match outcome {
                Ok(()) => {
                    let requested = requested.expect("accepted batch fits in u128");
                    assert_eq!(NynjaCoin::total_supply(), supply_before + requested);
                }
                Err(_) => {
                    assert_eq!(NynjaCoin::total_supply(), supply_before);
                    let balances_after: Vec<u128> =
                        (1..=5u64).map(|a| NynjaCoin::balance_of(&a)).collect();
                    assert_eq!(balances_after, balances_before);
                }
            }
        });
    }
}
