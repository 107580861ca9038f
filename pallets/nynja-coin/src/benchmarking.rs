//! Benchmarking setup for pallet-nynja-coin

use super::*;

#[allow(unused)]
use crate::Pallet as NynjaCoin;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

fn set_roles<T: Config>() -> (T::AccountId, T::AccountId, T::AccountId) {
    let owner: T::AccountId = account("owner", 0, SEED);
    let assigner: T::AccountId = account("assigner", 0, SEED);
    let locker: T::AccountId = account("locker", 0, SEED);
    Owner::<T>::put(&owner);
    Assigner::<T>::put(&assigner);
    Locker::<T>::put(&locker);
    (owner, assigner, locker)
}

/// Opens sale 1 and funds `n` holders in it.
fn fund_in_open_sale<T: Config>(n: u32) -> Vec<T::AccountId> {
    SaleOngoing::<T>::put(true);
    CurrentSaleId::<T>::put(1);
    (0..n)
        .map(|i| {
            let holder: T::AccountId = account("holder", i, SEED);
            Locks::<T>::insert(&holder, LockRecord { locked: false, funding_sale: Some(1) });
            holder
        })
        .collect()
}

fn bounded<T: Config, V>(items: Vec<V>) -> BoundedVec<V, T::MaxBatchSize> {
    items.try_into().ok().expect("benchmark batch within MaxBatchSize")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer_ownership() {
        let (owner, _, _) = set_roles::<T>();
        let new_owner: T::AccountId = account("new", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn transfer_assigner() {
        let (owner, _, _) = set_roles::<T>();
        let new_assigner: T::AccountId = account("new", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_assigner.clone());

        assert_eq!(Assigner::<T>::get(), Some(new_assigner));
    }

    #[benchmark]
    fn transfer_locker() {
        let (owner, _, _) = set_roles::<T>();
        let new_locker: T::AccountId = account("new", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_locker.clone());

        assert_eq!(Locker::<T>::get(), Some(new_locker));
    }

    #[benchmark]
    fn start_sale() {
        let (owner, _, _) = set_roles::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(CurrentSaleId::<T>::get(), 1);
    }

    #[benchmark]
    fn end_sale() {
        let (owner, _, _) = set_roles::<T>();
        SaleOngoing::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(!SaleOngoing::<T>::get());
    }

    #[benchmark]
    fn mint() {
        let (_, assigner, _) = set_roles::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(assigner), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn assign() {
        let (_, assigner, _) = set_roles::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(assigner), recipient.clone(), 1_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000);
    }

    #[benchmark]
    fn mint_in_batches(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let (_, assigner, _) = set_roles::<T>();
        let accounts: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts: Vec<u128> = (0..n).map(|_| 1_000).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(assigner), bounded::<T, _>(accounts), bounded::<T, _>(amounts));

        assert_eq!(TotalSupply::<T>::get(), 1_000 * n as u128);
    }

    #[benchmark]
    fn assign_in_batches(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let (_, assigner, _) = set_roles::<T>();
        let accounts: Vec<T::AccountId> = (0..n).map(|i| account("recipient", i, SEED)).collect();
        let amounts: Vec<u128> = (0..n).map(|_| 1_000).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(assigner), bounded::<T, _>(accounts), bounded::<T, _>(amounts));

        assert_eq!(TotalSupply::<T>::get(), 1_000 * n as u128);
    }

    #[benchmark]
    fn lock_address() {
        let (_, _, locker) = set_roles::<T>();
        let holder = fund_in_open_sale::<T>(1).remove(0);

        #[extrinsic_call]
        _(RawOrigin::Signed(locker), holder.clone());

        assert!(Pallet::<T>::is_locked(&holder));
    }

    #[benchmark]
    fn unlock_address() {
        let (_, _, locker) = set_roles::<T>();
        let holder: T::AccountId = account("holder", 0, SEED);
        Locks::<T>::insert(&holder, LockRecord { locked: true, funding_sale: Some(1) });

        #[extrinsic_call]
        _(RawOrigin::Signed(locker), holder.clone());

        assert!(!Pallet::<T>::is_locked(&holder));
    }

    #[benchmark]
    fn lock_in_batches(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let (_, _, locker) = set_roles::<T>();
        let holders = fund_in_open_sale::<T>(n);

        #[extrinsic_call]
        _(RawOrigin::Signed(locker), bounded::<T, _>(holders.clone()));

        assert!(holders.iter().all(Pallet::<T>::is_locked));
    }

    #[benchmark]
    fn unlock_in_batches(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let (_, _, locker) = set_roles::<T>();
        let holders: Vec<T::AccountId> = (0..n)
            .map(|i| {
                let holder: T::AccountId = account("holder", i, SEED);
                Locks::<T>::insert(&holder, LockRecord { locked: true, funding_sale: Some(1) });
                holder
            })
            .collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(locker), bounded::<T, _>(holders.clone()));

        assert!(!holders.iter().any(Pallet::<T>::is_locked));
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Balances::<T>::insert(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000);
    }

    #[benchmark]
    fn transfer_from() {
        let holder: T::AccountId = account("holder", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        Balances::<T>::insert(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender), holder, recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    impl_benchmark_test_suite!(NynjaCoin, crate::mock::new_test_ext(), crate::mock::Test);
}
