//! Weights for pallet-nynja-coin.
//!
//! Reference figures sized from the storage accesses of each call. Regenerate
//! with `frame-omni-bencher` against the `runtime-benchmarks` build before
//! relying on them in production.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-nynja-coin.
pub trait WeightInfo {
    fn transfer_ownership() -> Weight;
    fn transfer_assigner() -> Weight;
    fn transfer_locker() -> Weight;
    fn start_sale() -> Weight;
    fn end_sale() -> Weight;
    fn mint() -> Weight;
    fn assign() -> Weight;
    fn mint_in_batches(n: u32) -> Weight;
    fn assign_in_batches(n: u32) -> Weight;
    fn lock_address() -> Weight;
    fn unlock_address() -> Weight;
    fn lock_in_batches(n: u32) -> Weight;
    fn unlock_in_batches(n: u32) -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Storage: Owner (r), role (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_assigner() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_locker() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Storage: Owner (r), SaleOngoing (r:1 w:1), CurrentSaleId (r:1 w:1)
    fn start_sale() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn end_sale() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    // Storage: Assigner (r), TotalSupply (r:1 w:1), Balances (r:1 w:1),
    // CurrentSaleId (r), Locks (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn assign() -> Weight {
        Self::mint()
    }
    fn mint_in_batches(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(Weight::from_parts(16_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
    fn assign_in_batches(n: u32) -> Weight {
        Self::mint_in_batches(n)
    }
    // Storage: Locker (r), SaleOngoing (r), CurrentSaleId (r), Locks (r:1 w:1)
    fn lock_address() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unlock_address() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn lock_in_batches(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(9_000_000, 2_500).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().reads(n.into()))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn unlock_in_batches(n: u32) -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(Weight::from_parts(8_000_000, 2_500).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads(n.into()))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    // Storage: Locks (r), SaleOngoing (r), CurrentSaleId (r), Balances (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(26_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(5))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(3))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_assigner() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_locker() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn start_sale() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn end_sale() -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn mint() -> Weight {
        Weight::from_parts(24_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn assign() -> Weight {
        Self::mint()
    }
    fn mint_in_batches(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 1_500)
            .saturating_add(Weight::from_parts(16_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1))
            .saturating_add(RocksDbWeight::get().writes((2_u64).saturating_mul(n.into())))
    }
    fn assign_in_batches(n: u32) -> Weight {
        Self::mint_in_batches(n)
    }
    fn lock_address() -> Weight {
        Weight::from_parts(15_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unlock_address() -> Weight {
        Weight::from_parts(13_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn lock_in_batches(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(9_000_000, 2_500).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().reads(n.into()))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
    fn unlock_in_batches(n: u32) -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(Weight::from_parts(8_000_000, 2_500).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().reads(n.into()))
            .saturating_add(RocksDbWeight::get().writes(n.into()))
    }
    fn transfer() -> Weight {
        Weight::from_parts(26_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(5))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(32_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
}
