use crate as pallet_nynja_coin;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, ConstU8},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        NynjaCoin: pallet_nynja_coin,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// One whole token in base units (18 decimals).
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Null account for `u64` account ids.
pub const NULL: u64 = 0;
pub const OWNER: u64 = 9;
pub const ASSIGNER: u64 = 8;
pub const LOCKER: u64 = 7;
pub const SOMEONE_ELSE: u64 = 6;

parameter_types! {
    // 5 billion tokens
    pub const MaxSupply: u128 = 5_000_000_000 * UNIT;
    // Toggled per test to model the stricter sale-participant rule.
    pub static RestrictSaleParticipants: bool = false;
}

impl pallet_nynja_coin::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = MaxSupply;
    type Decimals = ConstU8<18>;
    type MaxBatchSize = ConstU32<16>;
    type RestrictSaleParticipants = RestrictSaleParticipants;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with_balances(vec![])
}

/// Like [`new_test_ext`], with pre-sale holdings.
pub fn new_test_ext_with_balances(balances: Vec<(u64, u128)>) -> sp_io::TestExternalities {
    new_test_ext_with_genesis(pallet_nynja_coin::GenesisConfig::<Test> {
        initial_balances: balances,
        ..default_genesis()
    })
}

/// Roles and metadata used by every default mock externality.
pub fn default_genesis() -> pallet_nynja_coin::GenesisConfig<Test> {
    pallet_nynja_coin::GenesisConfig::<Test> {
        owner: Some(OWNER),
        assigner: Some(ASSIGNER),
        locker: Some(LOCKER),
        token_name: b"NYNJACoin".to_vec(),
        token_symbol: b"NYN".to_vec(),
        initial_balances: vec![],
    }
}

pub fn new_test_ext_with_genesis(
    genesis: pallet_nynja_coin::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Batch argument from a plain vector. Panics past `MaxBatchSize`.
pub fn batch<V: Clone>(items: &[V]) -> frame_support::BoundedVec<V, ConstU32<16>> {
    items.to_vec().try_into().ok().expect("batch within MaxBatchSize")
}
