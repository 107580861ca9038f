//! # NYNJA coin pallet
//!
//! A single fungible token with a hard supply cap, issued over a sequence of
//! numbered token sales.
//!
//! Three singleton roles gate the mutating calls:
//!
//! - **owner**: starts and ends sales, reassigns every role (including itself).
//! - **assigner**: issues new tokens, either as `mint` (sale proceeds) or as
//!   `assign` (distribution outside of the sale). Both have the same accounting.
//! - **locker**: freezes and releases outgoing transfers of individual holders.
//!
//! A holder can only be locked while the sale in which it was first funded is
//! still ongoing. Unlocking is allowed at any time. Batch variants of issuance
//! and (un)locking are all-or-nothing.

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` is deprecated upstream but still the cheapest read API here
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Decode;
use frame_support::{
    dispatch::DispatchResult, ensure, pallet_prelude::*, storage::with_storage_layer,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::{IssuanceKind, LockRecord, SaleId};
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(test)]
mod proptests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub const LOG_TARGET: &str = "pallet-nynja-coin";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Upper bound on `TotalSupply`, enforced on every issuance.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Decimal precision of the token.
        #[pallet::constant]
        type Decimals: Get<u8>;

        /// Maximum number of entries accepted by the batch calls.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        /// When set, holders first funded during the ongoing sale cannot send
        /// tokens until that sale ends, whether locked or not.
        #[pallet::constant]
        type RestrictSaleParticipants: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "NYNJACoin")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "NYN")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Starts/ends sales and reassigns roles
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Issues new tokens
    #[pallet::storage]
    #[pallet::getter(fn assigner)]
    pub type Assigner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Locks and unlocks holders
    #[pallet::storage]
    #[pallet::getter(fn locker)]
    pub type Locker<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Whether a token sale is in progress
    #[pallet::storage]
    #[pallet::getter(fn is_sale_ongoing)]
    pub type SaleOngoing<T> = StorageValue<_, bool, ValueQuery>;

    /// Id of the latest sale started, 0 before the first one
    #[pallet::storage]
    #[pallet::getter(fn current_sale_id)]
    pub type CurrentSaleId<T> = StorageValue<_, SaleId, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (holder, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Lock flag and funding sale of each holder
    #[pallet::storage]
    #[pallet::getter(fn lock_record)]
    pub type Locks<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, LockRecord, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Owner role handed over
        OwnershipTransferred { previous: T::AccountId, new: T::AccountId },
        /// Assigner role handed over
        AssignerTransferred { previous: Option<T::AccountId>, new: T::AccountId },
        /// Locker role handed over
        LockerTransferred { previous: Option<T::AccountId>, new: T::AccountId },
        /// A new token sale started
        SaleStarted { sale_id: SaleId },
        /// The ongoing token sale ended
        SaleEnded { sale_id: SaleId },
        /// Tokens issued as sale proceeds
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens issued outside of the sale proceeds
        Assigned { to: T::AccountId, amount: u128 },
        /// Tokens transferred from one account to another. Issuance is reported
        /// as a transfer from the null account.
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Spending allowance set
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Account locked (cannot send transfers)
        Locked { account: T::AccountId },
        /// Account unlocked
        Unlocked { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner.
        NotOwner,
        /// Caller is not the assigner.
        NotAssigner,
        /// Caller is not the locker.
        NotLocker,
        /// The null account cannot hold a role or receive tokens.
        NullAccount,
        /// Batch calls need at least one entry.
        EmptyBatch,
        /// Batch input lists differ in length.
        BatchLengthMismatch,
        /// A sale is already in progress.
        SaleAlreadyOngoing,
        /// No sale is in progress.
        NoOngoingSale,
        AlreadyLocked,
        NotLocked,
        /// The account was not first funded during the ongoing sale.
        NotCurrentSaleParticipant,
        /// Issuance would push the total supply above `MaxSupply`.
        MaxSupplyExceeded,
        /// Sender is locked.
        AccountLocked,
        /// Sender was funded in the ongoing sale and cannot send until it ends.
        SaleParticipantRestricted,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::ensure_not_null(&new_owner)?;

            Owner::<T>::put(&new_owner);
            log::debug!(target: LOG_TARGET, "owner role moved from {:?} to {:?}", who, new_owner);
            Self::deposit_event(Event::OwnershipTransferred { previous: who, new: new_owner });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_assigner())]
        pub fn transfer_assigner(origin: OriginFor<T>, new_assigner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::ensure_not_null(&new_assigner)?;

            let previous = Assigner::<T>::get();
            Assigner::<T>::put(&new_assigner);
            Self::deposit_event(Event::AssignerTransferred { previous, new: new_assigner });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_locker())]
        pub fn transfer_locker(origin: OriginFor<T>, new_locker: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            Self::ensure_not_null(&new_locker)?;

            let previous = Locker::<T>::get();
            Locker::<T>::put(&new_locker);
            Self::deposit_event(Event::LockerTransferred { previous, new: new_locker });
            Ok(())
        }

        /// Open the next sale. Sale ids start at 1.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::start_sale())]
        pub fn start_sale(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(!SaleOngoing::<T>::get(), Error::<T>::SaleAlreadyOngoing);

            let sale_id = CurrentSaleId::<T>::get().checked_add(1).ok_or(Error::<T>::Overflow)?;
            CurrentSaleId::<T>::put(sale_id);
            SaleOngoing::<T>::put(true);
            log::debug!(target: LOG_TARGET, "sale {} started", sale_id);
            Self::deposit_event(Event::SaleStarted { sale_id });
            Ok(())
        }

        /// Close the ongoing sale. The sale id is kept until the next start.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::end_sale())]
        pub fn end_sale(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(SaleOngoing::<T>::get(), Error::<T>::NoOngoingSale);

            SaleOngoing::<T>::put(false);
            let sale_id = CurrentSaleId::<T>::get();
            log::debug!(target: LOG_TARGET, "sale {} ended", sale_id);
            Self::deposit_event(Event::SaleEnded { sale_id });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_assigner(&who)?;
            Self::do_issue(to, amount, IssuanceKind::Mint)
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::assign())]
        pub fn assign(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_assigner(&who)?;
            Self::do_issue(to, amount, IssuanceKind::Assign)
        }

        /// Mint `amounts[i]` to `accounts[i]` for every `i`, or nothing at all.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::mint_in_batches(accounts.len() as u32))]
        pub fn mint_in_batches(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
            amounts: BoundedVec<u128, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_assigner(&who)?;
            Self::issue_in_batches(accounts.into_inner(), amounts.into_inner(), IssuanceKind::Mint)
        }

        /// Assign `amounts[i]` to `accounts[i]` for every `i`, or nothing at all.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::assign_in_batches(accounts.len() as u32))]
        pub fn assign_in_batches(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
            amounts: BoundedVec<u128, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_assigner(&who)?;
            Self::issue_in_batches(accounts.into_inner(), amounts.into_inner(), IssuanceKind::Assign)
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::lock_address())]
        pub fn lock_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_locker(&who)?;
            Self::do_lock(account)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unlock_address())]
        pub fn unlock_address(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_locker(&who)?;
            Self::do_unlock(account)
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::lock_in_batches(accounts.len() as u32))]
        pub fn lock_in_batches(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_locker(&who)?;
            Self::ensure_non_empty(accounts.len())?;
            Self::in_batch(|| accounts.into_iter().try_for_each(Self::do_lock))
        }

        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::unlock_in_batches(accounts.len() as u32))]
        pub fn unlock_in_batches(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_locker(&who)?;
            Self::ensure_non_empty(accounts.len())?;
            Self::in_batch(|| accounts.into_iter().try_for_each(Self::do_unlock))
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        /// Allow `spender` to move up to `amount` of the caller's tokens.
        /// Overwrites any previous allowance.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_not_null(&spender)?;

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Move tokens out of `from` on its behalf. The lock checks apply to
        /// `from`, not to the caller.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            // A locked holder reports the lock before any allowance error.
            Self::ensure_can_send(&from)?;

            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::move_balance(from.clone(), to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner (the deploying account). The three roles are
        /// required; `Option` only keeps the config `Default`.
        pub owner: Option<T::AccountId>,
        /// Initial assigner
        pub assigner: Option<T::AccountId>,
        /// Initial locker
        pub locker: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Pre-sale holdings (account, amount), recorded as funded before sale 1
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            let null = Pallet::<T>::null_account();
            let owner = self.owner.as_ref().expect("Owner is required");
            assert!(*owner != null, "Owner cannot be the null account");
            Owner::<T>::put(owner);

            let assigner = self.assigner.as_ref().expect("Assigner is required");
            assert!(*assigner != null, "Assigner cannot be the null account");
            Assigner::<T>::put(assigner);

            let locker = self.locker.as_ref().expect("Locker is required");
            assert!(*locker != null, "Locker cannot be the null account");
            Locker::<T>::put(locker);

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                assert!(*account != null, "Initial balance cannot go to the null account");
                total = total.checked_add(*amount).expect("Initial balances overflow u128");
                Balances::<T>::mutate(account, |balance| *balance = balance.saturating_add(*amount));
                Locks::<T>::mutate(account, |record| {
                    record.funding_sale.get_or_insert(0);
                });
            }
            assert!(total <= T::MaxSupply::get(), "Initial balances exceed MaxSupply");
            TotalSupply::<T>::put(total);

            log::debug!(
                target: LOG_TARGET,
                "genesis: {} holders, total supply {}",
                self.initial_balances.len(),
                total
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The reserved all-zero account. It can never hold a role or receive
    /// tokens, and is reported as the sender of issued tokens.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn max_supply() -> u128 {
        T::MaxSupply::get()
    }

    pub fn decimals() -> u8 {
        T::Decimals::get()
    }

    pub fn is_locked(who: &T::AccountId) -> bool {
        Locks::<T>::get(who).locked
    }

    /// Sale during which `who` first received issued tokens, if any.
    pub fn funding_sale_of(who: &T::AccountId) -> Option<SaleId> {
        Locks::<T>::get(who).funding_sale
    }

    /// Like [`Self::funding_sale_of`], with `0` for never-funded accounts.
    pub fn sale_id_of(who: &T::AccountId) -> SaleId {
        Self::funding_sale_of(who).unwrap_or_default()
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::NotOwner);
        Ok(())
    }

    fn ensure_assigner(who: &T::AccountId) -> DispatchResult {
        ensure!(Assigner::<T>::get().as_ref() == Some(who), Error::<T>::NotAssigner);
        Ok(())
    }

    fn ensure_locker(who: &T::AccountId) -> DispatchResult {
        ensure!(Locker::<T>::get().as_ref() == Some(who), Error::<T>::NotLocker);
        Ok(())
    }

    fn ensure_not_null(who: &T::AccountId) -> DispatchResult {
        ensure!(*who != Self::null_account(), Error::<T>::NullAccount);
        Ok(())
    }

    fn ensure_non_empty(len: usize) -> DispatchResult {
        ensure!(len > 0, Error::<T>::EmptyBatch);
        Ok(())
    }

    /// Shape check for batches over parallel input lists.
    pub fn ensure_batch_shape(len: usize, other_len: usize) -> DispatchResult {
        Self::ensure_non_empty(len)?;
        ensure!(len == other_len, Error::<T>::BatchLengthMismatch);
        Ok(())
    }

    /// Run `f` in its own storage layer: every write it made, events included,
    /// is discarded if it returns an error.
    ///
    /// Items inside `f` see the writes of the items before them, so per-item
    /// checks (the supply cap in particular) run against the running state.
    pub fn in_batch<R>(f: impl FnOnce() -> Result<R, DispatchError>) -> Result<R, DispatchError> {
        with_storage_layer(f).inspect_err(|e| {
            log::debug!(target: LOG_TARGET, "batch rolled back: {:?}", e);
        })
    }

    /// Issue to every `(accounts[i], amounts[i])` pair in order, atomically.
    pub fn issue_in_batches(
        accounts: Vec<T::AccountId>,
        amounts: Vec<u128>,
        kind: IssuanceKind,
    ) -> DispatchResult {
        Self::ensure_batch_shape(accounts.len(), amounts.len())?;
        Self::in_batch(|| {
            accounts
                .into_iter()
                .zip(amounts)
                .try_for_each(|(to, amount)| Self::do_issue(to, amount, kind))
        })
    }

    /// Credit `amount` new tokens to `to`. No caller check.
    pub fn do_issue(to: T::AccountId, amount: u128, kind: IssuanceKind) -> DispatchResult {
        Self::ensure_not_null(&to)?;

        let supply = TotalSupply::<T>::get()
            .checked_add(amount)
            .filter(|supply| *supply <= T::MaxSupply::get())
            .ok_or(Error::<T>::MaxSupplyExceeded)?;
        let balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(&to, balance);

        let sale_id = CurrentSaleId::<T>::get();
        Locks::<T>::mutate(&to, |record| {
            record.funding_sale.get_or_insert(sale_id);
        });

        let event = match kind {
            IssuanceKind::Mint => Event::Minted { to: to.clone(), amount },
            IssuanceKind::Assign => Event::Assigned { to: to.clone(), amount },
        };
        Self::deposit_event(event);
        Self::deposit_event(Event::Transferred { from: Self::null_account(), to, amount });
        Ok(())
    }

    /// Lock `account`. It must have been first funded in the ongoing sale.
    pub fn do_lock(account: T::AccountId) -> DispatchResult {
        ensure!(SaleOngoing::<T>::get(), Error::<T>::NoOngoingSale);
        let sale_id = CurrentSaleId::<T>::get();

        Locks::<T>::try_mutate(&account, |record| -> DispatchResult {
            ensure!(!record.locked, Error::<T>::AlreadyLocked);
            ensure!(record.funded_in(sale_id), Error::<T>::NotCurrentSaleParticipant);
            record.locked = true;
            Ok(())
        })?;

        Self::deposit_event(Event::Locked { account });
        Ok(())
    }

    pub fn do_unlock(account: T::AccountId) -> DispatchResult {
        Locks::<T>::try_mutate(&account, |record| -> DispatchResult {
            ensure!(record.locked, Error::<T>::NotLocked);
            record.locked = false;
            Ok(())
        })?;

        Self::deposit_event(Event::Unlocked { account });
        Ok(())
    }

    /// Checks applied to the sending side of every transfer.
    pub fn ensure_can_send(who: &T::AccountId) -> DispatchResult {
        let record = Locks::<T>::get(who);
        ensure!(!record.locked, Error::<T>::AccountLocked);
        if T::RestrictSaleParticipants::get() && SaleOngoing::<T>::get() {
            ensure!(
                !record.funded_in(CurrentSaleId::<T>::get()),
                Error::<T>::SaleParticipantRestricted
            );
        }
        Ok(())
    }

    pub fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_can_send(&from)?;
        Self::move_balance(from, to, amount)
    }

    /// Balance movement without the sender gate. Callers run
    /// [`Self::ensure_can_send`] first.
    fn move_balance(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_not_null(&to)?;

        let from_balance = Balances::<T>::get(&from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

        if from != to {
            let to_balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(&from, from_balance - amount);
            Balances::<T>::insert(&to, to_balance);
        }

        Self::deposit_event(Event::Transferred { from, to, amount });
        Ok(())
    }

    /// Ledger invariants: balances sum to the supply, the supply is within the
    /// cap, and every role has exactly one non-null holder.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let supply = TotalSupply::<T>::get();
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows u128")?;
        ensure!(sum == supply, "TotalSupply does not match the sum of balances");
        ensure!(supply <= T::MaxSupply::get(), "TotalSupply exceeds MaxSupply");

        let null = Self::null_account();
        for holder in [Owner::<T>::get(), Assigner::<T>::get(), Locker::<T>::get()] {
            let holder = holder.ok_or("Role has no holder")?;
            ensure!(holder != null, "Role held by the null account");
        }
        Ok(())
    }
}
