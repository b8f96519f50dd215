// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! # PSE (Proof-of-Stake-Engagement)
//!
//! Accrues a per-delegator engagement score from bonded stake observed over
//! time, and executes a governance-published schedule of treasury
//! distributions to a fixed set of clearing accounts and, for the
//! `Community` account, proportionally to every delegator's score.
//!
//! The heaviest lifting happens once per block in [`Pallet::on_finalize`]:
//! flush every pending score accrual, ask the schedule for the single
//! earliest due entry, and run it inside a storage transaction so a faulty
//! distribution can never leave partial transfers behind. A failed
//! distribution latches [`DisableDistributions`] permanently; recovery is a
//! governance call, not automatic.

#![cfg_attr(not(feature = "std"), no_std)]

mod distributor;
mod score;
mod schedule_store;
#[cfg(test)]
mod mock;
pub mod rpc;
mod types;

pub use pallet::*;
pub use types::StakingTimeRecord;
pub use xp_pse::{
    Amount, ClearingAccount, ClearingAccountAllocation, ClearingAccountMapping, CommunityPoolSink,
    Decimal, DistributionError, Params, PseObserver, ScheduledDistribution, UnixSeconds,
};

use frame_support::traits::Currency;

pub type BalanceOf<T> =
    <<T as Config>::Currency as Currency<<T as frame_system::Config>::AccountId>>::Balance;
pub type ParamsOf<T> = Params<<T as frame_system::Config>::AccountId>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_support::{pallet_prelude::*, traits::UnixTime, PalletId};
    use frame_system::pallet_prelude::*;
    use sp_runtime::traits::AccountIdConversion;
    use sp_std::vec::Vec;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The bank ledger collaborator that moves funds between clearing
        /// accounts and recipients.
        type Currency: Currency<Self::AccountId>;

        /// Reads the consensus block time, the `now` the schedule store is
        /// compared against.
        type UnixTime: UnixTime;

        /// The single designated governance authority allowed to call the
        /// dispatchables below.
        type PseAuthority: EnsureOrigin<Self::RuntimeOrigin>;

        /// The sink receiving a community distribution's un-distributable
        /// remainder.
        type CommunityPool: CommunityPoolSink<Self::AccountId>;

        /// The module id this pallet derives its clearing sub-accounts from.
        type PalletId: Get<PalletId>;
    }

    #[pallet::pallet]
    #[pallet::without_storage_info]
    pub struct Pallet<T>(PhantomData<T>);

    /// Per-delegator checkpoint the Score Engine accrues against.
    #[pallet::storage]
    #[pallet::getter(fn staking_time_of)]
    pub type StakingTimeOf<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, StakingTimeRecord<BlockNumberFor<T>>, OptionQuery>;

    /// Per-delegator cumulative engagement score.
    #[pallet::storage]
    #[pallet::getter(fn score_of)]
    pub type ScoreOf<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Amount, ValueQuery>;

    /// The pending schedule, keyed by its due Unix timestamp.
    #[pallet::storage]
    #[pallet::getter(fn schedule)]
    pub type Schedule<T: Config> =
        StorageMap<_, Twox64Concat, UnixSeconds, Vec<ClearingAccountAllocation>, OptionQuery>;

    /// Governance-controlled recipient mappings and exclusion list.
    #[pallet::storage]
    #[pallet::getter(fn params)]
    pub type PalletParams<T: Config> = StorageValue<_, ParamsOf<T>, ValueQuery>;

    /// One-way latch. Once set, the orchestrator short-circuits every block.
    #[pallet::storage]
    #[pallet::getter(fn distributions_disabled)]
    pub type DisableDistributions<T: Config> = StorageValue<_, bool, ValueQuery>;

    /// The block time observed by the last run of the EndBlock Orchestrator,
    /// compared against the current block time to enforce the "due" semantics'
    /// assumption of a monotone clock.
    #[pallet::storage]
    #[pallet::getter(fn last_block_time)]
    pub type LastBlockTime<T: Config> = StorageValue<_, UnixSeconds, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A single delegator's share of a community distribution.
        /// `(delegator, share, score, total_score)`
        CommunityDistributed(T::AccountId, Amount, Amount, Amount),
        /// A scheduled distribution ran to completion and was removed.
        AllocationDistributed(UnixSeconds),
        /// The distribution schedule was replaced by governance.
        ScheduleUpdated,
        /// The non-community clearing account recipient mappings were replaced.
        ClearingAccountMappingsUpdated,
        /// The excluded-address set changed.
        ExcludedAddressesUpdated,
        /// Governance latched the kill-switch.
        DistributionsDisabled,
        /// Governance cleared the kill-switch.
        DistributionsEnabled,
        /// A due distribution failed; the kill-switch was latched automatically.
        DistributionFailed(UnixSeconds),
    }

    #[pallet::error]
    pub enum Error<T> {
        /// A schedule timestamp was not strictly greater than the current
        /// block time, or duplicated another entry in the same list.
        InvalidSchedule,
        /// The mapping list did not cover exactly the five non-community
        /// clearing accounts once each, or a recipient list was empty.
        InvalidMappings,
        /// The consensus block time regressed against the last block the
        /// orchestrator observed; "due" semantics assume a monotone clock.
        NonMonotonicBlockTime,
    }

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        pub params: ParamsOf<T>,
        pub schedule: Vec<ScheduledDistribution>,
    }

    #[cfg(feature = "std")]
    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self {
                params: Default::default(),
                schedule: Default::default(),
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            PalletParams::<T>::put(self.params.clone());
            for entry in &self.schedule {
                Schedule::<T>::insert(entry.timestamp, entry.allocations.clone());
            }
        }
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_finalize(_n: BlockNumberFor<T>) {
            Self::run_end_block_orchestrator();
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Replaces the entire distribution schedule.
        ///
        /// Every timestamp must be strictly greater than the current block
        /// time and unique within the list; the list order has no meaning
        /// of its own since the store always serves the earliest-due entry.
        #[pallet::weight({0})]
        #[pallet::call_index(0)]
        pub fn update_distribution_schedule(
            origin: OriginFor<T>,
            schedule: Vec<ScheduledDistribution>,
        ) -> DispatchResult {
            T::PseAuthority::ensure_origin(origin)?;
            Self::do_upsert_schedule(schedule).map_err(|_| Error::<T>::InvalidSchedule)?;
            Self::deposit_event(Event::<T>::ScheduleUpdated);
            Ok(())
        }

        /// Replaces the recipient mapping for every non-community clearing
        /// account. Must cover each of the five non-community accounts
        /// exactly once, each with a non-empty recipient list.
        #[pallet::weight({0})]
        #[pallet::call_index(1)]
        pub fn update_clearing_account_mappings(
            origin: OriginFor<T>,
            mappings: Vec<ClearingAccountMapping<T::AccountId>>,
        ) -> DispatchResult {
            T::PseAuthority::ensure_origin(origin)?;
            ensure!(
                Self::mappings_cover_non_community_accounts(&mappings),
                Error::<T>::InvalidMappings
            );
            PalletParams::<T>::mutate(|params| params.mappings = mappings);
            Self::deposit_event(Event::<T>::ClearingAccountMappingsUpdated);
            Ok(())
        }

        /// Applies a diff to the excluded-address set. Removing an absent
        /// address, or adding a present one, is a no-op for that address.
        #[pallet::weight({0})]
        #[pallet::call_index(2)]
        pub fn update_excluded_addresses(
            origin: OriginFor<T>,
            add: Vec<T::AccountId>,
            remove: Vec<T::AccountId>,
        ) -> DispatchResult {
            T::PseAuthority::ensure_origin(origin)?;
            PalletParams::<T>::mutate(|params| {
                for addr in remove {
                    params.excluded_addresses.retain(|a| a != &addr);
                }
                for addr in add {
                    if !params.excluded_addresses.contains(&addr) {
                        params.excluded_addresses.push(addr);
                    }
                }
            });
            Self::deposit_event(Event::<T>::ExcludedAddressesUpdated);
            Ok(())
        }

        /// Latches the kill-switch. Idempotent.
        #[pallet::weight({0})]
        #[pallet::call_index(3)]
        pub fn disable_distributions(origin: OriginFor<T>) -> DispatchResult {
            T::PseAuthority::ensure_origin(origin)?;
            DisableDistributions::<T>::put(true);
            Self::deposit_event(Event::<T>::DistributionsDisabled);
            Ok(())
        }

        /// Clears the kill-switch.
        ///
        /// Without this, a latched kill-switch is permanent; exposed as an
        /// ordinary governance call so an operational incident is
        /// recoverable without a runtime upgrade.
        #[pallet::weight({0})]
        #[pallet::call_index(4)]
        pub fn enable_distributions(origin: OriginFor<T>) -> DispatchResult {
            T::PseAuthority::ensure_origin(origin)?;
            DisableDistributions::<T>::put(false);
            Self::deposit_event(Event::<T>::DistributionsEnabled);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub(crate) fn mappings_cover_non_community_accounts(
            mappings: &[ClearingAccountMapping<T::AccountId>],
        ) -> bool {
            if mappings.len() != ClearingAccount::NON_COMMUNITY.len() {
                return false;
            }
            for account in ClearingAccount::NON_COMMUNITY {
                let found = mappings.iter().find(|m| m.account == account);
                match found {
                    Some(m) if !m.recipients.is_empty() => {}
                    _ => return false,
                }
            }
            true
        }

        /// The sub-account a given clearing account's balance actually
        /// lives in, derived from the pallet's module id the same way a
        /// reward pot account is derived for a validator elsewhere.
        pub fn clearing_account_id(account: ClearingAccount) -> T::AccountId {
            T::PalletId::get().into_sub_account_truncating(account.discriminant())
        }

        pub fn now() -> UnixSeconds {
            T::UnixTime::now().as_secs()
        }
    }
}
