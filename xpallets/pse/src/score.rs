// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! The Score Engine: per-delegator engagement score accrual from bonded
//! stake observed over elapsed blocks.
//!
//! Anchored on delegation-change events rather than on every block, the
//! same space/time trade-off `xp-mining-common`'s `ComputeMiningWeight`
//! makes for validator/nominator mining weight: a delegator with stable
//! stake incurs one store write per distribution, not per block.

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::BlockNumberFor;
use sp_runtime::traits::UniqueSaturatedInto;
use sp_std::vec::Vec;

use crate::*;

impl<T: Config> Pallet<T> {
    /// Push-style notification that `who`'s bonded stake changed to
    /// `new_bonded_amount` as of `at`. Flushes the pending accrual first so
    /// the old bonded amount is credited up to this exact height.
    pub fn on_delegation_changed(who: &T::AccountId, new_bonded_amount: Amount, at: BlockNumberFor<T>) {
        Self::flush(who, at);
        StakingTimeOf::<T>::insert(
            who,
            StakingTimeRecord {
                last_observed_block: at,
                bonded_at_last_obs: new_bonded_amount,
            },
        );
    }

    /// Credits `who`'s score with `bonded_at_last_obs * (at - last_observed_block)`
    /// and advances the checkpoint to `at`. A no-op if `who` has no
    /// checkpoint yet, or if `at` has not advanced past the checkpoint.
    pub fn flush(who: &T::AccountId, at: BlockNumberFor<T>) {
        let Some(mut checkpoint) = StakingTimeOf::<T>::get(who) else {
            return;
        };
        if at <= checkpoint.last_observed_block {
            return;
        }
        let elapsed = at - checkpoint.last_observed_block;
        let elapsed: u64 = elapsed.unique_saturated_into();
        let delta = checkpoint.bonded_at_last_obs.saturating_mul_u64(elapsed);
        if !delta.is_zero() {
            ScoreOf::<T>::mutate(who, |score| *score = score.checked_add(&delta));
        }
        checkpoint.last_observed_block = at;
        StakingTimeOf::<T>::insert(who, checkpoint);
    }

    /// Flushes every address with a checkpoint, in canonical address order,
    /// ahead of a distribution read. FRAME storage-map iteration order is a
    /// function of the hasher, not insertion or address order, so the
    /// canonical order this module's determinism invariant requires is
    /// produced by an explicit sort rather than relied upon from `iter()`.
    pub fn flush_all(at: BlockNumberFor<T>) {
        let entries: Vec<(T::AccountId, StakingTimeRecord<BlockNumberFor<T>>)> =
            StakingTimeOf::<T>::iter().collect();
        let entries = xp_pse::sort_by_canonical_key(entries);
        for (who, _) in entries {
            Self::flush(&who, at);
        }
    }
}

/// Lets an external staking pallet push delegation-lifecycle events into
/// this one without depending on its concrete `Config`, the same role
/// `AssetMining` plays for `xpallet-mining-staking`.
impl<T: Config> xp_pse::PseObserver<T::AccountId, BlockNumberFor<T>> for Pallet<T> {
    fn on_delegation_changed(delegator: &T::AccountId, new_bonded_amount: Amount, at: BlockNumberFor<T>) {
        Self::on_delegation_changed(delegator, new_bonded_amount, at);
    }
}
