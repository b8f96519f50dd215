// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! The Distributor and the EndBlock Orchestrator that wires it in.
//!
//! A due distribution either runs to completion or leaves no trace: the
//! orchestrator wraps the whole attempt in `with_transaction`, so a failure
//! discards every transfer and score read made along the way instead of the
//! Distributor having to hand-roll its own snapshot/restore.

use frame_support::{
    storage::{with_transaction, TransactionOutcome},
    traits::{Currency, ExistenceRequirement},
};
use frame_system::pallet_prelude::BlockNumberFor;
use sp_std::vec::Vec;

use crate::*;

impl<T: Config> Pallet<T>
where
    BalanceOf<T>: TryFrom<u128> + TryInto<u128>,
{
    /// Runs once per block, after all in-block score updates have landed.
    ///
    /// Short-circuits immediately if the kill-switch is set, or if the
    /// consensus block time regressed since the last block observed (the
    /// "due" comparison in the Schedule Store assumes a monotone clock).
    /// Otherwise processes at most the single earliest-due schedule entry —
    /// never more, even if several entries are overdue, bounding per-block
    /// work to O(1) when nothing is due.
    pub(crate) fn run_end_block_orchestrator() {
        if Self::distributions_disabled() {
            return;
        }

        let now = Self::now();
        if let Err(e) = Self::check_block_time_monotonic(now) {
            DisableDistributions::<T>::put(true);
            log::error!(
                target: "runtime::pse",
                "{:?}, disabling future distributions",
                e,
            );
            return;
        }

        let outcome = with_transaction(|| match Self::process_next_due_entry(now) {
            Ok(()) => TransactionOutcome::Commit(Ok(())),
            Err(e) => TransactionOutcome::Rollback(Err(e)),
        });

        if let Err(e) = outcome {
            DisableDistributions::<T>::put(true);
            log::error!(
                target: "runtime::pse",
                "distribution failed, disabling future distributions: {}",
                e,
            );
        }
    }

    /// Rejects a block time earlier than the last one observed; otherwise
    /// records `now` as the new high-water mark.
    fn check_block_time_monotonic(now: UnixSeconds) -> Result<(), Error<T>> {
        let last = LastBlockTime::<T>::get();
        if now < last {
            return Err(Error::<T>::NonMonotonicBlockTime);
        }
        LastBlockTime::<T>::put(now);
        Ok(())
    }

    /// Processes the single earliest-due schedule entry, if any is due by
    /// `now`. A no-op (`Ok(())`) if nothing is due, which also means no
    /// score accrual is flushed — `FlushAll` only ever runs ahead of an
    /// actual payout read, per spec, and inside this transaction scope so a
    /// rolled-back distribution leaves the score table untouched too.
    fn process_next_due_entry(now: UnixSeconds) -> Result<(), DistributionError> {
        let Some((timestamp, allocations)) = Self::peek_due(now) else {
            return Ok(());
        };

        Self::flush_all(frame_system::Pallet::<T>::block_number());

        let params = Self::params();
        for allocation in &allocations {
            Self::process_allocation(allocation, &params)?;
        }

        Schedule::<T>::remove(timestamp);
        Self::deposit_event(Event::<T>::AllocationDistributed(timestamp));
        Ok(())
    }

    fn process_allocation(
        allocation: &ClearingAccountAllocation,
        params: &ParamsOf<T>,
    ) -> Result<(), DistributionError> {
        let source = Self::clearing_account_id(allocation.account);
        let available = Self::account_balance(&source)?;
        if available < allocation.amount {
            return Err(DistributionError::InsufficientClearingFunds);
        }

        if allocation.account.is_community() {
            Self::process_community_allocation(&source, &allocation.amount, params)
        } else {
            Self::process_mapped_allocation(&source, allocation.account, &allocation.amount, params)
        }
    }

    fn process_community_allocation(
        source: &T::AccountId,
        amount: &Amount,
        params: &ParamsOf<T>,
    ) -> Result<(), DistributionError> {
        let eligible = Self::eligible_delegators(params);

        let total_score = eligible
            .iter()
            .fold(Amount::zero(), |acc, (_, score)| acc.checked_add(score));

        if total_score.is_zero() {
            return Self::transfer_to_community_pool(source, amount);
        }

        let mut distributed = Amount::zero();
        for (delegator, score) in &eligible {
            let share = amount.mul_div_trunc(score, &total_score);
            if share.is_zero() {
                continue;
            }
            Self::transfer(source, delegator, &share)?;
            distributed = distributed.checked_add(&share);
            Self::deposit_event(Event::<T>::CommunityDistributed(
                delegator.clone(),
                share,
                score.clone(),
                total_score.clone(),
            ));
        }

        let remainder = amount
            .checked_sub(&distributed)
            .ok_or(DistributionError::InternalArithmetic)?;
        if !remainder.is_zero() {
            Self::transfer_to_community_pool(source, &remainder)?;
        }
        Ok(())
    }

    fn process_mapped_allocation(
        source: &T::AccountId,
        account: ClearingAccount,
        amount: &Amount,
        params: &ParamsOf<T>,
    ) -> Result<(), DistributionError> {
        let mapping = params
            .mappings
            .iter()
            .find(|m| m.account == account)
            .ok_or(DistributionError::MissingMapping)?;

        let n = mapping.recipients.len() as u128;
        let per = amount.mul_div_trunc(&Amount::from_u128(1), &Amount::from_u128(n));
        let paid_to_others = per.saturating_mul_u64((n - 1) as u64);
        let remainder = amount
            .checked_sub(&paid_to_others)
            .ok_or(DistributionError::InternalArithmetic)?;

        for (index, recipient) in mapping.recipients.iter().enumerate() {
            let share = if index + 1 == mapping.recipients.len() {
                remainder.clone()
            } else {
                per.clone()
            };
            Self::transfer(source, recipient, &share)?;
        }
        Ok(())
    }

    /// Addresses with a Score-Engine checkpoint, excluding governance's
    /// exclusion list, paired with their current score, in canonical
    /// address order.
    fn eligible_delegators(params: &ParamsOf<T>) -> Vec<(T::AccountId, Amount)> {
        let entries: Vec<(T::AccountId, StakingTimeRecord<BlockNumberFor<T>>)> =
            StakingTimeOf::<T>::iter().collect();
        let entries = xp_pse::sort_by_canonical_key(entries);
        entries
            .into_iter()
            .filter(|(who, _)| !params.excluded_addresses.contains(who))
            .map(|(who, _)| {
                let score = ScoreOf::<T>::get(&who);
                (who, score)
            })
            .collect()
    }

    fn account_balance(who: &T::AccountId) -> Result<Amount, DistributionError> {
        let free: u128 = T::Currency::free_balance(who)
            .try_into()
            .map_err(|_| DistributionError::InternalArithmetic)?;
        Ok(Amount::from_u128(free))
    }

    fn transfer_to_community_pool(
        source: &T::AccountId,
        amount: &Amount,
    ) -> Result<(), DistributionError> {
        let pool = T::CommunityPool::community_pool_account();
        Self::transfer(source, &pool, amount)
    }

    fn transfer(
        source: &T::AccountId,
        recipient: &T::AccountId,
        amount: &Amount,
    ) -> Result<(), DistributionError> {
        let raw: u128 = amount.to_u128().ok_or(DistributionError::InternalArithmetic)?;
        let balance: BalanceOf<T> = raw
            .try_into()
            .map_err(|_| DistributionError::InternalArithmetic)?;
        T::Currency::transfer(source, recipient, balance, ExistenceRequirement::AllowDeath)
            .map_err(|_| DistributionError::TransferFailed)
    }
}
