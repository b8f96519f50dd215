// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! Read-only query surface, consumed by the runtime API and the RPC crate
//! the way `xpallet-mining-staking`'s `rpc.rs` exposes `validators_info` /
//! `staking_dividend_of` to its own runtime API.

use codec::{Decode, Encode};
use frame_support::traits::Currency;
use scale_info::TypeInfo;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::*;

/// The schedule query's response shape: the pending entries plus whether the
/// kill-switch has latched.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ScheduleQuery {
    pub schedule: Vec<ScheduledDistribution>,
    pub disable_distributions: bool,
}

/// One clearing account's current bank-ledger balance.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ClearingAccountBalance {
    pub account: ClearingAccount,
    pub balance: Amount,
}

impl<T: Config> Pallet<T>
where
    BalanceOf<T>: TryInto<u128>,
{
    /// `Score(addr) -> Amount`. Does not flush; callers needing up-to-block
    /// precision must trigger a flush first (the Score Engine never
    /// auto-flushes on a bare read).
    pub fn score(who: &T::AccountId) -> Amount {
        Self::score_of(who)
    }

    /// `ScheduledDistributions() -> {list, disableDistributions}`.
    pub fn scheduled_distributions() -> ScheduleQuery {
        ScheduleQuery {
            schedule: Self::list(),
            disable_distributions: Self::distributions_disabled(),
        }
    }

    /// `ClearingAccountBalances() -> list of {account, balance}`.
    pub fn clearing_account_balances() -> Vec<ClearingAccountBalance> {
        let mut accounts = ClearingAccount::NON_COMMUNITY.to_vec();
        accounts.push(ClearingAccount::Community);
        accounts
            .into_iter()
            .map(|account| {
                let who = Self::clearing_account_id(account);
                let balance = T::Currency::free_balance(&who)
                    .try_into()
                    .map(Amount::from_u128)
                    .unwrap_or_else(|_| Amount::zero());
                ClearingAccountBalance { account, balance }
            })
            .collect()
    }
}
