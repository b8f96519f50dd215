// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! Runtime API definition required by the PSE RPC extension.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::too_many_arguments, clippy::unnecessary_mut_passed)]

use codec::Codec;
use sp_std::prelude::*;

pub use xpallet_pse::rpc::{ClearingAccountBalance, ScheduleQuery};
pub use xpallet_pse::{Amount, Params};

sp_api::decl_runtime_apis! {
    /// The API to query PSE module state.
    pub trait PseApi<AccountId>
    where
        AccountId: Codec,
    {
        /// `Score(addr) -> Amount`.
        fn score(who: AccountId) -> Amount;

        /// `ScheduledDistributions() -> {list, disableDistributions}`.
        fn scheduled_distributions() -> ScheduleQuery;

        /// `ClearingAccountBalances() -> list of {account, balance}`.
        fn clearing_account_balances() -> Vec<ClearingAccountBalance>;

        /// `Params() -> Params`.
        fn params() -> Params<AccountId>;
    }
}
