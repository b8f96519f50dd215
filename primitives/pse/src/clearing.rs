// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::Amount;

/// The fixed, process-wide set of treasury clearing accounts.
///
/// `Community` is distinguished: it is the only account that pays out
/// score-weighted to delegators rather than to an explicit recipient list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum ClearingAccount {
    Foundation,
    Alliance,
    Partnership,
    Investors,
    Team,
    Community,
}

impl ClearingAccount {
    /// All non-community clearing accounts, in the order mappings are
    /// expected to cover them.
    pub const NON_COMMUNITY: [ClearingAccount; 5] = [
        ClearingAccount::Foundation,
        ClearingAccount::Alliance,
        ClearingAccount::Partnership,
        ClearingAccount::Investors,
        ClearingAccount::Team,
    ];

    pub fn is_community(&self) -> bool {
        matches!(self, ClearingAccount::Community)
    }

    /// A short, stable, one-byte discriminant used to derive this account's
    /// module sub-account, the same role `T::DetermineRewardPotAccount`
    /// plays for validator reward pots in `xpallet-mining-staking`.
    pub fn discriminant(&self) -> u8 {
        match self {
            ClearingAccount::Foundation => 0,
            ClearingAccount::Alliance => 1,
            ClearingAccount::Partnership => 2,
            ClearingAccount::Investors => 3,
            ClearingAccount::Team => 4,
            ClearingAccount::Community => 5,
        }
    }
}

/// How much a given clearing account contributes to one distribution.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ClearingAccountAllocation {
    pub account: ClearingAccount,
    pub amount: Amount,
}

/// Recipient list for a non-community clearing account.
///
/// Payout is split evenly across `recipients`, with the final recipient
/// absorbing the remainder of an uneven division.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ClearingAccountMapping<AccountId> {
    pub account: ClearingAccount,
    pub recipients: Vec<AccountId>,
}
