// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::{ClearingAccountAllocation, ClearingAccountMapping, UnixSeconds};

/// One entry in the distribution schedule: a timestamp plus the bundle of
/// clearing-account allocations to execute together once due.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ScheduledDistribution {
    pub timestamp: UnixSeconds,
    pub allocations: Vec<ClearingAccountAllocation>,
}

/// Governance-controlled parameters: the recipient mapping for every
/// non-community clearing account, and the set of addresses excluded from
/// community payouts (and from the total-score denominator).
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct Params<AccountId> {
    pub mappings: Vec<ClearingAccountMapping<AccountId>>,
    pub excluded_addresses: Vec<AccountId>,
}

impl<AccountId> Default for Params<AccountId> {
    fn default() -> Self {
        Self {
            mappings: Vec::new(),
            excluded_addresses: Vec::new(),
        }
    }
}
