// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use xp_pse::Amount;

/// The last-observed checkpoint used to compute a delegator's score increment.
///
/// Mirrors `NominatorLedger`'s `last_vote_weight` / `last_total_vote_weight`
/// checkpoint pair in the staking pallet this module is modelled on, but
/// tracks bonded stake directly instead of mining-weight shares.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct StakingTimeRecord<BlockNumber> {
    pub last_observed_block: BlockNumber,
    pub bonded_at_last_obs: Amount,
}
