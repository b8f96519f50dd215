// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use crate::Amount;

/// Push-style notification of a delegation lifecycle change (create, add,
/// partial undelegate, full undelegate).
///
/// The concrete staking pallet of a runtime that wires this module in
/// should call `on_delegation_changed` from its own bond/unbond/rebond
/// extrinsics, the way `AssetMining` lets an external pallet push
/// weight-affecting events into `xpallet-mining-staking`.
pub trait PseObserver<AccountId, BlockNumber> {
    fn on_delegation_changed(delegator: &AccountId, new_bonded_amount: Amount, at: BlockNumber);
}

impl<AccountId, BlockNumber> PseObserver<AccountId, BlockNumber> for () {
    fn on_delegation_changed(_delegator: &AccountId, _new_bonded_amount: Amount, _at: BlockNumber) {}
}

/// The sink that receives a community distribution's un-distributable
/// remainder (zero total score, or integer-division leftovers).
pub trait CommunityPoolSink<AccountId> {
    fn community_pool_account() -> AccountId;
}
