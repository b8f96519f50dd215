// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

use frame_support::{
    construct_runtime,
    pallet_prelude::*,
    parameter_types,
    traits::ConstU32,
    PalletId,
};
use frame_system::EnsureSignedBy;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    AccountId32, BuildStorage,
};

use crate::{self as xpallet_pse, CommunityPoolSink};

pub(crate) type AccountId = AccountId32;
pub(crate) type Balance = u128;
pub(crate) type BlockNumber = u64;

pub const ALICE: AccountId = AccountId32::new([1u8; 32]);
pub const BOB: AccountId = AccountId32::new([2u8; 32]);
pub const CHARLIE: AccountId = AccountId32::new([3u8; 32]);
pub const AUTHORITY: AccountId = AccountId32::new([9u8; 32]);
pub const COMMUNITY_POOL: AccountId = AccountId32::new([42u8; 32]);

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
    pub struct Test
    {
        System: frame_system::{Pallet, Call, Config<T>, Storage, Event<T>},
        Timestamp: pallet_timestamp::{Pallet, Call, Storage, Inherent},
        Balances: pallet_balances::{Pallet, Call, Storage, Config<T>, Event<T>},
        Pse: xpallet_pse::{Pallet, Call, Storage, Event<T>, Config<T>},
    }
);

parameter_types! {
    pub const BlockHashCount: u64 = 250;
}

impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = BlockHashCount;
    type DbWeight = ();
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const ExistentialDeposit: Balance = 1;
}

impl pallet_balances::Config for Test {
    type Balance = Balance;
    type DustRemoval = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type AccountStore = System;
    type WeightInfo = ();
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ConstU32<50>;
    type ReserveIdentifier = [u8; 8];
    type RuntimeHoldReason = RuntimeHoldReason;
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type FreezeIdentifier = RuntimeFreezeReason;
    type MaxHolds = ConstU32<0>;
    type MaxFreezes = ConstU32<0>;
}

parameter_types! {
    pub const MinimumPeriod: u64 = 1;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = MinimumPeriod;
    type WeightInfo = ();
}

pub struct DummyCommunityPool;
impl CommunityPoolSink<AccountId> for DummyCommunityPool {
    fn community_pool_account() -> AccountId {
        COMMUNITY_POOL
    }
}

parameter_types! {
    pub const PsePalletId: PalletId = PalletId(*b"pse/clr_");
}

impl crate::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type UnixTime = Timestamp;
    type PseAuthority = EnsureSignedBy<SingleAuthority, AccountId>;
    type CommunityPool = DummyCommunityPool;
    type PalletId = PsePalletId;
}

pub struct SingleAuthority;
impl frame_support::traits::SortedMembers<AccountId> for SingleAuthority {
    fn sorted_members() -> sp_std::vec::Vec<AccountId> {
        sp_std::vec![AUTHORITY]
    }
}

/// Test externalities builder, following the `ExtBuilder` shape used across
/// this workspace's other pallet mocks.
pub struct ExtBuilder {
    balances: Vec<(AccountId, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            balances: vec![
                (ALICE, 1_000),
                (BOB, 1_000),
                (CHARLIE, 1_000),
                (Pse::clearing_account_id(xpallet_pse::ClearingAccount::Community), 1_000_000),
                (Pse::clearing_account_id(xpallet_pse::ClearingAccount::Foundation), 1_000_000),
            ],
        }
    }
}

impl ExtBuilder {
    pub fn balances(mut self, balances: Vec<(AccountId, Balance)>) -> Self {
        self.balances = balances;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut storage = frame_system::GenesisConfig::<Test>::default()
            .build_storage()
            .unwrap();

        pallet_balances::GenesisConfig::<Test> {
            balances: self.balances,
        }
        .assimilate_storage(&mut storage)
        .unwrap();

        let mut ext = sp_io::TestExternalities::from(storage);
        ext.execute_with(|| {
            System::set_block_number(1);
            Timestamp::set_timestamp(1_000);
        });
        ext
    }

    pub fn build_and_execute(self, test: impl FnOnce()) {
        let mut ext = self.build();
        ext.execute_with(test);
    }
}
