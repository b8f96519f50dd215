// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! A minimal runtime assembling `xpallet-pse` alongside the ambient FRAME
//! pallets its `Config` bounds require, for development and for exercising
//! the pallet's `on_finalize` wiring against a real `construct_runtime!`
//! aggregate rather than just its mock.
//!
//! Consensus, networking, a fee model, and the other pallets of the wider
//! workspace this crate was trimmed from are out of scope here; `pallet-sudo`
//! stands in for the single designated governance authority PSE's
//! dispatchables are gated behind.

#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

#[cfg(feature = "std")]
include!(concat!(env!("OUT_DIR"), "/wasm_binary.rs"));

use sp_api::impl_runtime_apis;
use sp_core::OpaqueMetadata;
use sp_runtime::{
    create_runtime_str, generic,
    traits::{AccountIdConversion, AccountIdLookup, BlakeTwo256, Block as BlockT},
    transaction_validity::{TransactionSource, TransactionValidity},
    ApplyExtrinsicResult,
};
use sp_std::prelude::*;
#[cfg(feature = "std")]
use sp_version::NativeVersion;
use sp_version::RuntimeVersion;

pub use frame_support::{construct_runtime, parameter_types, traits::ConstU32, PalletId};
use frame_system::EnsureSignedBy;

pub use xp_pse::{Amount, ClearingAccount, Decimal, Params};

/// An index to a block.
pub type BlockNumber = u32;
/// Account id type, matching the AccountId32 convention the rest of this
/// workspace's example runtimes use.
pub type AccountId = sp_runtime::AccountId32;
/// Balance of an account.
pub type Balance = u128;
/// Index of a transaction in the chain, matching `frame_system::Config::Nonce`.
pub type Nonce = u32;
/// A hash of some data used by the chain.
pub type Hash = sp_core::H256;
/// Moment, the type `pallet_timestamp` uses for the unix-millis clock.
pub type Moment = u64;
/// Signature type used by extrinsics.
pub type Signature = sp_runtime::MultiSignature;

#[sp_version::runtime_version]
pub const VERSION: RuntimeVersion = RuntimeVersion {
    spec_name: create_runtime_str!("pse-dev"),
    impl_name: create_runtime_str!("pse-dev"),
    authoring_version: 1,
    spec_version: 1,
    impl_version: 1,
    apis: RUNTIME_API_VERSIONS,
    transaction_version: 1,
    state_version: 1,
};

/// The version information used to identify this runtime when compiled natively.
#[cfg(feature = "std")]
pub fn native_version() -> NativeVersion {
    NativeVersion {
        runtime_version: VERSION,
        can_author_with: Default::default(),
    }
}

parameter_types! {
    pub const BlockHashCount: BlockNumber = 2400;
    pub const Version: RuntimeVersion = VERSION;
    pub const SS58Prefix: u8 = 42;
}

impl frame_system::Config for Runtime {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = Nonce;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = AccountIdLookup<AccountId, ()>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = BlockHashCount;
    type DbWeight = ();
    type Version = Version;
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<Balance>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = SS58Prefix;
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const MinimumPeriod: Moment = 1_000;
}

impl pallet_timestamp::Config for Runtime {
    type Moment = Moment;
    type OnTimestampSet = ();
    type MinimumPeriod = MinimumPeriod;
    type WeightInfo = ();
}

parameter_types! {
    pub const ExistentialDeposit: Balance = 1;
}

impl pallet_balances::Config for Runtime {
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

impl pallet_sudo::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type RuntimeCall = RuntimeCall;
    type WeightInfo = pallet_sudo::weights::SubstrateWeight<Runtime>;
}

/// The community pool is the runtime's own treasury-less sink: the sudo
/// key's account, standing in for a dedicated treasury pallet this minimal
/// runtime does not carry.
pub struct SudoCommunityPool;
impl xpallet_pse::CommunityPoolSink<AccountId> for SudoCommunityPool {
    fn community_pool_account() -> AccountId {
        Sudo::key().unwrap_or_else(|| PalletId(*b"pse/pool").into_account_truncating())
    }
}

/// A `SortedMembers` reading the single sudo key, so PSE's governance calls
/// are reachable with the same key `pallet-sudo` already gates `sudo(...)`
/// calls behind.
pub struct SudoKeyAsAuthority;
impl frame_support::traits::SortedMembers<AccountId> for SudoKeyAsAuthority {
    fn sorted_members() -> Vec<AccountId> {
        Sudo::key().into_iter().collect()
    }
}

parameter_types! {
    pub const PsePalletId: PalletId = PalletId(*b"pse/clr_");
}

impl xpallet_pse::Config for Runtime {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type UnixTime = Timestamp;
    type PseAuthority = EnsureSignedBy<SudoKeyAsAuthority, AccountId>;
    type CommunityPool = SudoCommunityPool;
    type PalletId = PsePalletId;
}

construct_runtime!(
    pub struct Runtime
    {
        System: frame_system::{Pallet, Call, Config<T>, Storage, Event<T>} = 0,
        Timestamp: pallet_timestamp::{Pallet, Call, Storage, Inherent} = 1,
        Balances: pallet_balances::{Pallet, Call, Storage, Config<T>, Event<T>} = 2,
        Sudo: pallet_sudo::{Pallet, Call, Config<T>, Storage, Event<T>} = 3,
        Pse: xpallet_pse::{Pallet, Call, Storage, Event<T>, Config<T>} = 4,
    }
);

/// Block header type as expected by this runtime.
pub type Header = generic::Header<BlockNumber, BlakeTwo256>;
/// Block type as expected by this runtime.
pub type Block = generic::Block<Header, UncheckedExtrinsic>;
/// The SignedExtension to the basic transaction logic. No fee model and no
/// transaction-era checks beyond what `frame_system` itself provides: this
/// runtime exists to exercise the pallet, not to serve real traffic.
pub type SignedExtra = (
    frame_system::CheckNonZeroSender<Runtime>,
    frame_system::CheckSpecVersion<Runtime>,
    frame_system::CheckTxVersion<Runtime>,
    frame_system::CheckGenesis<Runtime>,
    frame_system::CheckEra<Runtime>,
    frame_system::CheckNonce<Runtime>,
    frame_system::CheckWeight<Runtime>,
);
/// Unchecked extrinsic type as expected by this runtime.
pub type UncheckedExtrinsic =
    generic::UncheckedExtrinsic<AccountId, RuntimeCall, Signature, SignedExtra>;
/// Extrinsic type that has already been checked.
pub type CheckedExtrinsic = generic::CheckedExtrinsic<AccountId, RuntimeCall, SignedExtra>;
/// Executive: handles dispatch to the various modules.
pub type Executive = frame_executive::Executive<
    Runtime,
    Block,
    frame_system::ChainContext<Runtime>,
    Runtime,
    AllPalletsWithSystem,
>;

impl_runtime_apis! {
    impl sp_api::Core<Block> for Runtime {
        fn version() -> RuntimeVersion {
            VERSION
        }

        fn execute_block(block: Block) {
            Executive::execute_block(block)
        }

        fn initialize_block(header: &<Block as BlockT>::Header) {
            Executive::initialize_block(header)
        }
    }

    impl sp_api::Metadata<Block> for Runtime {
        fn metadata() -> OpaqueMetadata {
            OpaqueMetadata::new(Runtime::metadata().into())
        }

        fn metadata_at_version(version: u32) -> Option<OpaqueMetadata> {
            Runtime::metadata_at_version(version)
        }

        fn metadata_versions() -> Vec<u32> {
            Runtime::metadata_versions()
        }
    }

    impl sp_block_builder::BlockBuilder<Block> for Runtime {
        fn apply_extrinsic(extrinsic: <Block as BlockT>::Extrinsic) -> ApplyExtrinsicResult {
            Executive::apply_extrinsic(extrinsic)
        }

        fn finalize_block() -> <Block as BlockT>::Header {
            Executive::finalize_block()
        }

        fn inherent_extrinsics(data: sp_inherents::InherentData) -> Vec<<Block as BlockT>::Extrinsic> {
            data.create_extrinsics()
        }

        fn check_inherents(
            block: Block,
            data: sp_inherents::InherentData,
        ) -> sp_inherents::CheckInherentsResult {
            data.check_extrinsics(&block)
        }
    }

    impl sp_transaction_pool::runtime_api::TaggedTransactionQueue<Block> for Runtime {
        fn validate_transaction(
            source: TransactionSource,
            tx: <Block as BlockT>::Extrinsic,
            block_hash: <Block as BlockT>::Hash,
        ) -> TransactionValidity {
            Executive::validate_transaction(source, tx, block_hash)
        }
    }

    impl sp_offchain::OffchainWorkerApi<Block> for Runtime {
        fn offchain_worker(header: &<Block as BlockT>::Header) {
            Executive::offchain_worker(header)
        }
    }

    impl frame_system_rpc_runtime_api::AccountNonceApi<Block, AccountId, Nonce> for Runtime {
        fn account_nonce(account: AccountId) -> Nonce {
            System::account_nonce(account)
        }
    }

    impl xpallet_pse_rpc_runtime_api::PseApi<Block, AccountId> for Runtime {
        fn score(who: AccountId) -> Amount {
            Pse::score(&who)
        }

        fn scheduled_distributions() -> xpallet_pse::rpc::ScheduleQuery {
            Pse::scheduled_distributions()
        }

        fn clearing_account_balances() -> Vec<xpallet_pse::rpc::ClearingAccountBalance> {
            Pse::clearing_account_balances()
        }

        fn params() -> Params<AccountId> {
            Pse::params()
        }
    }
}
