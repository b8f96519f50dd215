// Copyright 2019-2023 ChainX Project Authors. Licensed under GPL-3.0.

//! RPC interface for the PSE module.

use std::sync::Arc;

use codec::Codec;
use jsonrpc_core::{Error, ErrorCode, Result};
use jsonrpc_derive::rpc;

use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_runtime::{generic::BlockId, traits::Block as BlockT};

use xpallet_pse_rpc_runtime_api::{
    Amount, ClearingAccountBalance, Params, PseApi as PseRuntimeApi, ScheduleQuery,
};

/// The call to runtime failed.
const RUNTIME_ERROR: i64 = 1;

/// Converts a runtime trap into an RPC error, the same shape `xp-rpc`'s
/// `runtime_error_into_rpc_err` produces for every other RPC crate in this
/// workspace.
fn runtime_error_into_rpc_err(err: impl std::fmt::Debug) -> Error {
    Error {
        code: ErrorCode::ServerError(RUNTIME_ERROR),
        message: "Runtime trapped".into(),
        data: Some(format!("{:?}", err).into()),
    }
}

/// PSE RPC methods.
#[rpc]
pub trait PseApi<BlockHash, AccountId>
where
    AccountId: Ord,
{
    /// Get the engagement score of the given delegator.
    #[rpc(name = "pse_scoreOf")]
    fn score(&self, who: AccountId, at: Option<BlockHash>) -> Result<Amount>;

    /// Get the pending schedule and the kill-switch status.
    #[rpc(name = "pse_scheduledDistributions")]
    fn scheduled_distributions(&self, at: Option<BlockHash>) -> Result<ScheduleQuery>;

    /// Get every clearing account's current bank-ledger balance.
    #[rpc(name = "pse_clearingAccountBalances")]
    fn clearing_account_balances(&self, at: Option<BlockHash>) -> Result<Vec<ClearingAccountBalance>>;

    /// Get the current governance parameters.
    #[rpc(name = "pse_params")]
    fn params(&self, at: Option<BlockHash>) -> Result<Params<AccountId>>;
}

/// A struct that implements [`PseApi`].
pub struct Pse<C, B> {
    client: Arc<C>,
    _marker: std::marker::PhantomData<B>,
}

impl<C, B> Pse<C, B> {
    /// Create new `Pse` with the given reference to the client.
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            _marker: Default::default(),
        }
    }
}

impl<C, Block, AccountId> PseApi<<Block as BlockT>::Hash, AccountId> for Pse<C, Block>
where
    Block: BlockT,
    C: Send + Sync + 'static + ProvideRuntimeApi<Block> + HeaderBackend<Block>,
    C::Api: PseRuntimeApi<Block, AccountId>,
    AccountId: Codec + Ord,
{
    fn score(&self, who: AccountId, at: Option<<Block as BlockT>::Hash>) -> Result<Amount> {
        let api = self.client.runtime_api();
        let at = BlockId::hash(at.unwrap_or_else(|| self.client.info().best_hash));
        api.score(&at, who).map_err(runtime_error_into_rpc_err)
    }

    fn scheduled_distributions(&self, at: Option<<Block as BlockT>::Hash>) -> Result<ScheduleQuery> {
        let api = self.client.runtime_api();
        let at = BlockId::hash(at.unwrap_or_else(|| self.client.info().best_hash));
        api.scheduled_distributions(&at)
            .map_err(runtime_error_into_rpc_err)
    }

    fn clearing_account_balances(
        &self,
        at: Option<<Block as BlockT>::Hash>,
    ) -> Result<Vec<ClearingAccountBalance>> {
        let api = self.client.runtime_api();
        let at = BlockId::hash(at.unwrap_or_else(|| self.client.info().best_hash));
        api.clearing_account_balances(&at)
            .map_err(runtime_error_into_rpc_err)
    }

    fn params(&self, at: Option<<Block as BlockT>::Hash>) -> Result<Params<AccountId>> {
        let api = self.client.runtime_api();
        let at = BlockId::hash(at.unwrap_or_else(|| self.client.info().best_hash));
        api.params(&at).map_err(runtime_error_into_rpc_err)
    }
}
