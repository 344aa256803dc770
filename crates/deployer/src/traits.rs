//! Trait definitions for the external chain boundary.
//!
//! These abstract the JSON-RPC node interactions to enable unit testing the
//! deployment flow with mocks.

use {
    alloy::primitives::{Address, Bytes},
    anyhow::Result,
};

/// Abstracts chain read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChainRead: Send + Sync {
    /// Returns the chain id reported by the connected node.
    async fn chain_id(&self) -> Result<u64>;
}

/// Abstracts transaction submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChainWrite: Send + Sync {
    /// Broadcasts a contract creation transaction carrying `code` and waits
    /// for it to be mined. Returns the address of the created contract.
    async fn deploy_contract(&self, code: Bytes) -> Result<Address>;
}
